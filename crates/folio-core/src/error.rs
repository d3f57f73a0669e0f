//! Error types for Folio Core.

use thiserror::Error;

/// Core error type for portfolio operations.
///
/// The state operations (viewport tracking, navigation, catalog reads) are
/// total and never fail; errors only arise at the edges, fetching and
/// saving the resume.
#[derive(Error, Debug)]
pub enum FolioError {
    /// HTTP errors while fetching the resume
    #[error("download error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors while saving the resume
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for portfolio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
