//! Resume download: fetch the externally hosted PDF and save it locally.
//!
//! Download initiation is fire-and-forget from the caller's perspective;
//! there is no retry logic here. The front end spawns [`download`] on a
//! background task and reports the outcome through its own channel.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Where the resume PDF is hosted.
pub const RESUME_URL: &str =
    "https://docs.google.com/uc?export=download&id=1cltFyEokx2kycIhgbmNvuVlLDgiv6CaX";

/// Filename the saved resume is given.
pub const RESUME_FILENAME: &str = "Muhammad_Qasim_Resume.pdf";

/// Downloads the resume at `url` into `dir` as `filename`, returning the
/// saved path.
///
/// Non-2xx responses are errors; the directory is created if missing.
pub async fn download(url: &str, dir: &Path, filename: &str) -> Result<PathBuf> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    tokio::fs::create_dir_all(dir).await?;
    let dest = dir.join(filename);
    tokio::fs::write(&dest, &bytes).await?;

    info!(path = %dest.display(), bytes = bytes.len(), "resume saved");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_download_bad_url_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = download("http://127.0.0.1:1/resume.pdf", dir.path(), "r.pdf").await;
        assert!(result.is_err());
        assert!(!dir.path().join("r.pdf").exists());
    }

    #[test]
    fn test_fixed_target_filename() {
        assert_eq!(RESUME_FILENAME, "Muhammad_Qasim_Resume.pdf");
        assert!(RESUME_URL.starts_with("https://"));
    }
}
