//! Channel-based feedback for the background resume download.
//!
//! The fetch runs on a spawned task; the frame loop polls the receiver
//! without blocking and surfaces events as toasts.

use std::path::PathBuf;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::config::ResumeConfig;

/// Events sent from the download task to the TUI.
#[derive(Debug, Clone)]
pub enum DownloadEvent {
    /// The fetch has started.
    Started,
    /// The resume was saved to the given path.
    Finished(PathBuf),
    /// The fetch failed.
    Failed(String),
}

/// Creates a new download channel pair (sender, receiver).
pub fn create_download_channel() -> (UnboundedSender<DownloadEvent>, UnboundedReceiver<DownloadEvent>)
{
    mpsc::unbounded_channel()
}

/// Spawns the resume fetch, reporting progress on `tx`.
///
/// Fire-and-forget: the task owns its config snapshot and the channel
/// sender; send failures only mean the UI went away first.
pub fn spawn_download(config: ResumeConfig, tx: UnboundedSender<DownloadEvent>) {
    tokio::spawn(async move {
        let _ = tx.send(DownloadEvent::Started);

        let dir = config.target_dir();
        match folio_core::resume::download(&config.url, &dir, &config.filename).await {
            Ok(path) => {
                let _ = tx.send(DownloadEvent::Finished(path));
            }
            Err(e) => {
                warn!(error = %e, "resume download failed");
                let _ = tx.send(DownloadEvent::Failed(e.to_string()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_delivers_events_in_order() {
        let (tx, mut rx) = create_download_channel();
        tx.send(DownloadEvent::Started).unwrap();
        tx.send(DownloadEvent::Finished(PathBuf::from("/tmp/r.pdf"))).unwrap();

        assert!(matches!(rx.try_recv(), Ok(DownloadEvent::Started)));
        match rx.try_recv() {
            Ok(DownloadEvent::Finished(path)) => assert_eq!(path, PathBuf::from("/tmp/r.pdf")),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }
}
