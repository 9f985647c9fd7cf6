//! Use case for stopping the clipboard watcher
//! 停止剪贴板监控器的用例

use ck_core::ports::{WatcherControlError, WatcherControlPort};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum StopClipboardWatcherError {
    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}

impl From<WatcherControlError> for StopClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StopClipboardWatcherError::StopFailed(err.to_string())
    }
}

/// Stops clipboard polling. Idempotent; no tick fires after it returns.
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StopClipboardWatcherError> {
        let span = info_span!("usecase.stop_clipboard_watcher.execute");

        async {
            self.watcher_control.stop_watcher().await?;
            info!("Clipboard watcher stopped");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
