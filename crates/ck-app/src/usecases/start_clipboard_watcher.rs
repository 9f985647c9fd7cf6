//! Use case for starting the clipboard watcher
//! 启动剪贴板监控器的用例

use ck_core::ports::{WatcherControlError, WatcherControlPort};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

/// Error type for clipboard watcher startup failures.
/// 剪贴板监控器启动失败的错误类型。
#[derive(Debug, thiserror::Error)]
pub enum StartClipboardWatcherError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),
}

impl From<WatcherControlError> for StartClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StartClipboardWatcherError::StartFailed(err.to_string())
    }
}

/// Starts clipboard polling through the [`WatcherControlPort`].
///
/// ## Behavior / 行为
/// - Starting an already-running watcher is a no-op.
/// - 重复启动是安全的。
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StartClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            if self.watcher_control.is_running() {
                info!("Clipboard watcher already running");
                return Ok(());
            }

            self.watcher_control.start_watcher().await?;

            info!("Clipboard watcher started");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
