//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on ck-infra, ck-platform and ck-app at once.
//! Assembly only, no decisions.
//! 这是唯一同时依赖 ck-infra、ck-platform 和 ck-app 的地方，仅用于组装。

use std::sync::Arc;
use std::time::Duration;

use ck_app::{App, AppDeps};
use ck_core::config::AppConfig;
use ck_core::ports::NewEntryNotifierPort;
use ck_infra::{FileEntryExporter, PngImageCodec, Sha256Hasher, SystemClock};
use ck_platform::{LocalClipboard, PollingClipboardRuntime};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Create every port implementation the app needs.
pub fn wire_dependencies() -> WiringResult<AppDeps> {
    let clipboard =
        LocalClipboard::new().map_err(|e| WiringError::ClipboardInit(format!("{e:#}")))?;

    Ok(AppDeps {
        clipboard: Arc::new(clipboard),
        image_codec: Arc::new(PngImageCodec),
        entry_export: Arc::new(FileEntryExporter),
        clock: Arc::new(SystemClock),
        hash: Arc::new(Sha256Hasher),
    })
}

/// Assembled app plus the runtime that polls for it.
pub struct Wired {
    pub app: App,
    pub watcher: Arc<PollingClipboardRuntime>,
}

pub fn build(
    config: &AppConfig,
    notifier: Option<Arc<dyn NewEntryNotifierPort>>,
) -> WiringResult<Wired> {
    let app = App::new(wire_dependencies()?, notifier);
    let watcher = Arc::new(PollingClipboardRuntime::new(
        app.poll_handler(),
        Duration::from_millis(config.watcher_interval_ms),
    ));
    Ok(Wired { app, watcher })
}
