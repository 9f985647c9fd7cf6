//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`App`](crate::App) construction. Not a builder:
//! no defaults, no optional fields, no hidden logic.
//! 仅用于参数打包，无默认值，无可选字段。

use ck_core::ports::{
    ClockPort, ContentHashPort, EntryExportPort, ImageCodecPort, SystemClipboardPort,
};
use std::sync::Arc;

pub struct AppDeps {
    // Clipboard dependencies / 剪贴板依赖
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub image_codec: Arc<dyn ImageCodecPort>,

    // Storage dependencies / 存储依赖
    pub entry_export: Arc<dyn EntryExportPort>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
    pub hash: Arc<dyn ContentHashPort>,
}
