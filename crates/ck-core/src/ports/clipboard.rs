//! Clipboard port - abstracts the platform clipboard
//!
//! The core depends on exactly these primitives; everything else (format
//! priority, image fallback, dedup) is built on top of them in the app layer.

use anyhow::Result;

use crate::clipboard::{ClipboardData, DataObject, FormatId};

/// Platform clipboard capability.
///
/// Implementations are synchronous and may block; callers on an async
/// runtime should run them on the blocking pool.
pub trait SystemClipboardPort: Send + Sync {
    /// Current clipboard text, `None` when the clipboard holds no text.
    fn get_text(&self) -> Result<Option<String>>;

    fn set_text(&self, text: &str) -> Result<()>;

    /// Format identifiers currently advertised by the clipboard owner.
    fn available_formats(&self) -> Result<Vec<FormatId>>;

    /// Raw data for one format, `None` when the format is not present.
    fn get_data(&self, format: &FormatId) -> Result<Option<ClipboardData>>;

    /// Replace the clipboard with every entry of `object` at once.
    fn set_data_object(&self, object: DataObject) -> Result<()>;
}
