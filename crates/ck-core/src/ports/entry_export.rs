use anyhow::Result;
use std::path::Path;

use crate::clipboard::ClipboardEntry;

/// Writes a history entry's payload to a file chosen by the user.
pub trait EntryExportPort: Send + Sync {
    fn export(&self, entry: &ClipboardEntry, path: &Path) -> Result<()>;
}
