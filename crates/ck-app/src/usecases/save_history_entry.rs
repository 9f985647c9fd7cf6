use ck_core::ports::EntryExportPort;
use ck_core::{ClipboardEntry, EntryId, EntryKind};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, info_span};

use crate::history::HistoryStore;

#[derive(Debug, thiserror::Error)]
pub enum SaveEntryError {
    #[error("history entry not found: {0}")]
    NotFound(EntryId),

    #[error("failed to save entry: {0:#}")]
    Export(anyhow::Error),
}

/// Default file name offered when saving an entry, e.g. `clipboard-130509.png`.
pub fn suggested_file_name(entry: &ClipboardEntry) -> String {
    let stamp = entry.display_timestamp().replace(':', "");
    let ext = match entry.kind() {
        EntryKind::Text => "txt",
        EntryKind::Image => "png",
    };
    format!("clipboard-{stamp}.{ext}")
}

/// Write a history entry's payload to a user-chosen file.
pub struct SaveHistoryEntry {
    history: Arc<HistoryStore>,
    exporter: Arc<dyn EntryExportPort>,
}

impl SaveHistoryEntry {
    pub fn new(history: Arc<HistoryStore>, exporter: Arc<dyn EntryExportPort>) -> Self {
        Self { history, exporter }
    }

    pub fn execute(&self, id: &EntryId, path: &Path) -> Result<(), SaveEntryError> {
        let _span = info_span!("usecase.save_history_entry.execute", entry_id = %id).entered();

        let entry = self
            .history
            .find(id)
            .ok_or_else(|| SaveEntryError::NotFound(id.clone()))?;

        self.exporter
            .export(&entry, path)
            .map_err(SaveEntryError::Export)?;

        info!(path = %path.display(), "Saved history entry");
        Ok(())
    }
}
