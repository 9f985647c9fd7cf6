use ck_core::{ClipboardPayload, EntryId, EntryKind, HashError};
use std::sync::Arc;
use tracing::{info, info_span, warn};

use crate::clipboard::{ChangeDetector, ClipboardAccessor};
use crate::history::HistoryStore;

#[derive(Debug, thiserror::Error)]
pub enum RestoreEntryError {
    #[error("history entry not found: {0}")]
    NotFound(EntryId),

    #[error(transparent)]
    Hashing(#[from] HashError),

    #[error("failed to write clipboard: {0:#}")]
    Clipboard(anyhow::Error),
}

/// Copy a history entry back onto the system clipboard.
///
/// The change detector is told about the content before the clipboard write,
/// so the next tick sees it as already known and adds nothing. A failed
/// write puts the previous dedup state back.
pub struct RestoreHistoryEntry {
    history: Arc<HistoryStore>,
    accessor: Arc<ClipboardAccessor>,
    detector: Arc<ChangeDetector>,
}

impl RestoreHistoryEntry {
    pub fn new(
        history: Arc<HistoryStore>,
        accessor: Arc<ClipboardAccessor>,
        detector: Arc<ChangeDetector>,
    ) -> Self {
        Self {
            history,
            accessor,
            detector,
        }
    }

    pub fn execute(&self, id: &EntryId) -> Result<EntryKind, RestoreEntryError> {
        let _span = info_span!("usecase.restore_history_entry.execute", entry_id = %id).entered();

        let entry = self
            .history
            .find(id)
            .ok_or_else(|| RestoreEntryError::NotFound(id.clone()))?;

        let previous = self.detector.dedup_state();
        let written = match entry.payload() {
            ClipboardPayload::Text(text) => {
                self.detector.update_last_text(text.as_str());
                self.accessor.try_set_text(text)
            }
            ClipboardPayload::Image(image) => {
                let hash = self.accessor.try_compute_hash(image)?;
                self.detector.update_last_image_hash(hash);
                self.accessor.try_set_image(image)
            }
        };

        if let Err(err) = written {
            // nothing reached the clipboard, so the previous content is still
            // the one to compare against
            self.detector.restore_dedup(previous);
            warn!(error = %err, "Restore failed, dedup state rolled back");
            return Err(RestoreEntryError::Clipboard(err));
        }

        info!(kind = %entry.kind(), "Restored history entry to clipboard");
        Ok(entry.kind())
    }
}
