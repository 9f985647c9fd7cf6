use ck_core::ports::{ClipboardPollHandler, ClockPort, NewEntryNotifierPort};
use ck_core::{ClipboardEntry, ContentHash, DedupState, DetectedChange};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use super::ClipboardAccessor;
use crate::history::HistoryStore;

/// Decides per tick whether the clipboard holds something new.
///
/// Text wins: a new text short-circuits the tick. Only when the text is
/// unchanged (or empty) is the image checked, by content hash. Every failure
/// below this point has already been logged by the accessor and shows up here
/// as "no content".
///
/// The dedup lock is held from the read until the entry is in the history,
/// so a concurrent [`update_last_text`](Self::update_last_text) lands
/// strictly before or after a tick, never in the middle of one. The notifier
/// fires after the lock is released.
pub struct ChangeDetector {
    accessor: Arc<ClipboardAccessor>,
    history: Arc<HistoryStore>,
    clock: Arc<dyn ClockPort>,
    notifier: Option<Arc<dyn NewEntryNotifierPort>>,
    dedup: Mutex<DedupState>,
}

impl ChangeDetector {
    pub fn new(
        accessor: Arc<ClipboardAccessor>,
        history: Arc<HistoryStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            accessor,
            history,
            clock,
            notifier: None,
            dedup: Mutex::new(DedupState::new()),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NewEntryNotifierPort>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Run one check: text first, image second.
    pub fn check(&self) -> DetectedChange {
        let mut dedup = self.dedup();

        if let Some(text) = self.accessor.get_text() {
            if dedup.is_new_text(&text) {
                dedup.remember_text(text.clone());
                let entry = ClipboardEntry::text(text, self.clock.now_ms());
                let id = entry.id().clone();
                let chars = entry.char_count().unwrap_or(0);
                info!(entry_id = %id, chars, "new clipboard text");
                self.record(dedup, entry);
                return DetectedChange::NewText(id);
            }
        }

        let Some(image) = self.accessor.get_image() else {
            return DetectedChange::Unchanged;
        };
        let Some(hash) = self.accessor.compute_hash(&image) else {
            return DetectedChange::Unchanged;
        };
        if !dedup.is_new_image(&hash) {
            return DetectedChange::Unchanged;
        }

        debug!(hash = %hash, "clipboard image changed");
        dedup.remember_image(hash);
        let entry = ClipboardEntry::image(image, self.clock.now_ms());
        let id = entry.id().clone();
        info!(entry_id = %id, dimensions = ?entry.dimensions(), "new clipboard image");
        self.record(dedup, entry);
        DetectedChange::NewImage(id)
    }

    /// The app just wrote `text` to the clipboard; do not capture it again.
    pub fn update_last_text(&self, text: impl Into<String>) {
        self.dedup().remember_text(text);
    }

    /// The app just wrote an image with this hash to the clipboard.
    pub fn update_last_image_hash(&self, hash: ContentHash) {
        self.dedup().remember_image(hash);
    }

    pub fn dedup_state(&self) -> DedupState {
        self.dedup().clone()
    }

    /// Put back a state taken with [`dedup_state`](Self::dedup_state), e.g.
    /// when a clipboard write announced through `update_last_*` failed.
    pub fn restore_dedup(&self, state: DedupState) {
        *self.dedup() = state;
    }

    // The notifier runs after the dedup lock is released, so it may call back
    // into the detector.
    fn record(&self, dedup: MutexGuard<'_, DedupState>, entry: ClipboardEntry) {
        self.history.prepend(entry);
        drop(dedup);
        if let Some(notifier) = &self.notifier {
            notifier.on_new_entry();
        }
    }

    fn dedup(&self) -> MutexGuard<'_, DedupState> {
        self.dedup.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ClipboardPollHandler for ChangeDetector {
    fn on_tick(&self) -> DetectedChange {
        self.check()
    }
}
