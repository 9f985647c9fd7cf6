//! Assembled application: shared state plus use case accessors.

use ck_core::ports::{
    ClipboardPollHandler, EntryExportPort, NewEntryNotifierPort, WatcherControlPort,
};
use std::sync::Arc;

use crate::clipboard::{ChangeDetector, ClipboardAccessor};
use crate::deps::AppDeps;
use crate::history::HistoryStore;
use crate::usecases::{
    RestoreHistoryEntry, SaveHistoryEntry, StartClipboardWatcher, StopClipboardWatcher,
};

pub struct App {
    accessor: Arc<ClipboardAccessor>,
    history: Arc<HistoryStore>,
    detector: Arc<ChangeDetector>,
    entry_export: Arc<dyn EntryExportPort>,
}

impl App {
    pub fn new(deps: AppDeps, notifier: Option<Arc<dyn NewEntryNotifierPort>>) -> Self {
        let accessor = Arc::new(ClipboardAccessor::new(
            deps.clipboard,
            deps.image_codec,
            deps.hash,
        ));
        let history = Arc::new(HistoryStore::new());

        let mut detector = ChangeDetector::new(accessor.clone(), history.clone(), deps.clock);
        if let Some(notifier) = notifier {
            detector = detector.with_notifier(notifier);
        }

        Self {
            accessor,
            history,
            detector: Arc::new(detector),
            entry_export: deps.entry_export,
        }
    }

    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    pub fn accessor(&self) -> &Arc<ClipboardAccessor> {
        &self.accessor
    }

    pub fn change_detector(&self) -> &Arc<ChangeDetector> {
        &self.detector
    }

    /// Handler to hand to the watcher runtime.
    pub fn poll_handler(&self) -> Arc<dyn ClipboardPollHandler> {
        self.detector.clone()
    }

    pub fn restore_entry(&self) -> RestoreHistoryEntry {
        RestoreHistoryEntry::new(
            self.history.clone(),
            self.accessor.clone(),
            self.detector.clone(),
        )
    }

    pub fn save_entry(&self) -> SaveHistoryEntry {
        SaveHistoryEntry::new(self.history.clone(), self.entry_export.clone())
    }

    pub fn start_watcher(&self, watcher: Arc<dyn WatcherControlPort>) -> StartClipboardWatcher {
        StartClipboardWatcher::new(watcher)
    }

    pub fn stop_watcher(&self, watcher: Arc<dyn WatcherControlPort>) -> StopClipboardWatcher {
        StopClipboardWatcher::new(watcher)
    }
}
