use ck_core::{ClipboardEntry, EntryId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::mpsc;
use tracing::{debug, trace};

type Subscriber = mpsc::UnboundedSender<HistoryEvent>;

#[derive(Debug, Clone)]
pub enum HistoryEvent {
    /// The entry is already at index 0 when this is received.
    Prepended(Arc<ClipboardEntry>),
}

/// In-memory clipboard history, newest first.
///
/// 内存中的剪贴板历史，最新条目在前。无容量上限，不持久化，不提供删除。
///
/// Every subscriber owns an unbounded channel and gets exactly one
/// [`HistoryEvent::Prepended`] per insert, in insert order. A slow observer
/// never loses events; a dropped receiver is pruned on the next insert.
pub struct HistoryStore {
    entries: RwLock<VecDeque<Arc<ClipboardEntry>>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn prepend(&self, entry: ClipboardEntry) -> Arc<ClipboardEntry> {
        let entry = Arc::new(entry);
        let mut entries = self.write();
        entries.push_front(entry.clone());

        // sent under the write lock so event order matches index order
        let mut subscribers = self.subscribers();
        subscribers.retain(|tx| tx.send(HistoryEvent::Prepended(entry.clone())).is_ok());
        drop(subscribers);

        trace!(entry_id = %entry.id(), len = entries.len(), "history prepend");
        entry
    }

    /// Insert an entry that did not come from the watcher.
    pub fn manual_add(&self, entry: ClipboardEntry) -> Arc<ClipboardEntry> {
        debug!(entry_id = %entry.id(), kind = %entry.kind(), "manual history add");
        self.prepend(entry)
    }

    /// Snapshot of the history, index 0 = newest.
    pub fn all(&self) -> Vec<Arc<ClipboardEntry>> {
        self.read().iter().cloned().collect()
    }

    pub fn get(&self, index: usize) -> Option<Arc<ClipboardEntry>> {
        self.read().get(index).cloned()
    }

    pub fn find(&self, id: &EntryId) -> Option<Arc<ClipboardEntry>> {
        self.read().iter().find(|entry| entry.id() == id).cloned()
    }

    pub fn latest(&self) -> Option<Arc<ClipboardEntry>> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Events for every insert after this call. Dropping the receiver
    /// unsubscribes.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<HistoryEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    // Entries are immutable, so a panic while holding the lock cannot leave
    // the deque half-updated.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<Arc<ClipboardEntry>>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<Subscriber>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<Arc<ClipboardEntry>>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
