//! New entry notifier port
//!
//! Zero-argument hook fired after a new entry lands in the history. The UI
//! uses it for visual feedback; it has no effect on detection state. It is
//! called without any detector lock held.

pub trait NewEntryNotifierPort: Send + Sync {
    fn on_new_entry(&self);
}

impl<F> NewEntryNotifierPort for F
where
    F: Fn() + Send + Sync,
{
    fn on_new_entry(&self) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn closures_are_notifiers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let notifier: Arc<dyn NewEntryNotifierPort> = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.on_new_entry();
        notifier.on_new_entry();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
