//! Use cases driven by the binary or a GUI shell.
//!
//! [PollingClipboardRuntime] → ChangeDetector → HistoryStore → listeners
//!                                                  ↓
//!                         RestoreHistoryEntry / SaveHistoryEntry

pub mod generate_password;
pub mod restore_history_entry;
pub mod save_history_entry;
pub mod start_clipboard_watcher;
pub mod stop_clipboard_watcher;

pub use generate_password::GeneratePassword;
pub use restore_history_entry::{RestoreEntryError, RestoreHistoryEntry};
pub use save_history_entry::{suggested_file_name, SaveEntryError, SaveHistoryEntry};
pub use start_clipboard_watcher::{StartClipboardWatcher, StartClipboardWatcherError};
pub use stop_clipboard_watcher::{StopClipboardWatcher, StopClipboardWatcherError};
