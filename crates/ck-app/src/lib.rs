//! clipkeep application layer
//!
//! Clipboard accessor, history store, change detection and the use cases the
//! binary (or a GUI shell) drives.

pub mod app;
pub mod clipboard;
pub mod deps;
pub mod history;
pub mod usecases;

pub use app::App;
pub use clipboard::{ChangeDetector, ClipboardAccessor};
pub use deps::AppDeps;
pub use history::{HistoryEvent, HistoryStore};
