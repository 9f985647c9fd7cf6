//! # ck-platform
//!
//! Platform-specific implementations for clipkeep.
//!
//! This crate talks to the operating system clipboard and owns the timer that
//! drives clipboard polling.

pub mod clipboard;
pub mod runtime;

pub use clipboard::LocalClipboard;
pub use runtime::{PollingClipboardRuntime, DEFAULT_POLL_INTERVAL};
