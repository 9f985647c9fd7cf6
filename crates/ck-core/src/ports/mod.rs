//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core stays independent of the
//! OS clipboard, the image codec and the clock.
//!
//! ## Port Placement Guidelines
//!
//! A trait belongs here when it represents a capability that use cases
//! depend on and that the infra or platform layer implements.

mod clipboard;
mod clock;
mod entry_export;
mod hash;
mod image_codec;
mod notifier;
mod poll_handler;
pub mod watcher_control;

pub use clipboard::SystemClipboardPort;
pub use clock::ClockPort;
pub use entry_export::EntryExportPort;
pub use hash::ContentHashPort;
pub use image_codec::ImageCodecPort;
pub use notifier::NewEntryNotifierPort;
pub use poll_handler::ClipboardPollHandler;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
