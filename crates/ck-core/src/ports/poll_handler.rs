//! Clipboard poll handler port
//!
//! Dependency inversion between the watcher runtime and the change detector:
//! - Platform layer (low-level) owns the timer and calls this abstraction
//! - App layer (high-level) implements it

use crate::clipboard::DetectedChange;

/// Invoked once per watcher tick.
///
/// Implementations must not fail: any error inside a tick is logged and
/// reported as [`DetectedChange::Unchanged`].
pub trait ClipboardPollHandler: Send + Sync {
    fn on_tick(&self) -> DetectedChange;
}
