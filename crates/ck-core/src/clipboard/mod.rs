//! Clipboard domain models.
mod change;
mod dedup;
mod entry;
mod error;
pub mod format;
mod hash;
mod image;

pub use change::DetectedChange;
pub use dedup::DedupState;
pub use entry::{ClipboardEntry, ClipboardPayload, EntryKind};
pub use error::{ClipboardError, HashError};
pub use format::{ClipboardData, DataObject, FormatId, ImageFormatHint};
pub use hash::{ContentHash, HashAlgorithm};
pub use image::{EncodedImage, ImageDimensions};
