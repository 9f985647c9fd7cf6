//! # ck-core
//!
//! Core domain models and business logic for clipkeep.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! clipboard entries, content hashes, dedup state, the port traits that the
//! infra/platform layers implement, and the password pool generator.

pub mod clipboard;
pub mod config;
pub mod ids;
pub mod password;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardData, ClipboardEntry, ClipboardError, ClipboardPayload, ContentHash, DataObject,
    DedupState, DetectedChange, EncodedImage, EntryKind, FormatId, HashAlgorithm, HashError,
    ImageDimensions, ImageFormatHint,
};
pub use config::AppConfig;
pub use ids::EntryId;
pub use password::{PasswordError, PasswordGenerator, PasswordOptions};
