//! Random password generation from a weighted character pool.
//!
//! Independent of the clipboard history; shares no state with it.

mod generator;

pub use generator::{PasswordGenerator, PasswordOptions};

use thiserror::Error;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password length must be at least 1, got {0}")]
    InvalidLength(i64),
}
