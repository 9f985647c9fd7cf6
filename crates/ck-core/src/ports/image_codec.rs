use anyhow::Result;
use std::path::Path;

use crate::clipboard::{EncodedImage, ImageFormatHint};

/// Decodes clipboard image payloads and re-encodes them in one canonical
/// encoding, so equal pixels always produce equal bytes.
pub trait ImageCodecPort: Send + Sync {
    /// Decode `bytes` (encoded as `hint`) and return the normalized image.
    fn normalize(&self, bytes: &[u8], hint: ImageFormatHint) -> Result<EncodedImage>;

    /// Load an image file from disk and return the normalized image.
    fn load_file(&self, path: &Path) -> Result<EncodedImage>;
}
