use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Encoded image bytes (PNG once normalized by the codec) together with the
/// pixel size read while decoding them.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    dimensions: ImageDimensions,
}

impl EncodedImage {
    pub fn new(bytes: Vec<u8>, dimensions: ImageDimensions) -> Self {
        Self { bytes, dimensions }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

// Payloads can be megabytes; keep Debug output readable.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("size_bytes", &self.bytes.len())
            .field("dimensions", &self.dimensions)
            .finish()
    }
}
