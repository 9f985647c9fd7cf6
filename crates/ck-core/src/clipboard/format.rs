//! Clipboard format identifiers and the payloads carried under them.
//!
//! Format ids are whatever the platform advertises (`image/png`, `PNG`,
//! `UTF8_STRING`, ...) plus a few logical ids the platform adapter
//! synthesizes (`files`, `Bitmap`). Matching is always case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Logical id for "a list of file paths was copied".
pub const FILE_LIST: &str = "files";
/// Generic image mime key, respected by X11/Wayland consumers.
pub const IMAGE_PNG_MIME: &str = "image/png";
/// Registered PNG format name on Windows.
pub const IMAGE_PNG_NATIVE: &str = "PNG";
/// Platform-native bitmap key; the adapter maps it to the OS image slot.
pub const NATIVE_BITMAP: &str = "Bitmap";
/// Windows DIB payload (a BMP without its file header).
pub const DEVICE_INDEPENDENT_BITMAP: &str = "DeviceIndependentBitmap";

/// Binary image formats probed in order when no image file was copied.
pub const IMAGE_FORMAT_PRIORITY: [&str; 6] = [
    IMAGE_PNG_MIME,
    "png",
    "image/jpeg",
    "image/bmp",
    NATIVE_BITMAP,
    DEVICE_INDEPENDENT_BITMAP,
];

/// Extensions of copied files that are treated as images.
pub const IMAGE_FILE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "ico"];

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_FILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatId(String);

impl FormatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FormatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Raw data returned by the platform for one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardData {
    Bytes(Vec<u8>),
    Text(String),
    Files(Vec<PathBuf>),
}

/// Source encoding of a binary image payload, derived from its format id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormatHint {
    Png,
    Jpeg,
    Bmp,
    /// BMP body without the 14 byte file header.
    Dib,
    /// Let the decoder sniff the magic bytes.
    Unknown,
}

impl ImageFormatHint {
    pub fn from_format_id(format: &FormatId) -> Self {
        let id = format.as_str().to_ascii_lowercase();
        match id.as_str() {
            "image/png" | "png" => Self::Png,
            "image/jpeg" | "image/jpg" | "jpeg" | "jpg" => Self::Jpeg,
            "image/bmp" | "bmp" => Self::Bmp,
            "deviceindependentbitmap" | "cf_dib" => Self::Dib,
            _ => Self::Unknown,
        }
    }
}

/// A multi-format clipboard write: every entry is offered at once so the
/// consuming application can read whichever key it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataObject {
    entries: Vec<(FormatId, ClipboardData)>,
}

impl DataObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, format: impl Into<FormatId>, data: ClipboardData) -> Self {
        self.insert(format, data);
        self
    }

    /// Insert or replace the payload for `format`.
    pub fn insert(&mut self, format: impl Into<FormatId>, data: ClipboardData) {
        let format = format.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.matches(format.as_str()))
        {
            Some(slot) => slot.1 = data,
            None => self.entries.push((format, data)),
        }
    }

    pub fn get(&self, format: &str) -> Option<&ClipboardData> {
        self.entries
            .iter()
            .find(|(id, _)| id.matches(format))
            .map(|(_, data)| data)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(FormatId, ClipboardData)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert!(has_image_extension(Path::new("/tmp/shot.PNG")));
        assert!(has_image_extension(Path::new("photo.jpeg")));
        assert!(has_image_extension(Path::new("icon.ico")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }

    #[test]
    fn format_id_matching_ignores_case() {
        let id = FormatId::from("Image/PNG");
        assert!(id.matches("image/png"));
        assert!(!id.matches("image/jpeg"));
    }

    #[test]
    fn hint_is_derived_from_format_id() {
        assert_eq!(
            ImageFormatHint::from_format_id(&"png".into()),
            ImageFormatHint::Png
        );
        assert_eq!(
            ImageFormatHint::from_format_id(&"image/JPEG".into()),
            ImageFormatHint::Jpeg
        );
        assert_eq!(
            ImageFormatHint::from_format_id(&DEVICE_INDEPENDENT_BITMAP.into()),
            ImageFormatHint::Dib
        );
        assert_eq!(
            ImageFormatHint::from_format_id(&NATIVE_BITMAP.into()),
            ImageFormatHint::Unknown
        );
    }

    #[test]
    fn data_object_replaces_same_format() {
        let object = DataObject::new()
            .with("image/png", ClipboardData::Bytes(vec![1]))
            .with("IMAGE/PNG", ClipboardData::Bytes(vec![2]))
            .with("PNG", ClipboardData::Bytes(vec![3]));

        assert_eq!(object.len(), 2);
        assert_eq!(
            object.get("image/png"),
            Some(&ClipboardData::Bytes(vec![2]))
        );
    }
}
