use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

use super::{EncodedImage, ImageDimensions};
use crate::ids::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Text,
    Image,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Text => f.write_str("text"),
            EntryKind::Image => f.write_str("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Text(String),
    Image(EncodedImage),
}

/// One captured clipboard snapshot.
///
/// Entries are immutable: fields are private and only read accessors are
/// exposed. Exactly one payload kind exists by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    id: EntryId,
    captured_at_ms: i64,
    payload: ClipboardPayload,
}

impl ClipboardEntry {
    pub fn text(text: impl Into<String>, captured_at_ms: i64) -> Self {
        Self {
            id: EntryId::new(),
            captured_at_ms,
            payload: ClipboardPayload::Text(text.into()),
        }
    }

    pub fn image(image: EncodedImage, captured_at_ms: i64) -> Self {
        Self {
            id: EntryId::new(),
            captured_at_ms,
            payload: ClipboardPayload::Image(image),
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Unix epoch milliseconds (UTC)
    pub fn captured_at_ms(&self) -> i64 {
        self.captured_at_ms
    }

    pub fn payload(&self) -> &ClipboardPayload {
        &self.payload
    }

    pub fn kind(&self) -> EntryKind {
        match self.payload {
            ClipboardPayload::Text(_) => EntryKind::Text,
            ClipboardPayload::Image(_) => EntryKind::Image,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            ClipboardPayload::Text(text) => Some(text),
            ClipboardPayload::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&EncodedImage> {
        match &self.payload {
            ClipboardPayload::Image(image) => Some(image),
            ClipboardPayload::Text(_) => None,
        }
    }

    /// Capture time as `HH:MM:SS` in local time.
    pub fn display_timestamp(&self) -> String {
        self.display_timestamp_in(&Local)
    }

    pub fn display_timestamp_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        DateTime::<Utc>::from_timestamp_millis(self.captured_at_ms)
            .map(|utc| utc.with_timezone(tz).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }

    pub fn char_count(&self) -> Option<usize> {
        self.as_text().map(|text| text.chars().count())
    }

    pub fn word_count(&self) -> Option<usize> {
        self.as_text().map(|text| text.split_whitespace().count())
    }

    pub fn dimensions(&self) -> Option<ImageDimensions> {
        self.as_image().map(EncodedImage::dimensions)
    }

    /// Single-line summary used by listeners and logs.
    pub fn summary(&self, max_chars: usize) -> String {
        match &self.payload {
            ClipboardPayload::Text(text) => {
                let flat: String = text
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect();
                if flat.chars().count() > max_chars {
                    let cut: String = flat.chars().take(max_chars).collect();
                    format!("{cut}…")
                } else {
                    flat
                }
            }
            ClipboardPayload::Image(image) => format!(
                "image {} ({} bytes)",
                image.dimensions(),
                image.size_bytes()
            ),
        }
    }
}
