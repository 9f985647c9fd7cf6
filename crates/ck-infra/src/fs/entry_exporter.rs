use anyhow::{Context, Result};
use ck_core::ports::EntryExportPort;
use ck_core::{ClipboardEntry, ClipboardPayload};
use std::path::Path;
use tracing::debug;

/// Writes entry payloads to plain files: text as UTF-8, images as their
/// encoded (PNG) bytes. The parent directory must already exist.
pub struct FileEntryExporter;

impl EntryExportPort for FileEntryExporter {
    fn export(&self, entry: &ClipboardEntry, path: &Path) -> Result<()> {
        let bytes: &[u8] = match entry.payload() {
            ClipboardPayload::Text(text) => text.as_bytes(),
            ClipboardPayload::Image(image) => image.bytes(),
        };

        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write entry to {}", path.display()))?;

        debug!(
            entry_id = %entry.id(),
            kind = %entry.kind(),
            size = bytes.len(),
            path = %path.display(),
            "Exported clipboard entry"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::{EncodedImage, ImageDimensions};
    use tempfile::TempDir;

    #[test]
    fn writes_text_as_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let entry = ClipboardEntry::text("héllo\nworld", 0);

        FileEntryExporter.export(&entry, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "héllo\nworld");
    }

    #[test]
    fn writes_image_bytes_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.png");
        let bytes = vec![0x89, b'P', b'N', b'G', 1, 2, 3];
        let entry = ClipboardEntry::image(
            EncodedImage::new(
                bytes.clone(),
                ImageDimensions {
                    width: 1,
                    height: 1,
                },
            ),
            0,
        );

        FileEntryExporter.export(&entry, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("note.txt");
        let entry = ClipboardEntry::text("x", 0);

        let err = FileEntryExporter.export(&entry, &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write entry"));
    }
}
