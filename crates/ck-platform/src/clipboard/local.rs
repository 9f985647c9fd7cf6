use anyhow::{anyhow, Result};
use ck_core::clipboard::format::{FILE_LIST, IMAGE_PNG_MIME, NATIVE_BITMAP};
use ck_core::ports::SystemClipboardPort;
use ck_core::{ClipboardData, DataObject, FormatId};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext, ContentFormat, RustImageData};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// System clipboard backed by `clipboard-rs`.
///
/// Besides the raw formats the OS advertises, two logical formats are
/// synthesized: [`FILE_LIST`] when files were copied and [`NATIVE_BITMAP`]
/// for the OS image slot (read back as PNG bytes).
pub struct LocalClipboard {
    inner: Mutex<ClipboardContext>,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = map_clipboard_err(ClipboardContext::new())?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn ctx(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn get_text(&self) -> Result<Option<String>> {
        let ctx = self.ctx()?;
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        map_clipboard_err(ctx.get_text()).map(Some)
    }

    fn set_text(&self, text: &str) -> Result<()> {
        let ctx = self.ctx()?;
        map_clipboard_err(ctx.set_text(text.to_string()))
    }

    fn available_formats(&self) -> Result<Vec<FormatId>> {
        let ctx = self.ctx()?;
        let raw = map_clipboard_err(ctx.available_formats())?;
        let formats = with_logical_formats(
            raw,
            ctx.has(ContentFormat::Files),
            ctx.has(ContentFormat::Image),
        );
        trace!(?formats, "clipboard formats");
        Ok(formats)
    }

    fn get_data(&self, format: &FormatId) -> Result<Option<ClipboardData>> {
        let ctx = self.ctx()?;

        if format.matches(FILE_LIST) {
            if !ctx.has(ContentFormat::Files) {
                return Ok(None);
            }
            let files = map_clipboard_err(ctx.get_files())?;
            return Ok(Some(ClipboardData::Files(
                files.iter().map(|uri| file_uri_to_path(uri)).collect(),
            )));
        }

        if format.matches(NATIVE_BITMAP) && ctx.has(ContentFormat::Image) {
            let image = map_clipboard_err(ctx.get_image())?;
            let png = map_clipboard_err(image.to_png())?;
            return Ok(Some(ClipboardData::Bytes(png.get_bytes().to_vec())));
        }

        let available = map_clipboard_err(ctx.available_formats())?;
        let Some(native) = available.iter().find(|name| format.matches(name)) else {
            return Ok(None);
        };
        let bytes = map_clipboard_err(ctx.get_buffer(native))?;
        Ok(Some(ClipboardData::Bytes(bytes)))
    }

    fn set_data_object(&self, object: DataObject) -> Result<()> {
        let contents = to_contents(object)?;
        let ctx = self.ctx()?;
        map_clipboard_err(ctx.set(contents))
    }
}

fn with_logical_formats(raw: Vec<String>, has_files: bool, has_image: bool) -> Vec<FormatId> {
    let mut formats: Vec<FormatId> = raw.into_iter().map(FormatId::from).collect();
    for (present, logical) in [(has_files, FILE_LIST), (has_image, NATIVE_BITMAP)] {
        if present && !formats.iter().any(|f| f.matches(logical)) {
            formats.push(FormatId::from(logical));
        }
    }
    formats
}

fn file_uri_to_path(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}

fn to_contents(object: DataObject) -> Result<Vec<ClipboardContent>> {
    let mut contents = Vec::new();
    let mut has_image = false;

    for (format, data) in object.into_entries() {
        let content = match data {
            ClipboardData::Text(text) => ClipboardContent::Text(text),
            ClipboardData::Files(paths) => ClipboardContent::Files(
                paths
                    .iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect(),
            ),
            ClipboardData::Bytes(bytes) if format.matches(NATIVE_BITMAP) => {
                let image = RustImageData::from_bytes(&bytes).map_err(|e| anyhow!(e))?;
                has_image = true;
                ClipboardContent::Image(image)
            }
            ClipboardData::Bytes(bytes) => ClipboardContent::Other(format.to_string(), bytes),
        };
        contents.push(content);
    }

    // X11 serves the image slot as image/png already; a second target with the
    // same name makes some consumers pick the wrong one.
    if cfg!(target_os = "linux") && has_image {
        contents.retain(|content| match content {
            ClipboardContent::Other(name, _) => !name.eq_ignore_ascii_case(IMAGE_PNG_MIME),
            _ => true,
        });
    }

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesizes_logical_formats_once() {
        let formats = with_logical_formats(
            vec!["UTF8_STRING".into(), "bitmap".into()],
            true,
            true,
        );
        let names: Vec<&str> = formats.iter().map(FormatId::as_str).collect();
        assert_eq!(names, vec!["UTF8_STRING", "bitmap", "files"]);
    }

    #[test]
    fn no_logical_formats_when_absent() {
        let formats = with_logical_formats(vec!["text/plain".into()], false, false);
        assert_eq!(formats, vec![FormatId::from("text/plain")]);
    }

    #[test]
    fn strips_file_scheme() {
        assert_eq!(
            file_uri_to_path("file:///home/me/pic.png"),
            PathBuf::from("/home/me/pic.png")
        );
        assert_eq!(
            file_uri_to_path("C:\\pics\\a.bmp"),
            PathBuf::from("C:\\pics\\a.bmp")
        );
    }

    #[test]
    fn text_and_raw_bytes_map_to_contents() {
        let object = DataObject::new()
            .with("text/plain", ClipboardData::Text("hi".into()))
            .with("PNG", ClipboardData::Bytes(vec![1, 2, 3]));

        let contents = to_contents(object).unwrap();

        assert_eq!(contents.len(), 2);
        assert!(matches!(&contents[0], ClipboardContent::Text(t) if t == "hi"));
        assert!(matches!(
            &contents[1],
            ClipboardContent::Other(name, bytes) if name == "PNG" && bytes == &vec![1, 2, 3]
        ));
    }

    #[test]
    fn invalid_bitmap_bytes_are_rejected() {
        let object = DataObject::new().with(NATIVE_BITMAP, ClipboardData::Bytes(vec![0, 1]));
        assert!(to_contents(object).is_err());
    }
}
