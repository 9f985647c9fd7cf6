//! Hand-written port fakes shared by the integration tests.
#![allow(dead_code)]

use anyhow::{anyhow, bail, Result};
use ck_app::{App, AppDeps};
use ck_core::ports::{
    ClockPort, ContentHashPort, EntryExportPort, ImageCodecPort, SystemClipboardPort,
};
use ck_core::{
    ClipboardData, ClipboardEntry, ContentHash, DataObject, EncodedImage, FormatId, HashError,
    ImageDimensions, ImageFormatHint,
};
use ck_infra::Sha256Hasher;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory clipboard: one optional text plus any number of raw formats.
#[derive(Default)]
pub struct FakeClipboard {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    text: Option<String>,
    data: Vec<(FormatId, ClipboardData)>,
    fail_reads: bool,
    fail_writes: bool,
    writes: Vec<DataObject>,
    text_writes: Vec<String>,
}

impl FakeClipboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Simulate another application copying text.
    pub fn copy_text(&self, text: &str) {
        let mut state = self.state.lock().unwrap();
        state.text = Some(text.to_string());
        state.data.clear();
    }

    /// Simulate another application copying an image under one format.
    pub fn copy_image(&self, format: &str, bytes: &[u8]) {
        let mut state = self.state.lock().unwrap();
        state.text = None;
        state.data = vec![(FormatId::from(format), ClipboardData::Bytes(bytes.to_vec()))];
    }

    pub fn add_format(&self, format: &str, data: ClipboardData) {
        self.state
            .lock()
            .unwrap()
            .data
            .push((FormatId::from(format), data));
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.text = None;
        state.data.clear();
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    pub fn writes(&self) -> Vec<DataObject> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn text_writes(&self) -> Vec<String> {
        self.state.lock().unwrap().text_writes.clone()
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn get_text(&self) -> Result<Option<String>> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            bail!("clipboard locked by another process");
        }
        Ok(state.text.clone())
    }

    fn set_text(&self, text: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            bail!("clipboard is read-only");
        }
        state.text = Some(text.to_string());
        state.data.clear();
        state.text_writes.push(text.to_string());
        Ok(())
    }

    fn available_formats(&self) -> Result<Vec<FormatId>> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            bail!("clipboard locked by another process");
        }
        Ok(state.data.iter().map(|(format, _)| format.clone()).collect())
    }

    fn get_data(&self, format: &FormatId) -> Result<Option<ClipboardData>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .data
            .iter()
            .find(|(id, _)| id.matches(format.as_str()))
            .map(|(_, data)| data.clone()))
    }

    fn set_data_object(&self, object: DataObject) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            bail!("clipboard is read-only");
        }
        state.text = None;
        state.data = object.clone().into_entries();
        state.writes.push(object);
        Ok(())
    }
}

/// Codec that keeps bytes as they are. Payloads starting with `bad` fail to
/// decode; `load_file` reads the file and applies the same rule.
pub struct PassthroughCodec;

impl PassthroughCodec {
    fn decode(bytes: &[u8]) -> Result<EncodedImage> {
        if bytes.starts_with(b"bad") {
            return Err(anyhow!("corrupt image"));
        }
        Ok(EncodedImage::new(
            bytes.to_vec(),
            ImageDimensions {
                width: bytes.len() as u32,
                height: 1,
            },
        ))
    }
}

impl ImageCodecPort for PassthroughCodec {
    fn normalize(&self, bytes: &[u8], _hint: ImageFormatHint) -> Result<EncodedImage> {
        Self::decode(bytes)
    }

    fn load_file(&self, path: &Path) -> Result<EncodedImage> {
        Self::decode(&std::fs::read(path)?)
    }
}

/// Clock that advances one second per read.
#[derive(Default)]
pub struct StepClock {
    now: AtomicI64,
}

impl ClockPort for StepClock {
    fn now_ms(&self) -> i64 {
        self.now.fetch_add(1000, Ordering::SeqCst) + 1000
    }
}

#[derive(Default)]
pub struct NullExporter {
    pub exported: Mutex<Vec<PathBuf>>,
}

impl EntryExportPort for NullExporter {
    fn export(&self, _entry: &ClipboardEntry, path: &Path) -> Result<()> {
        self.exported.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Hasher whose digest backend is always unavailable.
pub struct FailingHasher;

impl ContentHashPort for FailingHasher {
    fn hash_bytes(&self, _bytes: &[u8]) -> Result<ContentHash, HashError> {
        Err(HashError::Encoding("digest backend unavailable".to_string()))
    }
}

pub fn build_app(clipboard: Arc<FakeClipboard>) -> App {
    build_app_with_hasher(clipboard, Arc::new(Sha256Hasher))
}

pub fn build_app_with_hasher(clipboard: Arc<FakeClipboard>, hash: Arc<dyn ContentHashPort>) -> App {
    App::new(
        AppDeps {
            clipboard,
            image_codec: Arc::new(PassthroughCodec),
            entry_export: Arc::new(NullExporter::default()),
            clock: Arc::new(StepClock::default()),
            hash,
        },
        None,
    )
}

/// History rendered as short labels, newest first: text as-is, images as
/// `img:<bytes as utf8>`.
pub fn history_labels(app: &App) -> Vec<String> {
    app.history()
        .all()
        .iter()
        .map(|entry| match (entry.as_text(), entry.as_image()) {
            (Some(text), _) => text.to_string(),
            (_, Some(image)) => format!("img:{}", String::from_utf8_lossy(image.bytes())),
            _ => unreachable!(),
        })
        .collect()
}
