use anyhow::Result;
use ck_core::clipboard::format::{
    has_image_extension, FILE_LIST, IMAGE_FORMAT_PRIORITY, IMAGE_PNG_MIME, IMAGE_PNG_NATIVE,
    NATIVE_BITMAP,
};
use ck_core::ports::{ContentHashPort, ImageCodecPort, SystemClipboardPort};
use ck_core::{
    ClipboardData, ClipboardError, ContentHash, DataObject, EncodedImage, FormatId, HashError,
    ImageFormatHint,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Text and image access on top of the raw platform clipboard.
///
/// Read failures never escape: they are logged and reported as "nothing
/// there". Image reads try a copied image file first, then each binary
/// format of [`IMAGE_FORMAT_PRIORITY`] in order, skipping candidates that
/// fail to decode.
pub struct ClipboardAccessor {
    clipboard: Arc<dyn SystemClipboardPort>,
    codec: Arc<dyn ImageCodecPort>,
    hasher: Arc<dyn ContentHashPort>,
}

impl ClipboardAccessor {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        codec: Arc<dyn ImageCodecPort>,
        hasher: Arc<dyn ContentHashPort>,
    ) -> Self {
        Self {
            clipboard,
            codec,
            hasher,
        }
    }

    pub fn get_text(&self) -> Option<String> {
        match self.clipboard.get_text() {
            Ok(text) => text,
            Err(err) => {
                let err = ClipboardError::Unavailable(format!("{err:#}"));
                warn!(error = %err, "failed to read clipboard text");
                None
            }
        }
    }

    pub fn set_text(&self, text: &str) {
        if let Err(err) = self.try_set_text(text) {
            warn!(error = %err, "failed to write clipboard text");
        }
    }

    pub fn try_set_text(&self, text: &str) -> Result<()> {
        self.clipboard.set_text(text)
    }

    pub fn get_image(&self) -> Option<EncodedImage> {
        let formats = match self.clipboard.available_formats() {
            Ok(formats) => formats,
            Err(err) => {
                let err = ClipboardError::Unavailable(format!("{err:#}"));
                warn!(error = %err, "failed to list clipboard formats");
                return None;
            }
        };

        self.image_from_files(&formats)
            .or_else(|| self.image_from_formats(&formats))
    }

    /// Writes the image under the generic mime key, the Windows PNG name and
    /// the native bitmap slot in a single clipboard write.
    pub fn set_image(&self, image: &EncodedImage) {
        if let Err(err) = self.try_set_image(image) {
            warn!(error = %err, "failed to write clipboard image");
        }
    }

    pub fn try_set_image(&self, image: &EncodedImage) -> Result<()> {
        let object = [IMAGE_PNG_MIME, IMAGE_PNG_NATIVE, NATIVE_BITMAP]
            .into_iter()
            .fold(DataObject::new(), |object, format| {
                object.with(format, ClipboardData::Bytes(image.bytes().to_vec()))
            });
        self.clipboard.set_data_object(object)
    }

    /// `None` when hashing failed; callers treat that as "no content".
    pub fn compute_hash(&self, image: &EncodedImage) -> Option<ContentHash> {
        match self.try_compute_hash(image) {
            Ok(hash) => Some(hash),
            Err(err) => {
                let err = ClipboardError::from(err);
                warn!(error = %err, "failed to hash clipboard image");
                None
            }
        }
    }

    pub fn try_compute_hash(&self, image: &EncodedImage) -> Result<ContentHash, HashError> {
        self.hasher.hash_bytes(image.bytes())
    }

    fn image_from_files(&self, formats: &[FormatId]) -> Option<EncodedImage> {
        let format = formats.iter().find(|f| f.matches(FILE_LIST))?;
        let paths = match self.clipboard.get_data(format) {
            Ok(Some(ClipboardData::Files(paths))) => paths,
            Ok(_) => return None,
            Err(err) => {
                debug!(error = %err, "failed to read copied file list");
                return None;
            }
        };

        paths
            .iter()
            .filter(|path| has_image_extension(path))
            .find_map(|path| match self.codec.load_file(path) {
                Ok(image) => {
                    debug!(path = %path.display(), "read clipboard image from copied file");
                    Some(image)
                }
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping copied file");
                    None
                }
            })
    }

    fn image_from_formats(&self, formats: &[FormatId]) -> Option<EncodedImage> {
        IMAGE_FORMAT_PRIORITY.iter().find_map(|candidate| {
            let format = formats.iter().find(|f| f.matches(candidate))?;
            match self.decode_format(format) {
                Ok(image) => {
                    debug!(%format, "read clipboard image");
                    Some(image)
                }
                Err(err) => {
                    debug!(error = %err, "clipboard image candidate rejected");
                    None
                }
            }
        })
    }

    fn decode_format(&self, format: &FormatId) -> Result<EncodedImage, ClipboardError> {
        let decode_err = |reason: String| ClipboardError::FormatDecode {
            format: format.to_string(),
            reason,
        };

        let bytes = match self.clipboard.get_data(format) {
            Ok(Some(ClipboardData::Bytes(bytes))) => bytes,
            Ok(Some(_)) => return Err(decode_err("payload is not binary".to_string())),
            Ok(None) => return Err(decode_err("format vanished".to_string())),
            Err(err) => return Err(decode_err(format!("{err:#}"))),
        };

        self.codec
            .normalize(&bytes, ImageFormatHint::from_format_id(format))
            .map_err(|err| decode_err(format!("{err:#}")))
    }
}
