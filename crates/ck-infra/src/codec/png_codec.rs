use anyhow::{Context, Result};
use ck_core::ports::ImageCodecPort;
use ck_core::{EncodedImage, ImageDimensions, ImageFormatHint};
use image::codecs::bmp::BmpDecoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use tracing::trace;

/// Decodes any supported clipboard image and re-encodes it as PNG.
///
/// 将剪贴板中的图片统一解码并重新编码为 PNG，保证相同像素得到相同字节。
pub struct PngImageCodec;

impl PngImageCodec {
    fn decode(bytes: &[u8], hint: ImageFormatHint) -> Result<DynamicImage> {
        let decoded = match hint {
            ImageFormatHint::Png => image::load_from_memory_with_format(bytes, ImageFormat::Png),
            ImageFormatHint::Jpeg => image::load_from_memory_with_format(bytes, ImageFormat::Jpeg),
            ImageFormatHint::Bmp => image::load_from_memory_with_format(bytes, ImageFormat::Bmp),
            ImageFormatHint::Dib => BmpDecoder::new_without_file_header(Cursor::new(bytes))
                .and_then(DynamicImage::from_decoder),
            ImageFormatHint::Unknown => image::load_from_memory(bytes),
        };
        decoded.with_context(|| format!("decode {hint:?} image ({} bytes)", bytes.len()))
    }

    fn encode_png(decoded: &DynamicImage) -> Result<EncodedImage> {
        let mut png_bytes = Vec::new();
        decoded
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .context("encode image to png")?;

        let dimensions = ImageDimensions {
            width: decoded.width(),
            height: decoded.height(),
        };
        trace!(%dimensions, size = png_bytes.len(), "normalized image to png");
        Ok(EncodedImage::new(png_bytes, dimensions))
    }
}

impl ImageCodecPort for PngImageCodec {
    fn normalize(&self, bytes: &[u8], hint: ImageFormatHint) -> Result<EncodedImage> {
        let decoded = Self::decode(bytes, hint)?;
        Self::encode_png(&decoded)
    }

    fn load_file(&self, path: &Path) -> Result<EncodedImage> {
        let decoded =
            image::open(path).with_context(|| format!("load image file {}", path.display()))?;
        Self::encode_png(&decoded)
    }
}
