//! Reads bookmaker screenshots and encodes them for upload.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

use super::preprocess::{encode_png, fit_within};

/// MIME type sent when the format cannot be recognised.
const FALLBACK_MIME: &str = "image/png";

/// A screenshot ready to be attached to a chat message.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    pub base64: String,
}

impl EncodedImage {
    /// Encodes raw image bytes.
    ///
    /// With `max_dimension` set, images whose longer side exceeds it are
    /// decoded, downscaled and re-encoded as PNG. Otherwise the bytes are
    /// sent as they are, including bytes that cannot be decoded.
    pub fn from_bytes(bytes: &[u8], max_dimension: Option<u32>) -> Result<Self> {
        let format = image::guess_format(bytes).ok();

        if let Some(max_dimension) = max_dimension {
            match image::load_from_memory(bytes) {
                Ok(img) => return Self::fit_or_keep(img, bytes, format, max_dimension),
                Err(e) => crate::log(&format!(
                    "Warning: Cannot decode screenshot for downscaling, sending it unchanged: {}",
                    e
                )),
            }
        }

        Ok(Self::unchanged(bytes, format))
    }

    fn fit_or_keep(
        img: DynamicImage,
        bytes: &[u8],
        format: Option<ImageFormat>,
        max_dimension: u32,
    ) -> Result<Self> {
        if img.width() <= max_dimension && img.height() <= max_dimension {
            return Ok(Self::unchanged(bytes, format));
        }

        let (width, height) = (img.width(), img.height());
        let resized = fit_within(img, max_dimension);
        crate::log(&format!(
            "Downscaled screenshot {}x{} -> {}x{}",
            width,
            height,
            resized.width(),
            resized.height()
        ));
        Ok(Self {
            mime_type: mime_type(Some(ImageFormat::Png)),
            base64: STANDARD.encode(encode_png(&resized)?),
        })
    }

    fn unchanged(bytes: &[u8], format: Option<ImageFormat>) -> Self {
        Self {
            mime_type: mime_type(format),
            base64: STANDARD.encode(bytes),
        }
    }

    /// `data:` URL for an `image_url` content part.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Reads and encodes the screenshot at `path`.
pub fn load_image(path: &Path, max_dimension: Option<u32>) -> Result<EncodedImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read screenshot: {}", path.display()))?;
    crate::log(&format!(
        "Loaded screenshot {} ({} bytes)",
        path.display(),
        bytes.len()
    ));
    EncodedImage::from_bytes(&bytes, max_dimension)
}

fn mime_type(format: Option<ImageFormat>) -> &'static str {
    match format {
        Some(ImageFormat::Png) => "image/png",
        Some(ImageFormat::Jpeg) => "image/jpeg",
        Some(ImageFormat::WebP) => "image/webp",
        Some(ImageFormat::Gif) => "image/gif",
        _ => FALLBACK_MIME,
    }
}
