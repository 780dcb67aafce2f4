use crate::images::errors::ImageError;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage};

pub const MAX_DIMENSION: u32 = 1200;
pub const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Formats worth re-encoding, keyed by a lowercased extension with its dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".jpg" | ".jpeg" => Some(OutputFormat::Jpeg),
            ".png" => Some(OutputFormat::Png),
            ".webp" => Some(OutputFormat::WebP),
            _ => None,
        }
    }
}

/// Shrinks and re-encodes uploads before they go to storage.
#[derive(Debug, Clone, Copy)]
pub struct ImageOptimizer {
    max_dimension: u32,
    jpeg_quality: u8,
}

impl ImageOptimizer {
    pub fn new() -> Self {
        ImageOptimizer {
            max_dimension: MAX_DIMENSION,
            jpeg_quality: JPEG_QUALITY,
        }
    }

    pub fn with_limits(max_dimension: u32, jpeg_quality: u8) -> Self {
        ImageOptimizer {
            max_dimension,
            jpeg_quality,
        }
    }

    pub fn optimize(&self, bytes: &[u8], format: OutputFormat) -> Result<Vec<u8>, ImageError> {
        let img = flatten(image::load_from_memory(bytes)?);

        let img = if img.width() > self.max_dimension || img.height() > self.max_dimension {
            img.resize(self.max_dimension, self.max_dimension, FilterType::Lanczos3)
        } else {
            img
        };

        let mut out = Vec::new();
        match format {
            OutputFormat::Jpeg => {
                img.write_with_encoder(JpegEncoder::new_with_quality(&mut out, self.jpeg_quality))?
            }
            OutputFormat::Png => img.write_with_encoder(PngEncoder::new_with_quality(
                &mut out,
                CompressionType::Best,
                PngFilterType::Adaptive,
            ))?,
            OutputFormat::WebP => img.write_with_encoder(WebPEncoder::new_lossless(&mut out))?,
        }

        Ok(out)
    }

    /// Same as [`optimize`](Self::optimize) but off the async executor.
    pub async fn optimize_blocking(
        &self,
        bytes: bytes::Bytes,
        format: OutputFormat,
    ) -> Result<Vec<u8>, ImageError> {
        let optimizer = *self;

        tokio::task::spawn_blocking(move || optimizer.optimize(&bytes, format))
            .await
            .map_err(|_| ImageError::TaskFailed)?
    }
}

impl Default for ImageOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Alpha, palette-derived and 16-bit images become plain 8-bit RGB.
fn flatten(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 | ColorType::L8 => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}
