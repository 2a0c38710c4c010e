//! JPEG encoding using the `image` crate's encoder.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;
use tracing::debug;

use crate::decode::ImageBuffer;

/// Quality used for one-shot encoding.
const DEFAULT_QUALITY: u8 = 90;

/// Bounded encoding starts here and steps down.
const INITIAL_QUALITY: u8 = 100;
const QUALITY_STEP: u8 = 10;
const MIN_QUALITY: u8 = 10;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match the stated dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a prepared image to JPEG bytes.
///
/// RGBA buffers are flattened to RGB first, since JPEG carries no alpha
/// channel.
///
/// # Errors
///
/// Returns an error if the buffer has zero dimensions, the pixel data does
/// not match the stated dimensions, or the encoder fails.
pub fn encode_jpeg(image: &ImageBuffer) -> Result<Vec<u8>, EncodeError> {
    encode_with_quality(image, DEFAULT_QUALITY)
}

/// Encode a prepared image to JPEG bytes no larger than `max_bytes` if the
/// content allows it.
///
/// Starts at the highest quality and re-encodes at progressively lower
/// quality until the output fits or the quality floor is reached. The last
/// attempt is returned even if it still exceeds the ceiling, so callers
/// always get a well-formed JPEG.
pub fn encode_jpeg_bounded(image: &ImageBuffer, max_bytes: usize) -> Result<Vec<u8>, EncodeError> {
    let mut quality = INITIAL_QUALITY;
    let mut encoded = encode_with_quality(image, quality)?;

    while encoded.len() > max_bytes && quality > MIN_QUALITY {
        quality -= QUALITY_STEP;
        encoded = encode_with_quality(image, quality)?;
        debug!(quality, size = encoded.len(), "recompressed image");
    }

    Ok(encoded)
}

fn encode_with_quality(image: &ImageBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = image.width as usize * image.height as usize * image.format.bytes_per_pixel();
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    // JPEG has no alpha channel; flatten RGBA down to RGB
    let rgb = image
        .to_dynamic()
        .ok_or_else(|| EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        })?
        .into_rgb8();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));

    encoder
        .write_image(rgb.as_raw(), image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
