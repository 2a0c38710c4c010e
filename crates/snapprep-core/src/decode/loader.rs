//! Image decoding with content-based format detection.

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use super::{DecodeError, ImageBuffer};

/// Decode an encoded image (JPEG, PNG, ...) from bytes.
///
/// The format is detected from the content, never from a file name. The
/// whole byte slice is held in memory, so pixel data and metadata can both
/// be derived from the same buffer without re-reading a stream.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a supported
/// image format, and `DecodeError::CorruptedFile` if the data is malformed
/// or truncated.
pub fn decode_image(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    let img = reader.decode().map_err(|e| match e {
        image::ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    debug!(
        width = img.width(),
        height = img.height(),
        "decoded image from {} bytes",
        bytes.len()
    );

    Ok(ImageBuffer::from_dynamic(img))
}
