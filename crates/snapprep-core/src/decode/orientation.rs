//! EXIF orientation reading and upright correction.
//!
//! The orientation tag lives in the container metadata, not in the pixel
//! data, so it is read from the same encoded bytes that were decoded.
//! Only pure rotations (tags 3, 6 and 8) are corrected; mirrored
//! orientations pass through untouched.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use tracing::debug;

use super::{DecodeError, ImageBuffer, Orientation};

/// Read the EXIF orientation tag from encoded image bytes.
///
/// A missing EXIF block, an unreadable TIFF structure, or an absent
/// orientation field all degrade to `Orientation::Normal`; metadata
/// problems are never fatal to the pipeline.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(err) => {
            debug!(error = %err, "no readable orientation metadata, assuming upright");
            Orientation::Normal
        }
    }
}

/// Rotate a decoded image so it is upright.
///
/// `Normal` returns the buffer unchanged without touching the pixel data.
/// The quarter-turn rotations remap pixels exactly; 90 and 270 degree
/// turns swap the output width and height.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the pixel buffer does not match
/// its stated dimensions.
pub fn apply_orientation(
    image: ImageBuffer,
    orientation: Orientation,
) -> Result<ImageBuffer, DecodeError> {
    if orientation == Orientation::Normal {
        return Ok(image);
    }

    let img = image.into_dynamic().ok_or_else(|| {
        DecodeError::CorruptedFile("pixel buffer does not match its dimensions".to_string())
    })?;

    let rotated = match orientation {
        Orientation::Rotate90 => img.rotate90(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::Rotate270 => img.rotate270(),
        Orientation::Normal => img,
    };

    Ok(ImageBuffer::from_dynamic(rotated))
}
