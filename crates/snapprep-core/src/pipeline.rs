//! The photo preparation pipeline: decode, upright, fit.
//!
//! Control flow is linear: bytes are decoded, the EXIF orientation (if any)
//! is corrected, and the result is scaled down to fit the bounding box. A
//! failure at any stage collapses the whole call to `None`; diagnostics go
//! to the log, never to the caller.

use tracing::{debug, warn};

use crate::decode::{
    apply_orientation, decode_image, read_orientation, resize_to_fit, BoundingBox, FilterType,
    ImageBuffer, Orientation,
};

/// Prepare an encoded image with the default 1024x1024 bounding box.
///
/// Equivalent to `process_with(bytes, BoundingBox::default())`.
pub fn process(bytes: &[u8]) -> Option<ImageBuffer> {
    process_with(bytes, BoundingBox::default())
}

/// Prepare an encoded image: decode it, rotate it upright per its EXIF
/// orientation tag, and scale it down to fit within `bounds`.
///
/// Returns `None` if the bytes cannot be decoded or an intermediate buffer
/// is inconsistent. Callers never see a partial result; the failure reason
/// is only logged.
pub fn process_with(bytes: &[u8], bounds: BoundingBox) -> Option<ImageBuffer> {
    let decoded = match decode_image(bytes) {
        Ok(image) => image,
        Err(err) => {
            warn!(error = %err, "failed to decode image");
            return None;
        }
    };

    let orientation = read_orientation(bytes);
    if orientation != Orientation::Normal {
        debug!(degrees = orientation.degrees(), "correcting orientation");
    }

    let upright = match apply_orientation(decoded, orientation) {
        Ok(image) => image,
        Err(err) => {
            warn!(error = %err, "failed to correct orientation");
            return None;
        }
    };

    match resize_to_fit(upright, bounds, FilterType::Bilinear) {
        Ok(image) => Some(image),
        Err(err) => {
            warn!(error = %err, "failed to resize image");
            None
        }
    }
}
