//! Image decoding and geometry for the photo preparation pipeline.
//!
//! This module provides:
//! - Decoding encoded bytes (JPEG/PNG, auto-detected) into pixel buffers
//! - Reading the EXIF orientation tag and rotating images upright
//! - Downscaling images to fit within a bounding box
//!
//! All operations are synchronous, allocate their own buffers, and share no
//! state; concurrent callers need no coordination.

mod loader;
mod orientation;
mod resize;
mod types;

pub use loader::decode_image;
pub use orientation::{apply_orientation, read_orientation};
pub use resize::{resize, resize_to_fit};
pub use types::{BoundingBox, DecodeError, FilterType, ImageBuffer, Orientation, PixelFormat};
