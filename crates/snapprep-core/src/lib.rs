//! Snapprep Core - Photo preparation library
//!
//! This crate turns an encoded photo (JPEG/PNG bytes) into an upright,
//! bounded pixel buffer ready for upload, display, or text recognition:
//!
//! 1. Decode the bytes (format auto-detected from content)
//! 2. Rotate upright per the EXIF orientation tag
//! 3. Scale down to fit a bounding box (1024x1024 by default), never up
//!
//! The whole pipeline is a single call:
//!
//! ```
//! use snapprep_core::process;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! match process(&bytes) {
//!     Some(image) => println!("prepared {}x{}", image.width, image.height),
//!     None => println!("not a usable image"),
//! }
//! ```
//!
//! A failed call returns `None` rather than an error: callers either get a
//! usable buffer or nothing, with diagnostics on the `tracing` log.
//!
//! The [`encode`] module re-encodes prepared images as JPEG (optionally
//! under a byte-size ceiling) and [`preprocess`] hosts the OCR preparation
//! recipes.

pub mod decode;
pub mod encode;
pub mod pipeline;
pub mod preprocess;

pub use decode::{BoundingBox, DecodeError, FilterType, ImageBuffer, Orientation, PixelFormat};
pub use encode::{encode_jpeg, encode_jpeg_bounded, EncodeError};
pub use pipeline::{process, process_with};
