//! JPEG encoding for prepared images.
//!
//! Quality is an internal policy, not a caller knob: `encode_jpeg` uses a
//! fixed quality, and `encode_jpeg_bounded` steps the quality down on its
//! own until the output fits under a byte ceiling.

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_bounded, EncodeError};
