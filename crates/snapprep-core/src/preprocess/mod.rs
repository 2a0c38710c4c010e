//! OCR preprocessing for prepared photos.
//!
//! Text on food packaging is frequently low-contrast, dot-matrix printed,
//! or both. Each recipe here biases the image toward one of those printing
//! styles; a recognizer typically runs over every variant and keeps the
//! best read.
//!
//! The building blocks operate on the first three channels of the packed
//! pixel data; an alpha channel, when present, passes through untouched.

mod color;
mod recipes;
mod threshold;

pub use color::{adjust_contrast, grayscale, mix_channels};
pub use recipes::{
    for_dotted_numbers, for_dotted_text, for_general_text, for_low_contrast, for_numbers, variants,
};
pub use threshold::{adaptive_threshold, connect_dots};
