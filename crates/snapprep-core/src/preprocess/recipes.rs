//! Preprocessing recipes tuned for different printing styles.
//!
//! The tuning constants come from field testing against expiry-date labels:
//! dot-matrix dates need small threshold windows so individual dots
//! survive, while flat-printed text tolerates a wider window.

use crate::decode::ImageBuffer;
use crate::preprocess::color::{adjust_contrast, grayscale, mix_channels};
use crate::preprocess::threshold::{adaptive_threshold, connect_dots};

/// Prepare flat-printed text: grayscale, then a wide-window binarization.
pub fn for_general_text(image: &ImageBuffer) -> ImageBuffer {
    let mut work = image.clone();
    grayscale(&mut work);
    adaptive_threshold(&work, 15, 10)
}

/// Prepare dot-matrix text: gentle contrast boost, then a small-window
/// binarization that keeps individual dots apart.
pub fn for_dotted_text(image: &ImageBuffer) -> ImageBuffer {
    let mut work = image.clone();
    adjust_contrast(&mut work, 1.4, 20.0);
    adaptive_threshold(&work, 5, 3)
}

/// Prepare printed digits: strong contrast, then a cross-channel sharpen.
pub fn for_numbers(image: &ImageBuffer) -> ImageBuffer {
    let mut work = image.clone();
    adjust_contrast(&mut work, 1.6, 15.0);
    mix_channels(&mut work, 2.2, -0.3);
    work
}

/// Prepare faint text: an aggressive contrast/brightness push, nothing else.
pub fn for_low_contrast(image: &ImageBuffer) -> ImageBuffer {
    let mut work = image.clone();
    adjust_contrast(&mut work, 2.0, 30.0);
    work
}

/// Prepare dot-matrix digits: grayscale, join nearby dots, then binarize
/// with the tightest window.
pub fn for_dotted_numbers(image: &ImageBuffer) -> ImageBuffer {
    let mut work = image.clone();
    grayscale(&mut work);
    let connected = connect_dots(&work, 2, 150);
    adaptive_threshold(&connected, 3, 5)
}

/// All recipes applied to the same image, plus an untouched copy.
///
/// Ordered from most to least specialized; a recognizer runs over each
/// variant and keeps the best read, falling back to the original.
pub fn variants(image: &ImageBuffer) -> Vec<ImageBuffer> {
    vec![
        for_dotted_numbers(image),
        for_dotted_text(image),
        for_numbers(image),
        for_general_text(image),
        for_low_contrast(image),
        image.clone(),
    ]
}
