//! Downscaling to fit a bounding box.
//!
//! The fit operation only ever scales down. Both dimensions are scaled by
//! the same ratio, so the aspect ratio is preserved exactly.

use tracing::debug;

use super::{BoundingBox, DecodeError, FilterType, ImageBuffer};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either target dimension is zero,
/// and `DecodeError::CorruptedFile` if the pixel buffer does not match its
/// stated dimensions.
pub fn resize(
    image: &ImageBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<ImageBuffer, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let img = image.to_dynamic().ok_or_else(|| {
        DecodeError::CorruptedFile("pixel buffer does not match its dimensions".to_string())
    })?;

    let resized = img.resize_exact(width, height, filter.to_image_filter());

    Ok(ImageBuffer::from_dynamic(resized))
}

/// Scale an image down so it fits within `bounds`, preserving aspect ratio.
///
/// The scale ratio is `min(max_width / width, max_height / height)`. When
/// the image already fits (ratio >= 1) the input buffer is returned as-is,
/// moved rather than copied. No upscaling ever occurs.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either box dimension is zero.
pub fn resize_to_fit(
    image: ImageBuffer,
    bounds: BoundingBox,
    filter: FilterType,
) -> Result<ImageBuffer, DecodeError> {
    if bounds.max_width == 0 || bounds.max_height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let ratio = f64::min(
        bounds.max_width as f64 / image.width as f64,
        bounds.max_height as f64 / image.height as f64,
    );

    if ratio >= 1.0 {
        return Ok(image);
    }

    let new_width = ((image.width as f64 * ratio).round() as u32).max(1);
    let new_height = ((image.height as f64 * ratio).round() as u32).max(1);

    debug!(
        from_width = image.width,
        from_height = image.height,
        new_width,
        new_height,
        "scaling down to fit bounds"
    );

    resize(&image, new_width, new_height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelFormat;

    fn create_test_image(width: u32, height: u32) -> ImageBuffer {
        // Simple gradient so resampling has something to chew on
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        ImageBuffer::new(width, height, PixelFormat::Rgb8, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_fit_width_limited() {
        let img = create_test_image(2000, 1000);
        let fitted = resize_to_fit(img, BoundingBox::default(), FilterType::Bilinear).unwrap();

        // ratio = min(1024/2000, 1024/1000) = 0.512
        assert_eq!(fitted.width, 1024);
        assert_eq!(fitted.height, 512);
    }

    #[test]
    fn test_fit_height_limited() {
        let img = create_test_image(1000, 2000);
        let fitted = resize_to_fit(img, BoundingBox::default(), FilterType::Bilinear).unwrap();

        assert_eq!(fitted.width, 512);
        assert_eq!(fitted.height, 1024);
    }

    #[test]
    fn test_fit_non_square_box() {
        let img = create_test_image(600, 600);
        let fitted = resize_to_fit(img, BoundingBox::new(300, 150), FilterType::Bilinear).unwrap();

        assert_eq!(fitted.width, 150);
        assert_eq!(fitted.height, 150);
    }

    #[test]
    fn test_fit_already_within_bounds_is_a_move() {
        let img = create_test_image(100, 50);
        let pixels_before = img.pixels.clone();
        let fitted = resize_to_fit(img, BoundingBox::default(), FilterType::Bilinear).unwrap();

        // Never upscaled, and the pixel data is untouched
        assert_eq!(fitted.width, 100);
        assert_eq!(fitted.height, 50);
        assert_eq!(fitted.pixels, pixels_before);
    }

    #[test]
    fn test_fit_exact_bounds_is_a_noop() {
        let img = create_test_image(1024, 1024);
        let fitted = resize_to_fit(img, BoundingBox::default(), FilterType::Bilinear).unwrap();

        assert_eq!(fitted.width, 1024);
        assert_eq!(fitted.height, 1024);
    }

    #[test]
    fn test_fit_zero_box_error() {
        let img = create_test_image(100, 50);
        assert!(resize_to_fit(img, BoundingBox::new(0, 100), FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_fit_extreme_aspect_ratio_keeps_min_dimension() {
        // 5000x1 scaled by 1024/5000 would round height to 0; it must clamp to 1
        let img = create_test_image(5000, 1);
        let fitted = resize_to_fit(img, BoundingBox::default(), FilterType::Bilinear).unwrap();

        assert_eq!(fitted.width, 1024);
        assert_eq!(fitted.height, 1);
    }

    #[test]
    fn test_fit_preserves_rgba() {
        let img = ImageBuffer::new(2048, 1024, PixelFormat::Rgba8, vec![42u8; 2048 * 1024 * 4]);
        let fitted = resize_to_fit(img, BoundingBox::default(), FilterType::Bilinear).unwrap();

        assert_eq!(fitted.format, PixelFormat::Rgba8);
        assert_eq!(fitted.width, 1024);
        assert_eq!(fitted.height, 512);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::PixelFormat;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=64, 1u32..=64)
    }

    /// Strategy for generating bounding boxes.
    fn bounds_strategy() -> impl Strategy<Value = BoundingBox> {
        (1u32..=48, 1u32..=48).prop_map(|(w, h)| BoundingBox::new(w, h))
    }

    fn gray_image(width: u32, height: u32) -> ImageBuffer {
        ImageBuffer::new(
            width,
            height,
            PixelFormat::Rgb8,
            vec![128u8; (width * height * 3) as usize],
        )
    }

    proptest! {
        /// Property: the fitted image always fits within the box.
        #[test]
        fn prop_fit_respects_bounds(
            (width, height) in dimensions_strategy(),
            bounds in bounds_strategy(),
        ) {
            let fitted = resize_to_fit(gray_image(width, height), bounds, FilterType::Bilinear)
                .unwrap();

            prop_assert!(fitted.width <= bounds.max_width.max(width));
            prop_assert!(fitted.height <= bounds.max_height.max(height));
            if !bounds.contains(width, height) {
                prop_assert!(bounds.contains(fitted.width, fitted.height));
            }
        }

        /// Property: fitting never upscales.
        #[test]
        fn prop_fit_never_upscales(
            (width, height) in dimensions_strategy(),
            bounds in bounds_strategy(),
        ) {
            let fitted = resize_to_fit(gray_image(width, height), bounds, FilterType::Bilinear)
                .unwrap();

            prop_assert!(fitted.width <= width);
            prop_assert!(fitted.height <= height);
        }

        /// Property: aspect ratio survives within rounding error.
        #[test]
        fn prop_fit_preserves_aspect_ratio(
            (width, height) in dimensions_strategy(),
            bounds in bounds_strategy(),
        ) {
            let fitted = resize_to_fit(gray_image(width, height), bounds, FilterType::Bilinear)
                .unwrap();

            // Skip degenerate outputs where the 1px floor dominates rounding
            prop_assume!(fitted.width >= 8 && fitted.height >= 8);

            let src_ratio = width as f64 / height as f64;
            let dst_ratio = fitted.width as f64 / fitted.height as f64;
            // Each output dimension is off by at most half a pixel from the
            // ideal scaled value
            let tolerance =
                src_ratio * (0.5 / fitted.width as f64 + 0.5 / fitted.height as f64) * 1.5;
            prop_assert!((src_ratio - dst_ratio).abs() <= tolerance + 1e-9,
                "src {} dst {} tol {}", src_ratio, dst_ratio, tolerance);
        }
    }
}
