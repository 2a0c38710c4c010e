//! Per-pixel color operations used by the OCR recipes.

use crate::decode::ImageBuffer;

/// Apply a contrast/brightness adjustment in place.
///
/// Each color channel becomes `channel * contrast + brightness`, clamped
/// to the 8-bit range.
pub fn adjust_contrast(image: &mut ImageBuffer, contrast: f32, brightness: f32) {
    let bpp = image.format.bytes_per_pixel();
    for chunk in image.pixels.chunks_exact_mut(bpp) {
        for channel in &mut chunk[..3] {
            *channel = (*channel as f32 * contrast + brightness).clamp(0.0, 255.0) as u8;
        }
    }
}

/// Replace each pixel's color channels with its Rec. 709 luma, in place.
pub fn grayscale(image: &mut ImageBuffer) {
    let bpp = image.format.bytes_per_pixel();
    for chunk in image.pixels.chunks_exact_mut(bpp) {
        let luma = 0.2126 * chunk[0] as f32 + 0.7152 * chunk[1] as f32 + 0.0722 * chunk[2] as f32;
        let luma = luma.clamp(0.0, 255.0) as u8;
        chunk[0] = luma;
        chunk[1] = luma;
        chunk[2] = luma;
    }
}

/// Apply a symmetric channel-mixing matrix in place.
///
/// Each output channel is `same` times itself plus `other` times each of
/// the two remaining channels. With `same > 1` and a small negative
/// `other` this acts as a cross-channel sharpen that exaggerates edges
/// between differently colored regions.
pub fn mix_channels(image: &mut ImageBuffer, same: f32, other: f32) {
    let bpp = image.format.bytes_per_pixel();
    for chunk in image.pixels.chunks_exact_mut(bpp) {
        let r = chunk[0] as f32;
        let g = chunk[1] as f32;
        let b = chunk[2] as f32;
        chunk[0] = (same * r + other * g + other * b).clamp(0.0, 255.0) as u8;
        chunk[1] = (other * r + same * g + other * b).clamp(0.0, 255.0) as u8;
        chunk[2] = (other * r + other * g + same * b).clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelFormat;

    fn single_pixel(rgb: [u8; 3]) -> ImageBuffer {
        ImageBuffer::new(1, 1, PixelFormat::Rgb8, rgb.to_vec())
    }

    #[test]
    fn test_adjust_contrast_scales_and_clamps() {
        let mut img = single_pixel([100, 200, 0]);
        adjust_contrast(&mut img, 1.5, 20.0);

        assert_eq!(img.pixels, vec![170, 255, 20]);
    }

    #[test]
    fn test_adjust_contrast_identity() {
        let mut img = single_pixel([10, 20, 30]);
        adjust_contrast(&mut img, 1.0, 0.0);

        assert_eq!(img.pixels, vec![10, 20, 30]);
    }

    #[test]
    fn test_grayscale_flattens_channels() {
        let mut img = single_pixel([255, 0, 0]);
        grayscale(&mut img);

        // Pure red has luma 0.2126 * 255 = 54
        assert_eq!(img.pixels, vec![54, 54, 54]);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let mut img = ImageBuffer::new(1, 1, PixelFormat::Rgba8, vec![255, 0, 0, 77]);
        grayscale(&mut img);

        assert_eq!(img.pixels[3], 77);
    }

    #[test]
    fn test_mix_channels_sharpens_differences() {
        let mut img = single_pixel([200, 100, 100]);
        mix_channels(&mut img, 2.2, -0.3);

        // 2.2*200 - 0.3*100 - 0.3*100 = 380 -> clamps to 255
        // -0.3*200 + 2.2*100 - 0.3*100 = 130
        assert_eq!(img.pixels, vec![255, 130, 130]);
    }

    #[test]
    fn test_mix_channels_neutral_on_gray() {
        // same + 2*other = 1.6 brightens uniform gray uniformly
        let mut img = single_pixel([100, 100, 100]);
        mix_channels(&mut img, 2.2, -0.3);

        assert_eq!(img.pixels, vec![160, 160, 160]);
    }
}
