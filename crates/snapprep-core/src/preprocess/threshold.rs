//! Local-mean binarization and dot joining.

use crate::decode::ImageBuffer;

/// Binarize an image against its local mean.
///
/// For every pixel, the mean intensity of the surrounding
/// `block_size x block_size` window (clipped at the edges) is computed from
/// the first channel. Pixels brighter than `mean - bias` become white,
/// everything else black. A positive `bias` errs toward white, which keeps
/// faint strokes from swallowing their surroundings.
///
/// Intended to run after [`grayscale`](crate::preprocess::grayscale) or a
/// contrast adjustment, when all three channels agree.
pub fn adaptive_threshold(image: &ImageBuffer, block_size: u32, bias: i32) -> ImageBuffer {
    let width = image.width as i64;
    let height = image.height as i64;
    let bpp = image.format.bytes_per_pixel();
    let half = (block_size / 2) as i64;

    let mut out = image.clone();

    for y in 0..height {
        for x in 0..width {
            let mut sum: u64 = 0;
            let mut count: u64 = 0;

            for by in -half..=half {
                for bx in -half..=half {
                    let nx = x + bx;
                    let ny = y + by;
                    if nx >= 0 && nx < width && ny >= 0 && ny < height {
                        sum += image.pixels[(ny * width + nx) as usize * bpp] as u64;
                        count += 1;
                    }
                }
            }

            let mean = (sum / count) as i32;
            let idx = (y * width + x) as usize * bpp;
            let gray = image.pixels[idx] as i32;

            let value = if gray > mean - bias { 255 } else { 0 };
            out.pixels[idx] = value;
            out.pixels[idx + 1] = value;
            out.pixels[idx + 2] = value;
        }
    }

    out
}

/// Join nearby dark dots, as found in dot-matrix printed digits.
///
/// A pixel darker than `dark_threshold` that has at least one equally dark
/// neighbour within `radius` is pulled down to the darkest intensity found
/// in that neighbourhood. Isolated dark pixels and bright background are
/// left alone. Expects a grayscaled image (reads the first channel).
pub fn connect_dots(image: &ImageBuffer, radius: u32, dark_threshold: u8) -> ImageBuffer {
    let width = image.width as i64;
    let height = image.height as i64;
    let bpp = image.format.bytes_per_pixel();
    let radius = radius as i64;

    let mut out = image.clone();

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize * bpp;
            let gray = image.pixels[idx];
            if gray >= dark_threshold {
                continue;
            }

            let mut min_gray = gray;
            let mut has_nearby_dots = false;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx >= 0 && nx < width && ny >= 0 && ny < height {
                        let neighbor = image.pixels[(ny * width + nx) as usize * bpp];
                        if neighbor < dark_threshold {
                            has_nearby_dots = true;
                            min_gray = min_gray.min(neighbor);
                        }
                    }
                }
            }

            if has_nearby_dots {
                out.pixels[idx] = min_gray;
                out.pixels[idx + 1] = min_gray;
                out.pixels[idx + 2] = min_gray;
            }
        }
    }

    out
}
