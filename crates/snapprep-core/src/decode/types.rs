//! Core types for the photo preparation pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for decoding and pixel-buffer operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognized or supported image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedFile(String),

    /// I/O error while reading the byte source.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Packed pixel layout of an [`ImageBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGB, 3 bytes per pixel.
    #[default]
    Rgb8,
    /// 8-bit RGBA, 4 bytes per pixel.
    Rgba8,
}

impl PixelFormat {
    /// Number of bytes one pixel occupies.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Filter type for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, smooth).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Upright correction derived from the EXIF orientation tag.
///
/// Only the pure rotations are recognized. Mirrored orientations (tags 2, 4,
/// 5 and 7) are left uncorrected and map to `Normal`, as do absent or
/// out-of-range tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// No correction needed.
    #[default]
    Normal,
    /// Rotate 90 degrees clockwise (EXIF tag 6).
    Rotate90,
    /// Rotate 180 degrees (EXIF tag 3).
    Rotate180,
    /// Rotate 270 degrees clockwise (EXIF tag 8).
    Rotate270,
}

impl Orientation {
    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }

    /// Clockwise rotation angle in degrees.
    #[inline]
    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotate90 => 90,
            Orientation::Rotate180 => 180,
            Orientation::Rotate270 => 270,
        }
    }
}

impl From<u32> for Orientation {
    fn from(tag: u32) -> Self {
        match tag {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90,
            8 => Orientation::Rotate270,
            _ => Orientation::Normal,
        }
    }
}

/// Maximum width and height the prepared image may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Maximum output width in pixels.
    pub max_width: u32,
    /// Maximum output height in pixels.
    pub max_height: u32,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            max_width: 1024,
            max_height: 1024,
        }
    }
}

impl BoundingBox {
    /// Create a bounding box with the given limits.
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Check whether the given dimensions already fit within the box.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

/// A decoded image owning its packed pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Layout of the pixel data.
    pub format: PixelFormat,
    /// Packed pixel data in row-major order.
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new ImageBuffer from dimensions and pixel data.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * format.bytes_per_pixel(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Convert a freshly decoded [`image::DynamicImage`] into an owned buffer.
    ///
    /// Sources with an alpha channel are kept as RGBA, everything else is
    /// packed as RGB.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        if img.color().has_alpha() {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Self {
                width,
                height,
                format: PixelFormat::Rgba8,
                pixels: rgba.into_raw(),
            }
        } else {
            let rgb = img.into_rgb8();
            let (width, height) = rgb.dimensions();
            Self {
                width,
                height,
                format: PixelFormat::Rgb8,
                pixels: rgb.into_raw(),
            }
        }
    }

    /// Consume the buffer, converting back into a [`image::DynamicImage`].
    ///
    /// Returns `None` if the pixel data does not match the stated dimensions.
    pub fn into_dynamic(self) -> Option<image::DynamicImage> {
        match self.format {
            PixelFormat::Rgb8 => image::RgbImage::from_raw(self.width, self.height, self.pixels)
                .map(image::DynamicImage::ImageRgb8),
            PixelFormat::Rgba8 => image::RgbaImage::from_raw(self.width, self.height, self.pixels)
                .map(image::DynamicImage::ImageRgba8),
        }
    }

    /// Like [`ImageBuffer::into_dynamic`] but keeps the buffer intact.
    pub fn to_dynamic(&self) -> Option<image::DynamicImage> {
        self.clone().into_dynamic()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
