//! YCbCr Color Space
//!
//! Full-range ITU-R BT.601 luma/chroma, components stored in 0..255 with the
//! chroma channels centered at 128. Interpreted in the sRGB frame.

use crate::color::Rgb;

/// YCbCr color components in 0..255 (full range)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCr {
    /// Luma (0-255)
    pub y: f32,
    /// Blue-difference chroma (0-255, centered at 128)
    pub cb: f32,
    /// Red-difference chroma (0-255, centered at 128)
    pub cr: f32,
}

impl YCbCr {
    /// Create a new YCbCr color
    #[inline]
    pub const fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }

    /// Convert from RGB (channels nominally in [0, 1])
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r * 255.0;
        let g = rgb.g * 255.0;
        let b = rgb.b * 255.0;

        Self {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            cb: 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
            cr: 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
        }
    }

    /// Convert to sRGB
    pub fn to_rgb(&self) -> Rgb {
        let y = self.y;
        let cb = self.cb - 128.0;
        let cr = self.cr - 128.0;

        Rgb::new(
            (y + 1.402 * cr) / 255.0,
            (y - 0.344136 * cb - 0.714136 * cr) / 255.0,
            (y + 1.772 * cb) / 255.0,
        )
    }

    /// Check if approximately equal to another YCbCr color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.cb - other.cb).abs() < epsilon
            && (self.cr - other.cr).abs() < epsilon
    }
}

impl Default for YCbCr {
    /// Black: zero luma, centered chroma
    fn default() -> Self {
        Self::new(0.0, 128.0, 128.0)
    }
}
