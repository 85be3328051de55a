//! CMYK Color Space
//!
//! Naive device CMYK with key (black) extraction, interpreted in the sRGB
//! frame. This is the colorimetric value type; the planar JPEG CMYK path
//! lives in the `jpeg` module and uses the Adobe inverted storage convention.

use crate::color::Rgb;

/// CMYK color components, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
    /// Key (black)
    pub k: f32,
}

impl Cmyk {
    /// Create a new CMYK color
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }

    /// Convert from RGB with maximum key extraction
    pub fn from_rgb(rgb: Rgb) -> Self {
        let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let inv = 1.0 - k;
        Self {
            c: (1.0 - rgb.r - k) / inv,
            m: (1.0 - rgb.g - k) / inv,
            y: (1.0 - rgb.b - k) / inv,
            k,
        }
    }

    /// Convert to sRGB
    pub fn to_rgb(&self) -> Rgb {
        let inv = 1.0 - self.k;
        Rgb::new(
            (1.0 - self.c) * inv,
            (1.0 - self.m) * inv,
            (1.0 - self.y) * inv,
        )
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.c - other.c).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.k - other.k).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white = Cmyk::from_rgb(Rgb::new(1.0, 1.0, 1.0));
        assert!(white.approx_eq(&Cmyk::new(0.0, 0.0, 0.0, 0.0), 1e-6));

        let black = Cmyk::from_rgb(Rgb::new(0.0, 0.0, 0.0));
        assert!(black.approx_eq(&Cmyk::new(0.0, 0.0, 0.0, 1.0), 1e-6));
    }

    #[test]
    fn test_pure_cyan() {
        let cyan = Cmyk::from_rgb(Rgb::new(0.0, 1.0, 1.0));
        assert!(cyan.approx_eq(&Cmyk::new(1.0, 0.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_roundtrip() {
        let original = Rgb::new(0.35, 0.7, 0.2);
        let roundtrip = Cmyk::from_rgb(original).to_rgb();
        assert!(original.approx_eq(&roundtrip, 1e-5));
    }
}
