//! HSV Color Space
//!
//! Hue (degrees), saturation, value. Interpreted in the sRGB frame.

use crate::color::Rgb;

/// HSV color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue angle in degrees (0-360)
    pub h: f32,
    /// Saturation (0 to 1)
    pub s: f32,
    /// Value (0 to 1)
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert from RGB (channels nominally in [0, 1])
    pub fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let delta = max - min;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, max);
        }

        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if max == rgb.r {
            ((rgb.g - rgb.b) / delta).rem_euclid(6.0)
        } else if max == rgb.g {
            (rgb.b - rgb.r) / delta + 2.0
        } else {
            (rgb.r - rgb.g) / delta + 4.0
        } * 60.0;

        Self::new(h, s, max)
    }

    /// Convert to sRGB
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            return Rgb::new(self.v, self.v, self.v);
        }

        let c = self.v * self.s;
        let h6 = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h6 as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(r + m, g + m, b + m)
    }

    /// Check if approximately equal to another HSV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let red = Hsv::from_rgb(Rgb::new(1.0, 0.0, 0.0));
        assert!(red.approx_eq(&Hsv::new(0.0, 1.0, 1.0), 1e-4));

        let cyan = Hsv::from_rgb(Rgb::new(0.0, 1.0, 1.0));
        assert!(cyan.approx_eq(&Hsv::new(180.0, 1.0, 1.0), 1e-3));
    }

    #[test]
    fn test_white_and_black() {
        assert!(Hsv::from_rgb(Rgb::new(1.0, 1.0, 1.0)).approx_eq(&Hsv::new(0.0, 0.0, 1.0), 1e-6));
        assert!(Hsv::from_rgb(Rgb::new(0.0, 0.0, 0.0)).approx_eq(&Hsv::new(0.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_roundtrip() {
        let original = Rgb::new(0.1, 0.65, 0.9);
        let roundtrip = Hsv::from_rgb(original).to_rgb();
        assert!(original.approx_eq(&roundtrip, 1e-4));
    }
}
