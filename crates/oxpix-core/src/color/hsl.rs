//! HSL Color Space
//!
//! Hue (degrees), saturation, lightness. A reparameterization of RGB;
//! interpreted in the sRGB frame.

use crate::color::Rgb;

/// HSL color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees (0-360)
    pub h: f32,
    /// Saturation (0 to 1)
    pub s: f32,
    /// Lightness (0 to 1)
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert from RGB (channels nominally in [0, 1])
    pub fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == rgb.r {
            ((rgb.g - rgb.b) / delta).rem_euclid(6.0)
        } else if max == rgb.g {
            (rgb.b - rgb.r) / delta + 2.0
        } else {
            (rgb.r - rgb.g) / delta + 4.0
        } * 60.0;

        Self::new(h, s, l)
    }

    /// Convert to sRGB
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            return Rgb::new(self.l, self.l, self.l);
        }

        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h6 = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;

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

    /// Check if approximately equal to another HSL color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}
