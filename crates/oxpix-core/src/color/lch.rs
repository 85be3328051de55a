//! CIE LCh(ab) Color Space
//!
//! The cylindrical form of CIELAB: lightness, chroma and a hue angle in
//! degrees. Shares its white point semantics with [`CieLab`].

use crate::color::lab::DEFAULT_WHITE_POINT;
use crate::color::{CieLab, WhitePoint};

/// CIE LCh(ab) color coordinates with their reference white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLch {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Chroma
    pub c: f32,
    /// Hue angle in degrees (0-360)
    pub h: f32,
    /// Reference white point
    pub white_point: WhitePoint,
}

impl CieLch {
    /// Create a new LCh color with the default (D65) white point
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self::with_white_point(l, c, h, DEFAULT_WHITE_POINT)
    }

    /// Create a new LCh color referenced to a specific white point
    #[inline]
    pub const fn with_white_point(l: f32, c: f32, h: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            c,
            h,
            white_point,
        }
    }

    /// Convert from Lab, preserving the white point
    pub fn from_lab(lab: CieLab) -> Self {
        Self {
            l: lab.l,
            c: lab.chroma(),
            h: lab.hue_degrees(),
            white_point: lab.white_point,
        }
    }

    /// Convert to Lab (polar → Cartesian), preserving the white point
    pub fn to_lab(&self) -> CieLab {
        let h_rad = self.h.to_radians();
        CieLab::with_white_point(
            self.l,
            self.c * h_rad.cos(),
            self.c * h_rad.sin(),
            self.white_point,
        )
    }

    /// Check if approximately equal to another LCh color (components only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = CieLch::new(54.0, 30.0, 210.0);
        let roundtrip = CieLch::from_lab(original.to_lab());
        assert!(
            original.approx_eq(&roundtrip, 1e-3),
            "roundtrip failed: {original:?} vs {roundtrip:?}"
        );
    }

    #[test]
    fn test_zero_chroma_is_neutral() {
        let lch = CieLch::new(50.0, 0.0, 123.0);
        let lab = lch.to_lab();
        assert!(lab.a.abs() < 1e-5);
        assert!(lab.b.abs() < 1e-5);
    }

    #[test]
    fn test_known_angle() {
        // Hue 90 degrees points along +b*
        let lab = CieLch::new(50.0, 10.0, 90.0).to_lab();
        assert!(lab.a.abs() < 1e-3);
        assert!((lab.b - 10.0).abs() < 1e-3);
    }
}
