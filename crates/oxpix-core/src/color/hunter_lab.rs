//! Hunter Lab Color Space
//!
//! The 1948 precursor to CIELAB. Ka/Kb coefficients are derived from the
//! white point so the space stays consistent under any illuminant; the
//! historical reference illuminant is C.

use crate::color::{CieXyz, WhitePoint, white_point};

/// Default white point for newly created Hunter Lab colors (illuminant C)
pub const DEFAULT_WHITE_POINT: WhitePoint = white_point::C;

/// Hunter Lab color coordinates with their reference white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterLab {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
    /// Reference white point
    pub white_point: WhitePoint,
}

/// Ka coefficient for a white point (175 for illuminant C)
///
/// The 175/198.04 factor is defined for tristimulus values on the 0-100
/// scale; white points here carry Y = 1, hence the extra 100.
#[inline]
fn ka(wp: CieXyz) -> f32 {
    17500.0 / 198.04 * (wp.x + wp.y)
}

/// Kb coefficient for a white point (70 for illuminant C)
#[inline]
fn kb(wp: CieXyz) -> f32 {
    7000.0 / 218.11 * (wp.y + wp.z)
}

impl HunterLab {
    /// Create a new Hunter Lab color with the default (C) white point
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self::with_white_point(l, a, b, DEFAULT_WHITE_POINT)
    }

    /// Create a new Hunter Lab color referenced to a specific white point
    #[inline]
    pub const fn with_white_point(l: f32, a: f32, b: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            a,
            b,
            white_point,
        }
    }

    /// Convert from XYZ, referencing the given white point
    pub fn from_xyz(xyz: CieXyz, white_point: WhitePoint) -> Self {
        let wp = white_point.xyz;
        let xr = xyz.x / wp.x;
        let yr = xyz.y / wp.y;
        let zr = xyz.z / wp.z;

        let sqrt_yr = yr.sqrt();
        let l = 100.0 * sqrt_yr;
        let (a, b) = if sqrt_yr == 0.0 {
            (0.0, 0.0)
        } else {
            (
                ka(wp) * ((xr - yr) / sqrt_yr),
                kb(wp) * ((yr - zr) / sqrt_yr),
            )
        };

        Self {
            l,
            a,
            b,
            white_point,
        }
    }

    /// Convert to XYZ in this color's own white-point frame
    pub fn to_xyz(&self) -> CieXyz {
        let wp = self.white_point.xyz;
        let yr = (self.l / 100.0) * (self.l / 100.0);
        let sqrt_yr = yr.sqrt();

        let xr = self.a / ka(wp) * sqrt_yr + yr;
        let zr = yr - self.b / kb(wp) * sqrt_yr;

        CieXyz::new(xr * wp.x, yr * wp.y, zr * wp.z)
    }

    /// Check if approximately equal to another Hunter Lab color (components only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::{C, D65};

    #[test]
    fn test_white_is_100() {
        let hlab = HunterLab::from_xyz(C.xyz, C);
        assert!((hlab.l - 100.0).abs() < 1e-2);
        assert!(hlab.a.abs() < 1e-2);
        assert!(hlab.b.abs() < 1e-2);
    }

    #[test]
    fn test_illuminant_c_coefficients() {
        assert!((ka(C.xyz) - 175.0).abs() < 0.5);
        assert!((kb(C.xyz) - 70.0).abs() < 0.5);
    }

    #[test]
    fn test_roundtrip() {
        let original = CieXyz::new(0.4, 0.35, 0.2);
        let hlab = HunterLab::from_xyz(original, D65);
        let roundtrip = hlab.to_xyz();
        assert!(
            original.approx_eq(&roundtrip, 1e-3),
            "roundtrip failed: {original:?} vs {roundtrip:?}"
        );
    }

    #[test]
    fn test_black() {
        let hlab = HunterLab::from_xyz(CieXyz::new(0.0, 0.0, 0.0), C);
        assert_eq!(hlab.l, 0.0);
        assert_eq!(hlab.a, 0.0);
        let xyz = hlab.to_xyz();
        assert!(xyz.approx_eq(&CieXyz::new(0.0, 0.0, 0.0), 1e-6));
    }
}
