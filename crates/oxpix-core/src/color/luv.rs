//! CIELUV (L*u*v*) Color Space
//!
//! The other CIE perceptually uniform space, built on the u'v' chromaticity
//! diagram. Like Lab it is referenced to a white point.

use crate::color::lab::{CIE_EPSILON, CIE_KAPPA, DEFAULT_WHITE_POINT};
use crate::color::{CieXyz, WhitePoint};

/// CIELUV color coordinates with their reference white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLuv {
    /// Lightness (0 to 100)
    pub l: f32,
    /// u* axis
    pub u: f32,
    /// v* axis
    pub v: f32,
    /// Reference white point
    pub white_point: WhitePoint,
}

/// u' chromaticity of an XYZ value (0 for black)
#[inline]
fn u_prime(xyz: CieXyz) -> f32 {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if d == 0.0 { 0.0 } else { 4.0 * xyz.x / d }
}

/// v' chromaticity of an XYZ value (0 for black)
#[inline]
fn v_prime(xyz: CieXyz) -> f32 {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if d == 0.0 { 0.0 } else { 9.0 * xyz.y / d }
}

impl CieLuv {
    /// Create a new Luv color with the default (D65) white point
    #[inline]
    pub const fn new(l: f32, u: f32, v: f32) -> Self {
        Self::with_white_point(l, u, v, DEFAULT_WHITE_POINT)
    }

    /// Create a new Luv color referenced to a specific white point
    #[inline]
    pub const fn with_white_point(l: f32, u: f32, v: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            u,
            v,
            white_point,
        }
    }

    /// Convert from XYZ, referencing the given white point
    pub fn from_xyz(xyz: CieXyz, white_point: WhitePoint) -> Self {
        let yr = xyz.y / white_point.xyz.y;

        let l = if yr > CIE_EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            CIE_KAPPA * yr
        };

        let du = u_prime(xyz) - u_prime(white_point.xyz);
        let dv = v_prime(xyz) - v_prime(white_point.xyz);

        Self {
            l,
            u: 13.0 * l * du,
            v: 13.0 * l * dv,
            white_point,
        }
    }

    /// Convert to XYZ in this color's own white-point frame
    pub fn to_xyz(&self) -> CieXyz {
        if self.l == 0.0 {
            return CieXyz::new(0.0, 0.0, 0.0);
        }

        let wp = self.white_point.xyz;
        let u0 = u_prime(wp);
        let v0 = v_prime(wp);

        let y = if self.l > CIE_KAPPA * CIE_EPSILON {
            let f = (self.l + 16.0) / 116.0;
            f * f * f
        } else {
            self.l / CIE_KAPPA
        } * wp.y;

        let u = self.u / (13.0 * self.l) + u0;
        let v = self.v / (13.0 * self.l) + v0;

        let x = y * 9.0 * u / (4.0 * v);
        let z = y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v);

        CieXyz::new(x, y, z)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f32 {
        (self.u * self.u + self.v * self.v).sqrt()
    }

    /// Get hue angle in degrees (0-360)
    #[inline]
    pub fn hue_degrees(&self) -> f32 {
        let h = self.v.atan2(self.u).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Check if approximately equal to another Luv color (components only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.u - other.u).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::D65;

    #[test]
    fn test_white_is_100() {
        let luv = CieLuv::from_xyz(D65.xyz, D65);
        assert!((luv.l - 100.0).abs() < 1e-2);
        assert!(luv.u.abs() < 1e-2);
        assert!(luv.v.abs() < 1e-2);
    }

    #[test]
    fn test_black_roundtrip() {
        let luv = CieLuv::from_xyz(CieXyz::new(0.0, 0.0, 0.0), D65);
        assert_eq!(luv.l, 0.0);
        let xyz = luv.to_xyz();
        assert!(xyz.approx_eq(&CieXyz::new(0.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_roundtrip() {
        let original = CieXyz::new(0.35, 0.42, 0.25);
        let luv = CieLuv::from_xyz(original, D65);
        let roundtrip = luv.to_xyz();
        assert!(
            original.approx_eq(&roundtrip, 1e-3),
            "roundtrip failed: {original:?} vs {roundtrip:?}"
        );
    }
}
