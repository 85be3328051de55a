//! CIELAB (L*a*b*) Color Space
//!
//! Perceptually uniform space referenced to a white point:
//! - L*: lightness (0 = black, 100 = white)
//! - a*: green-red axis
//! - b*: blue-yellow axis
//!
//! Conversion uses the CIE ε/κ form (ε = 216/24389, κ = 24389/27), which
//! avoids the discontinuity of the historical cube-root-only formula.

use crate::color::{CieXyz, WhitePoint, white_point};

/// CIE constant ε = 216/24389 (actual, not the rounded 0.008856)
pub const CIE_EPSILON: f32 = 216.0 / 24389.0;
/// CIE constant κ = 24389/27 (actual, not the rounded 903.3)
pub const CIE_KAPPA: f32 = 24389.0 / 27.0;

/// Default white point for newly created Lab colors
pub const DEFAULT_WHITE_POINT: WhitePoint = white_point::D65;

/// CIELAB color coordinates with their reference white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    /// Lightness (0 to 100 for in-gamut colors)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
    /// Reference white point
    pub white_point: WhitePoint,
}

impl CieLab {
    /// Create a new Lab color with the default (D65) white point
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self::with_white_point(l, a, b, DEFAULT_WHITE_POINT)
    }

    /// Create a new Lab color referenced to a specific white point
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

        let fx = lab_f(xr);
        let fy = lab_f(yr);
        let fz = lab_f(zr);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            white_point,
        }
    }

    /// Convert to XYZ in this color's own white-point frame
    pub fn to_xyz(&self) -> CieXyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let xr = lab_f_inv(fx);
        // The L branch has an exact linear inverse
        let yr = if self.l > CIE_KAPPA * CIE_EPSILON {
            let v = (self.l + 16.0) / 116.0;
            v * v * v
        } else {
            self.l / CIE_KAPPA
        };
        let zr = lab_f_inv(fz);

        let wp = self.white_point.xyz;
        CieXyz::new(xr * wp.x, yr * wp.y, zr * wp.z)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Get hue angle in degrees (0-360)
    #[inline]
    pub fn hue_degrees(&self) -> f32 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Check if approximately equal to another Lab color (components only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function f(t) in ε/κ form
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

/// Lab inverse function f⁻¹(t)
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > CIE_EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / CIE_KAPPA
    }
}
