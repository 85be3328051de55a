//! CIE LCh(uv) Color Space
//!
//! The cylindrical form of CIELUV, hue in degrees.

use crate::color::lab::DEFAULT_WHITE_POINT;
use crate::color::{CieLuv, WhitePoint};

/// CIE LCh(uv) color coordinates with their reference white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLchuv {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Chroma
    pub c: f32,
    /// Hue angle in degrees (0-360)
    pub h: f32,
    /// Reference white point
    pub white_point: WhitePoint,
}

impl CieLchuv {
    /// Create a new LCh(uv) color with the default (D65) white point
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self::with_white_point(l, c, h, DEFAULT_WHITE_POINT)
    }

    /// Create a new LCh(uv) color referenced to a specific white point
    #[inline]
    pub const fn with_white_point(l: f32, c: f32, h: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            c,
            h,
            white_point,
        }
    }

    /// Convert from Luv, preserving the white point
    pub fn from_luv(luv: CieLuv) -> Self {
        Self {
            l: luv.l,
            c: luv.chroma(),
            h: luv.hue_degrees(),
            white_point: luv.white_point,
        }
    }

    /// Convert to Luv (polar → Cartesian), preserving the white point
    pub fn to_luv(&self) -> CieLuv {
        let h_rad = self.h.to_radians();
        CieLuv::with_white_point(
            self.l,
            self.c * h_rad.cos(),
            self.c * h_rad.sin(),
            self.white_point,
        )
    }

    /// Check if approximately equal to another LCh(uv) color (components only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}
