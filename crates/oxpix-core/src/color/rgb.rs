//! RGB Color Types
//!
//! Two forms, both tagged with the working space that interprets them:
//! - [`Rgb`]: companded channel values (what pixels store)
//! - [`LinearRgb`]: linear-light values (what the XYZ matrix consumes)
//!
//! Channel values are nominally in [0, 1]; out-of-gamut values are
//! representable and never clamped here.

use crate::color::working_space::{RgbWorkingSpace, SRGB};
use crate::color::CieXyz;

/// Companded RGB color with its working space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Working space interpreting the channels
    pub space: &'static RgbWorkingSpace,
}

/// Linear-light RGB color with its working space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear)
    pub r: f32,
    /// Green channel (linear)
    pub g: f32,
    /// Blue channel (linear)
    pub b: f32,
    /// Working space interpreting the channels
    pub space: &'static RgbWorkingSpace,
}

impl Rgb {
    /// Create a new sRGB color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_space(r, g, b, &SRGB)
    }

    /// Create a new RGB color in a specific working space
    #[inline]
    pub const fn with_space(r: f32, g: f32, b: f32, space: &'static RgbWorkingSpace) -> Self {
        Self { r, g, b, space }
    }

    /// Create from 8-bit channel values (sRGB)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Convert to 8-bit channel values, rounding and saturating
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Expand to linear light using this color's companding
    pub fn to_linear(&self) -> LinearRgb {
        let c = self.space.companding;
        LinearRgb {
            r: c.expand(self.r),
            g: c.expand(self.g),
            b: c.expand(self.b),
            space: self.space,
        }
    }

    /// Clamp all channels to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            space: self.space,
        }
    }

    /// Check if approximately equal to another RGB color (channels only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl LinearRgb {
    /// Create a new linear sRGB color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_space(r, g, b, &SRGB)
    }

    /// Create a new linear RGB color in a specific working space
    #[inline]
    pub const fn with_space(r: f32, g: f32, b: f32, space: &'static RgbWorkingSpace) -> Self {
        Self { r, g, b, space }
    }

    /// Compress to companded form using this color's companding
    pub fn to_companded(&self) -> Rgb {
        let c = self.space.companding;
        Rgb {
            r: c.compress(self.r),
            g: c.compress(self.g),
            b: c.compress(self.b),
            space: self.space,
        }
    }

    /// Convert to XYZ via the working-space matrix
    pub fn to_xyz(&self) -> CieXyz {
        CieXyz::from_array(self.space.xyz_matrix.multiply_vec([self.r, self.g, self.b]))
    }

    /// Convert from XYZ into the given working space (linear light)
    pub fn from_xyz(xyz: CieXyz, space: &'static RgbWorkingSpace) -> Self {
        let v = space.inverse_xyz_matrix.multiply_vec(xyz.to_array());
        Self {
            r: v[0],
            g: v[1],
            b: v[2],
            space,
        }
    }

    /// Check if approximately equal to another linear RGB color (channels only)
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::working_space::ADOBE_RGB_1998;

    #[test]
    fn test_companding_roundtrip() {
        let original = Rgb::new(0.25, 0.5, 0.75);
        let roundtrip = original.to_linear().to_companded();
        assert!(original.approx_eq(&roundtrip, 1e-5));
    }

    #[test]
    fn test_xyz_roundtrip() {
        let original = LinearRgb::new(0.2, 0.4, 0.6);
        let roundtrip = LinearRgb::from_xyz(original.to_xyz(), &SRGB);
        assert!(original.approx_eq(&roundtrip, 1e-5));
    }

    #[test]
    fn test_white_maps_to_working_space_white() {
        for space in [&SRGB, &ADOBE_RGB_1998] {
            let white = LinearRgb::with_space(1.0, 1.0, 1.0, space).to_xyz();
            assert!(
                white.approx_eq(&space.white_point.xyz, 1e-3),
                "{} white mismatch",
                space.name
            );
        }
    }

    #[test]
    fn test_u8_conversion_saturates() {
        let rgb = Rgb::new(10.0, -5.0, 0.5);
        let bytes = rgb.to_u8();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[2], 128);
    }

    #[test]
    fn test_out_of_gamut_not_clamped_on_construction() {
        let rgb = Rgb::new(1.5, -0.2, 0.5);
        assert_eq!(rgb.r, 1.5);
        assert_eq!(rgb.g, -0.2);
    }
}
