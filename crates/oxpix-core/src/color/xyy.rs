//! CIE xyY Color Space
//!
//! Chromaticity coordinates x, y plus luminance Y.

use crate::color::CieXyz;

/// CIE xyY color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieXyy {
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
    /// Y luminance
    pub yl: f32,
}

impl CieXyy {
    /// Create a new xyY color
    #[inline]
    pub const fn new(x: f32, y: f32, yl: f32) -> Self {
        Self { x, y, yl }
    }

    /// Convert from XYZ
    ///
    /// A zero-sum input (black) maps to zero chromaticity.
    pub fn from_xyz(xyz: CieXyz) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            return Self::new(0.0, 0.0, xyz.y);
        }
        Self {
            x: xyz.x / sum,
            y: xyz.y / sum,
            yl: xyz.y,
        }
    }

    /// Convert to XYZ
    pub fn to_xyz(&self) -> CieXyz {
        if self.y == 0.0 {
            return CieXyz::new(0.0, 0.0, 0.0);
        }
        CieXyz::new(
            (self.x * self.yl) / self.y,
            self.yl,
            ((1.0 - self.x - self.y) * self.yl) / self.y,
        )
    }

    /// Check if approximately equal to another xyY color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.yl - other.yl).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = CieXyz::new(0.5, 0.6, 0.7);
        let roundtrip = CieXyy::from_xyz(original).to_xyz();
        assert!(original.approx_eq(&roundtrip, 1e-5));
    }

    #[test]
    fn test_black() {
        let xyy = CieXyy::from_xyz(CieXyz::new(0.0, 0.0, 0.0));
        assert_eq!(xyy.to_xyz(), CieXyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_d65_chromaticity() {
        let xyy = CieXyy::from_xyz(CieXyz::new(0.95047, 1.0, 1.08883));
        assert!((xyy.x - 0.3127).abs() < 1e-3);
        assert!((xyy.y - 0.3290).abs() < 1e-3);
    }
}
