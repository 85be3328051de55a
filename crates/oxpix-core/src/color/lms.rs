//! LMS Cone-Response Color Space
//!
//! Long/medium/short cone responses. The XYZ↔LMS transform is a plain 3×3
//! matrix; which matrix depends on the adaptation model in use, so it is an
//! explicit parameter here and configured once on the orchestrator.

use crate::color::CieXyz;
use crate::math::Matrix3x3;

/// LMS cone-response values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    /// Long-wavelength cone response
    pub l: f32,
    /// Medium-wavelength cone response
    pub m: f32,
    /// Short-wavelength cone response
    pub s: f32,
}

impl Lms {
    /// Create a new LMS value
    #[inline]
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Self { l, m, s }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.l, self.m, self.s]
    }

    /// Convert from XYZ via the given cone-response matrix
    #[inline]
    pub fn from_xyz(xyz: CieXyz, xyz_to_lms: &Matrix3x3) -> Self {
        let v = xyz_to_lms.multiply_vec(xyz.to_array());
        Self::new(v[0], v[1], v[2])
    }

    /// Convert to XYZ via the given inverse cone-response matrix
    #[inline]
    pub fn to_xyz(&self, lms_to_xyz: &Matrix3x3) -> CieXyz {
        CieXyz::from_array(lms_to_xyz.multiply_vec(self.to_array()))
    }

    /// Check if approximately equal to another LMS value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::chromatic_adaptation::BRADFORD;

    #[test]
    fn test_roundtrip() {
        let inverse = BRADFORD.inverse().unwrap();
        let original = CieXyz::new(0.4, 0.5, 0.6);
        let lms = Lms::from_xyz(original, &BRADFORD);
        let roundtrip = lms.to_xyz(&inverse);
        assert!(original.approx_eq(&roundtrip, 1e-5));
    }

    #[test]
    fn test_identity_matrix() {
        let id = Matrix3x3::identity();
        let lms = Lms::from_xyz(CieXyz::new(0.1, 0.2, 0.3), &id);
        assert!(lms.approx_eq(&Lms::new(0.1, 0.2, 0.3), 1e-6));
    }
}
