//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation corrects a color's tristimulus values for a change of
//! reference white point. The transform is linear Von Kries style: project
//! into a cone-response (LMS) space, scale each response channel by the ratio
//! of destination to source white-point responses, and project back.
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::{CieXyz, WhitePoint};
use crate::math::Matrix3x3;

/// Bradford cone-response matrix: XYZ → LMS
///
/// The "spectrally sharpened" matrix used as the default adaptation basis.
pub const BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Bradford matrix inverse: LMS → XYZ
pub const BRADFORD_INVERSE: Matrix3x3 = Matrix3x3::new([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Von Kries (Hunt-Pointer-Estevez, D65-normalized) matrix: XYZ → LMS
pub const VON_KRIES: Matrix3x3 = Matrix3x3::new([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Von Kries matrix inverse: LMS → XYZ
pub const VON_KRIES_INVERSE: Matrix3x3 = Matrix3x3::new([
    [1.8599364, -1.1293816, 0.2198974],
    [0.3611914, 0.6388125, -0.0000064],
    [0.0000000, 0.0000000, 1.0890636],
]);

/// Capability interface for pluggable adaptation strategies
///
/// The orchestrator holds an optional strategy; absence disables adaptation
/// entirely.
pub trait ChromaticAdaptation {
    /// Adapt an XYZ color from one white point to another
    fn transform(
        &self,
        color: CieXyz,
        source_white: &WhitePoint,
        target_white: &WhitePoint,
    ) -> CieXyz;
}

/// A Von Kries style chromatic adaptation parameterized by its cone-response matrix
///
/// The matrix inverse is computed once at construction and reused for every
/// transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonKriesAdaptation {
    forward: Matrix3x3,
    inverse: Matrix3x3,
}

impl VonKriesAdaptation {
    /// Create an adaptation from an XYZ → LMS cone-response matrix
    ///
    /// Returns None if the matrix is singular.
    pub fn new(xyz_to_lms: Matrix3x3) -> Option<Self> {
        let inverse = xyz_to_lms.inverse()?;
        Some(Self {
            forward: xyz_to_lms,
            inverse,
        })
    }

    /// Create the default Bradford adaptation
    pub const fn bradford() -> Self {
        Self {
            forward: BRADFORD,
            inverse: BRADFORD_INVERSE,
        }
    }

    /// Create a Von Kries (Hunt-Pointer-Estevez) adaptation
    pub const fn von_kries() -> Self {
        Self {
            forward: VON_KRIES,
            inverse: VON_KRIES_INVERSE,
        }
    }

    /// The XYZ → LMS cone-response matrix in use
    #[inline]
    pub fn cone_matrix(&self) -> Matrix3x3 {
        self.forward
    }

    /// Adapt an XYZ color from one white point to another
    ///
    /// Computes M⁻¹ × diag(dstLMS / srcLMS) × M × xyz. Callers that want the
    /// exact-identity guarantee for equal white points must skip the call
    /// themselves; the orchestrator does so.
    pub fn transform(
        &self,
        color: CieXyz,
        source_white: &WhitePoint,
        target_white: &WhitePoint,
    ) -> CieXyz {
        let src_lms = self.forward.multiply_vec(source_white.xyz.to_array());
        let dst_lms = self.forward.multiply_vec(target_white.xyz.to_array());

        let lms = self.forward.multiply_vec(color.to_array());
        let scaled = [
            lms[0] * (dst_lms[0] / src_lms[0]),
            lms[1] * (dst_lms[1] / src_lms[1]),
            lms[2] * (dst_lms[2] / src_lms[2]),
        ];

        CieXyz::from_array(self.inverse.multiply_vec(scaled))
    }
}

impl ChromaticAdaptation for VonKriesAdaptation {
    fn transform(
        &self,
        color: CieXyz,
        source_white: &WhitePoint,
        target_white: &WhitePoint,
    ) -> CieXyz {
        VonKriesAdaptation::transform(self, color, source_white, target_white)
    }
}

impl Default for VonKriesAdaptation {
    fn default() -> Self {
        Self::bradford()
    }
}
