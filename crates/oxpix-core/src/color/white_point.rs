//! CIE Standard Illuminant White Points
//!
//! White points define the color of "white" for a given illuminant, given as
//! CIE XYZ coordinates with Y normalized to 1.0. Lab/Lch/Luv/HunterLab values
//! are meaningless without one, and chromatic adaptation maps between them.

use crate::color::CieXyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: CieXyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f32, y: f32, z: f32) -> Self {
        Self {
            name,
            xyz: CieXyz::new(x, y, z),
        }
    }

    /// Exact component equality, used to decide whether adaptation can be skipped
    ///
    /// Deliberately not epsilon-tolerant: near-equal white points still adapt.
    #[inline]
    pub fn coords_eq(&self, other: &WhitePoint) -> bool {
        self.xyz.x == other.xyz.x && self.xyz.y == other.xyz.y && self.xyz.z == other.xyz.z
    }
}

/// CIE Standard Illuminant A (Incandescent, ~2856K)
pub const A: WhitePoint = WhitePoint::new("A", 1.09850, 1.0, 0.35585);

/// CIE Standard Illuminant B (Direct sunlight, ~4874K)
pub const B: WhitePoint = WhitePoint::new("B", 0.99072, 1.0, 0.85223);

/// CIE Standard Illuminant C (Average sky daylight, ~6774K)
///
/// HunterLab's historical reference illuminant.
pub const C: WhitePoint = WhitePoint::new("C", 0.98074, 1.0, 1.18232);

/// CIE Standard Illuminant D50 (Horizon light, ~5003K)
///
/// ICC profile connection space white point.
pub const D50: WhitePoint = WhitePoint::new("D50", 0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (Mid-morning daylight, ~5500K)
pub const D55: WhitePoint = WhitePoint::new("D55", 0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D65 (Noon daylight, ~6504K)
///
/// Standard white point for sRGB and most display color spaces, and the
/// default conversion white point of the engine.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.9505, 1.0, 1.0890);

/// CIE Standard Illuminant D75 (North sky daylight, ~7500K)
pub const D75: WhitePoint = WhitePoint::new("D75", 0.94972, 1.0, 1.22638);

/// CIE Standard Illuminant E (Equal energy)
pub const E: WhitePoint = WhitePoint::new("E", 1.0, 1.0, 1.0);

/// CIE Standard Illuminant F2 (Cool white fluorescent)
pub const F2: WhitePoint = WhitePoint::new("F2", 0.99186, 1.0, 0.67393);

/// CIE Standard Illuminant F7 (Broadband daylight fluorescent)
pub const F7: WhitePoint = WhitePoint::new("F7", 0.95041, 1.0, 1.08747);

/// CIE Standard Illuminant F11 (Narrow band white fluorescent)
pub const F11: WhitePoint = WhitePoint::new("F11", 1.00962, 1.0, 0.64350);
