//! Color-space conversion orchestrator
//!
//! [`ColorConverter`] routes any-space-to-any-space conversion through the
//! hub space (CIE XYZ), applying chromatic adaptation where the configured
//! white points differ. Configuration is fixed at construction; build a new
//! converter (or one per thread) to change it.
//!
//! Routing, for a conversion S → T:
//! 1. S normalizes to XYZ in its own frame ([`IntoXyz`]), possibly recursing
//!    (Lch → Lab → XYZ), then adapts source-frame → converter white point.
//! 2. The hub value adapts converter white point → destination frame.
//! 3. The pairwise converter parameterized by the destination white point or
//!    working space produces T.
//!
//! Equal white points (exact component equality) skip the adaptation step
//! entirely rather than applying a ratio-of-one transform.

mod sources;
mod targets;

pub use sources::IntoXyz;
pub use targets::FromColor;

use crate::color::white_point;
use crate::color::working_space::{RgbWorkingSpace, SRGB};
use crate::color::{CieXyz, WhitePoint};
use crate::error::{Error, Result};
use crate::math::chromatic_adaptation::{BRADFORD, ChromaticAdaptation, VonKriesAdaptation};
use crate::math::Matrix3x3;

/// Default source white point (D65, matching sRGB)
pub const DEFAULT_WHITE_POINT: WhitePoint = white_point::D65;

/// Builder for [`ColorConverter`]
///
/// All fields default to the sRGB/D65 configuration with Bradford adaptation.
pub struct ColorConverterBuilder {
    white_point: WhitePoint,
    target_lab_white_point: WhitePoint,
    target_rgb_working_space: &'static RgbWorkingSpace,
    lms_adaptation_matrix: Matrix3x3,
    adaptation: AdaptationChoice,
}

enum AdaptationChoice {
    /// Von Kries over the configured LMS matrix
    Default,
    /// No adaptation: white-point mismatches pass through unadapted
    Disabled,
    /// Caller-supplied strategy
    Custom(Box<dyn ChromaticAdaptation + Send + Sync>),
}

impl ColorConverterBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self {
            white_point: DEFAULT_WHITE_POINT,
            target_lab_white_point: DEFAULT_WHITE_POINT,
            target_rgb_working_space: &SRGB,
            lms_adaptation_matrix: BRADFORD,
            adaptation: AdaptationChoice::Default,
        }
    }

    /// Set the source white point assumed for hub-frame XYZ values
    pub fn white_point(mut self, wp: WhitePoint) -> Self {
        self.white_point = wp;
        self
    }

    /// Set the white point attached to created Lab/Lch/Luv/HunterLab colors
    pub fn target_lab_white_point(mut self, wp: WhitePoint) -> Self {
        self.target_lab_white_point = wp;
        self
    }

    /// Set the working space attached to created RGB colors
    pub fn target_rgb_working_space(mut self, space: &'static RgbWorkingSpace) -> Self {
        self.target_rgb_working_space = space;
        self
    }

    /// Set the XYZ → LMS transformation matrix (also the adaptation basis)
    pub fn lms_adaptation_matrix(mut self, matrix: Matrix3x3) -> Self {
        self.lms_adaptation_matrix = matrix;
        self
    }

    /// Disable chromatic adaptation entirely
    ///
    /// White-point mismatches then pass through unadapted; callers relying on
    /// colorimetric correctness must supply matching white points.
    pub fn without_adaptation(mut self) -> Self {
        self.adaptation = AdaptationChoice::Disabled;
        self
    }

    /// Supply a custom adaptation strategy
    pub fn adaptation(mut self, strategy: Box<dyn ChromaticAdaptation + Send + Sync>) -> Self {
        self.adaptation = AdaptationChoice::Custom(strategy);
        self
    }

    /// Build the converter, deriving the cached LMS inverse
    pub fn build(self) -> Result<ColorConverter> {
        let lms_to_xyz = self
            .lms_adaptation_matrix
            .inverse()
            .ok_or(Error::SingularAdaptationMatrix)?;

        let adaptation = match self.adaptation {
            AdaptationChoice::Default => {
                let strategy = VonKriesAdaptation::new(self.lms_adaptation_matrix)
                    .ok_or(Error::SingularAdaptationMatrix)?;
                Some(Box::new(strategy) as Box<dyn ChromaticAdaptation + Send + Sync>)
            }
            AdaptationChoice::Disabled => None,
            AdaptationChoice::Custom(strategy) => Some(strategy),
        };

        Ok(ColorConverter {
            white_point: self.white_point,
            target_lab_white_point: self.target_lab_white_point,
            target_rgb_working_space: self.target_rgb_working_space,
            xyz_to_lms: self.lms_adaptation_matrix,
            lms_to_xyz,
            adaptation,
        })
    }
}

impl Default for ColorConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts between color spaces, adapting white points where configured
///
/// Holds the conversion configuration and the derived LMS matrices. Reads of
/// the configuration happen on every call; the type is immutable after
/// construction, so sharing across threads is safe but cheap per-thread
/// instances are the intended pattern for differing configurations.
pub struct ColorConverter {
    white_point: WhitePoint,
    target_lab_white_point: WhitePoint,
    target_rgb_working_space: &'static RgbWorkingSpace,
    xyz_to_lms: Matrix3x3,
    lms_to_xyz: Matrix3x3,
    adaptation: Option<Box<dyn ChromaticAdaptation + Send + Sync>>,
}

impl ColorConverter {
    /// Create a converter with the default sRGB/D65/Bradford configuration
    pub fn new() -> Self {
        // The default Bradford matrix is invertible
        match ColorConverterBuilder::new().build() {
            Ok(converter) => converter,
            Err(_) => unreachable!("default configuration always builds"),
        }
    }

    /// Start building a custom configuration
    pub fn builder() -> ColorConverterBuilder {
        ColorConverterBuilder::new()
    }

    /// The configured source white point
    #[inline]
    pub fn white_point(&self) -> &WhitePoint {
        &self.white_point
    }

    /// The white point attached to created Lab-family colors
    #[inline]
    pub fn target_lab_white_point(&self) -> &WhitePoint {
        &self.target_lab_white_point
    }

    /// The working space attached to created RGB colors
    #[inline]
    pub fn target_rgb_working_space(&self) -> &'static RgbWorkingSpace {
        self.target_rgb_working_space
    }

    /// The XYZ → LMS transformation matrix
    #[inline]
    pub fn lms_adaptation_matrix(&self) -> &Matrix3x3 {
        &self.xyz_to_lms
    }

    /// The cached LMS → XYZ inverse
    #[inline]
    pub(crate) fn lms_to_xyz_matrix(&self) -> &Matrix3x3 {
        &self.lms_to_xyz
    }

    /// Whether an adaptation strategy is configured
    #[inline]
    pub fn is_adaptation_performed(&self) -> bool {
        self.adaptation.is_some()
    }

    /// Adapt a source-frame XYZ value into the converter's hub frame
    pub(crate) fn adapt_to_hub(&self, xyz: CieXyz, source_white: &WhitePoint) -> CieXyz {
        match &self.adaptation {
            Some(strategy) if !source_white.coords_eq(&self.white_point) => {
                strategy.transform(xyz, source_white, &self.white_point)
            }
            _ => xyz,
        }
    }

    /// Adapt a hub-frame XYZ value into a destination white-point frame
    pub(crate) fn adapt_from_hub(&self, xyz: CieXyz, target_white: &WhitePoint) -> CieXyz {
        match &self.adaptation {
            Some(strategy) if !self.white_point.coords_eq(target_white) => {
                strategy.transform(xyz, &self.white_point, target_white)
            }
            _ => xyz,
        }
    }
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::{D50, D65};

    #[test]
    fn test_default_configuration() {
        let converter = ColorConverter::new();
        assert!(converter.is_adaptation_performed());
        assert!(converter.white_point().coords_eq(&D65));
    }

    #[test]
    fn test_adaptation_skipped_for_equal_white_points() {
        let converter = ColorConverter::new();
        let color = CieXyz::new(0.3, 0.4, 0.5);
        // Exact equality: the strategy must not run at all
        let adapted = converter.adapt_from_hub(color, &D65);
        assert_eq!(adapted, color);
    }

    #[test]
    fn test_adaptation_applies_for_differing_white_points() {
        let converter = ColorConverter::new();
        let color = CieXyz::new(0.3, 0.4, 0.5);
        let adapted = converter.adapt_from_hub(color, &D50);
        assert!(!adapted.approx_eq(&color, 1e-4));
    }

    #[test]
    fn test_disabled_adaptation_passes_through() {
        let converter = ColorConverter::builder()
            .without_adaptation()
            .build()
            .unwrap();
        let color = CieXyz::new(0.3, 0.4, 0.5);
        assert_eq!(converter.adapt_from_hub(color, &D50), color);
    }

    #[test]
    fn test_singular_lms_matrix_rejected() {
        let result = ColorConverter::builder()
            .lms_adaptation_matrix(Matrix3x3::zero())
            .build();
        assert!(matches!(result, Err(Error::SingularAdaptationMatrix)));
    }
}
