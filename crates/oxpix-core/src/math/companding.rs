//! Companding (transfer function) evaluation
//!
//! An RGB working space pairs its primaries with a companding function that
//! maps between linear-light and encoded (companded) channel values.
//!
//! Supported compandings:
//! - sRGB piecewise curve (IEC 61966-2-1)
//! - Pure power-law gamma (Adobe RGB, ProPhoto, Rec. 2020 approximations)
//! - L* companding (CIE lightness, used by e.g. ECI RGB)

/// Companding function attached to an RGB working space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companding {
    /// sRGB piecewise linear/power curve
    SRgb,
    /// Pure power-law gamma with the given exponent
    Gamma(f32),
    /// L* companding based on the CIE lightness function
    LStar,
}

// CIE constants shared with the Lab conversion: ε = 216/24389, κ = 24389/27
const CIE_EPSILON: f32 = 216.0 / 24389.0;
const CIE_KAPPA: f32 = 24389.0 / 27.0;

impl Companding {
    /// Expand a companded channel value to linear light
    #[inline]
    pub fn expand(&self, channel: f32) -> f32 {
        match *self {
            Self::SRgb => {
                if channel <= 0.04045 {
                    channel / 12.92
                } else {
                    ((channel + 0.055) / 1.055).powf(2.4)
                }
            }
            Self::Gamma(gamma) => channel.powf(gamma),
            Self::LStar => {
                if channel <= 0.08 {
                    100.0 * channel / CIE_KAPPA
                } else {
                    let f = (channel * 100.0 + 16.0) / 116.0;
                    f * f * f
                }
            }
        }
    }

    /// Compress a linear-light channel value to its companded form
    #[inline]
    pub fn compress(&self, channel: f32) -> f32 {
        match *self {
            Self::SRgb => {
                if channel <= 0.0031308 {
                    12.92 * channel
                } else {
                    1.055 * channel.powf(1.0 / 2.4) - 0.055
                }
            }
            Self::Gamma(gamma) => channel.powf(1.0 / gamma),
            Self::LStar => {
                if channel <= CIE_EPSILON {
                    channel * CIE_KAPPA / 100.0
                } else {
                    1.16 * channel.cbrt() - 0.16
                }
            }
        }
    }
}
