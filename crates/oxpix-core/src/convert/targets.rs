//! Conversion entry points: hub → every target space, single-value and bulk
//!
//! The single-value `to_*` methods implement the routing described in the
//! module docs. The bulk form validates both buffer lengths eagerly (no
//! partial writes on failure), then converts the first `count` elements
//! independently and in order; it is the insertion point for future
//! parallelization.

use multiversion::multiversion;

use crate::color::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, LinearRgb, Lms,
    Rgb, YCbCr,
};
use crate::convert::{ColorConverter, IntoXyz};
use crate::error::{Result, check_len};

impl ColorConverter {
    /// Convert any color into hub-frame XYZ
    #[inline]
    pub fn to_xyz(&self, color: impl IntoXyz) -> CieXyz {
        color.into_xyz(self)
    }

    /// Convert any color into xyY
    pub fn to_xyy(&self, color: impl IntoXyz) -> CieXyy {
        CieXyy::from_xyz(color.into_xyz(self))
    }

    /// Convert any color into Lab, referenced to the target Lab white point
    pub fn to_lab(&self, color: impl IntoXyz) -> CieLab {
        let xyz = color.into_xyz(self);
        let adapted = self.adapt_from_hub(xyz, self.target_lab_white_point());
        CieLab::from_xyz(adapted, *self.target_lab_white_point())
    }

    /// Convert any color into LCh(ab), referenced to the target Lab white point
    pub fn to_lch(&self, color: impl IntoXyz) -> CieLch {
        CieLch::from_lab(self.to_lab(color))
    }

    /// Convert any color into Luv, referenced to the target Lab white point
    pub fn to_luv(&self, color: impl IntoXyz) -> CieLuv {
        let xyz = color.into_xyz(self);
        let adapted = self.adapt_from_hub(xyz, self.target_lab_white_point());
        CieLuv::from_xyz(adapted, *self.target_lab_white_point())
    }

    /// Convert any color into LCh(uv), referenced to the target Lab white point
    pub fn to_lchuv(&self, color: impl IntoXyz) -> CieLchuv {
        CieLchuv::from_luv(self.to_luv(color))
    }

    /// Convert any color into Hunter Lab, referenced to the target Lab white point
    pub fn to_hunter_lab(&self, color: impl IntoXyz) -> HunterLab {
        let xyz = color.into_xyz(self);
        let adapted = self.adapt_from_hub(xyz, self.target_lab_white_point());
        HunterLab::from_xyz(adapted, *self.target_lab_white_point())
    }

    /// Convert any color into LMS via the configured transformation matrix
    pub fn to_lms(&self, color: impl IntoXyz) -> Lms {
        Lms::from_xyz(color.into_xyz(self), self.lms_adaptation_matrix())
    }

    /// Convert any color into linear RGB in the target working space
    pub fn to_linear_rgb(&self, color: impl IntoXyz) -> LinearRgb {
        let space = self.target_rgb_working_space();
        let xyz = color.into_xyz(self);
        let adapted = self.adapt_from_hub(xyz, &space.white_point);
        LinearRgb::from_xyz(adapted, space)
    }

    /// Convert any color into companded RGB in the target working space
    pub fn to_rgb(&self, color: impl IntoXyz) -> Rgb {
        self.to_linear_rgb(color).to_companded()
    }

    /// Convert any color into HSL
    pub fn to_hsl(&self, color: impl IntoXyz) -> Hsl {
        Hsl::from_rgb(self.to_rgb(color))
    }

    /// Convert any color into HSV
    pub fn to_hsv(&self, color: impl IntoXyz) -> Hsv {
        Hsv::from_rgb(self.to_rgb(color))
    }

    /// Convert any color into CMYK
    pub fn to_cmyk(&self, color: impl IntoXyz) -> Cmyk {
        Cmyk::from_rgb(self.to_rgb(color))
    }

    /// Convert any color into YCbCr
    pub fn to_ycbcr(&self, color: impl IntoXyz) -> YCbCr {
        YCbCr::from_rgb(self.to_rgb(color))
    }

    /// Bulk conversion: the first `count` elements of `source` into `destination`
    ///
    /// Both buffers must hold at least `count` elements; on violation nothing
    /// is written. Elements beyond `count` are left untouched.
    pub fn convert_slice<S, D>(
        &self,
        source: &[S],
        destination: &mut [D],
        count: usize,
    ) -> Result<()>
    where
        S: Copy,
        D: FromColor<S>,
    {
        check_len(source, "source", count)?;
        check_len(destination, "destination", count)?;
        convert_elements(self, &source[..count], &mut destination[..count]);
        Ok(())
    }
}

/// A target space constructible from a source color through a converter
///
/// Implemented once per target over every hub-normalizable source, giving the
/// full (source, target) conversion grid.
pub trait FromColor<S>: Sized {
    /// Convert `color` using the converter's configuration
    fn from_color(converter: &ColorConverter, color: S) -> Self;
}

macro_rules! impl_from_color {
    ($($target:ty => $method:ident),+ $(,)?) => {
        $(
            impl<S: IntoXyz> FromColor<S> for $target {
                #[inline]
                fn from_color(converter: &ColorConverter, color: S) -> Self {
                    converter.$method(color)
                }
            }
        )+
    };
}

impl_from_color! {
    CieXyz => to_xyz,
    CieXyy => to_xyy,
    CieLab => to_lab,
    CieLch => to_lch,
    CieLuv => to_luv,
    CieLchuv => to_lchuv,
    HunterLab => to_hunter_lab,
    Lms => to_lms,
    LinearRgb => to_linear_rgb,
    Rgb => to_rgb,
    Hsl => to_hsl,
    Hsv => to_hsv,
    Cmyk => to_cmyk,
    YCbCr => to_ycbcr,
}

/// Element loop behind `convert_slice`, multiversioned for auto-vectorization
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon"))]
fn convert_elements<S, D>(converter: &ColorConverter, source: &[S], destination: &mut [D])
where
    S: Copy,
    D: FromColor<S>,
{
    for (src, dst) in source.iter().zip(destination.iter_mut()) {
        *dst = D::from_color(converter, *src);
    }
}
