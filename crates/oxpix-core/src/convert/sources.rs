//! Hub normalization: every source space → CIE XYZ
//!
//! Types carrying a white point or working space convert in their own frame
//! first, then adapt into the converter's hub frame. Frameless types (xyY,
//! LMS) and hub values are taken as already being in the hub frame.

use crate::color::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, LinearRgb, Lms,
    Rgb, YCbCr,
};
use crate::convert::ColorConverter;

/// A color that can be normalized into the hub space (CIE XYZ)
pub trait IntoXyz {
    /// Convert into hub-frame XYZ, adapting from the value's own white point
    /// where the converter is configured to do so
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz;
}

impl IntoXyz for CieXyz {
    #[inline]
    fn into_xyz(self, _converter: &ColorConverter) -> CieXyz {
        self
    }
}

impl IntoXyz for CieXyy {
    #[inline]
    fn into_xyz(self, _converter: &ColorConverter) -> CieXyz {
        self.to_xyz()
    }
}

impl IntoXyz for CieLab {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        let white_point = self.white_point;
        converter.adapt_to_hub(self.to_xyz(), &white_point)
    }
}

impl IntoXyz for CieLch {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_lab().into_xyz(converter)
    }
}

impl IntoXyz for CieLuv {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        let white_point = self.white_point;
        converter.adapt_to_hub(self.to_xyz(), &white_point)
    }
}

impl IntoXyz for CieLchuv {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_luv().into_xyz(converter)
    }
}

impl IntoXyz for HunterLab {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        let white_point = self.white_point;
        converter.adapt_to_hub(self.to_xyz(), &white_point)
    }
}

impl IntoXyz for Lms {
    #[inline]
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_xyz(converter.lms_to_xyz_matrix())
    }
}

impl IntoXyz for LinearRgb {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        let white_point = self.space.white_point;
        converter.adapt_to_hub(self.to_xyz(), &white_point)
    }
}

impl IntoXyz for Rgb {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_linear().into_xyz(converter)
    }
}

impl IntoXyz for Hsl {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_rgb().into_xyz(converter)
    }
}

impl IntoXyz for Hsv {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_rgb().into_xyz(converter)
    }
}

impl IntoXyz for Cmyk {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_rgb().into_xyz(converter)
    }
}

impl IntoXyz for YCbCr {
    fn into_xyz(self, converter: &ColorConverter) -> CieXyz {
        self.to_rgb().into_xyz(converter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::D65;

    #[test]
    fn test_xyz_is_identity() {
        let converter = ColorConverter::new();
        let xyz = CieXyz::new(0.2, 0.3, 0.4);
        assert_eq!(xyz.into_xyz(&converter), xyz);
    }

    #[test]
    fn test_lch_recurses_through_lab() {
        let converter = ColorConverter::new();
        let lch = CieLch::new(55.0, 40.0, 120.0);
        let via_lab = lch.to_lab().into_xyz(&converter);
        let direct = lch.into_xyz(&converter);
        assert!(via_lab.approx_eq(&direct, 1e-6));
    }

    #[test]
    fn test_srgb_white_normalizes_to_d65() {
        let converter = ColorConverter::new();
        let xyz = Rgb::new(1.0, 1.0, 1.0).into_xyz(&converter);
        assert!(xyz.approx_eq(&D65.xyz, 1e-3));
    }
}
