//! Colorimetric value types and pairwise conversions
//!
//! One immutable tuple type per color space. Types referenced to a white
//! point (Lab, Lch, Luv, Lchuv, HunterLab) or a working space (Rgb,
//! LinearRgb) carry that tag; the rest are frameless and interpreted in the
//! sRGB / D65 frame. Pairwise converters are methods taking any required
//! white point or matrix explicitly, so they are reusable across differing
//! configurations.

pub mod cmyk;
pub mod hsl;
pub mod hsv;
pub mod hunter_lab;
pub mod lab;
pub mod lch;
pub mod lchuv;
pub mod lms;
pub mod luv;
pub mod rgb;
pub mod white_point;
pub mod working_space;
pub mod xyy;
pub mod xyz;
pub mod ycbcr;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hunter_lab::HunterLab;
pub use lab::CieLab;
pub use lch::CieLch;
pub use lchuv::CieLchuv;
pub use lms::Lms;
pub use luv::CieLuv;
pub use rgb::{LinearRgb, Rgb};
pub use white_point::WhitePoint;
pub use working_space::{Chromaticity, RgbWorkingSpace};
pub use xyy::CieXyy;
pub use xyz::CieXyz;
pub use ycbcr::YCbCr;
