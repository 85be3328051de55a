//! # oxpix - Numeric pixel and color-space conversion
//!
//! Colorimetric conversion between device and CIE color spaces, plus the
//! SIMD-accelerated pixel-format plumbing image pipelines need around it.
//!
//! ## Goals
//!
//! - **Correct**: hub-routed conversion through CIE XYZ with Von Kries
//!   chromatic adaptation (Bradford by default)
//! - **Fast**: SIMD kernels (AVX2, SSE4.1, NEON) for packed-pixel and JPEG
//!   planar conversion, bit-identical to the scalar reference
//! - **Safe**: pure Rust, no unsafe pixel casting outside `bytemuck`
//!
//! ## Quick Start
//!
//! ```
//! use oxpix_core::{ColorConverter, Rgb};
//!
//! let converter = ColorConverter::new();
//! let lab = converter.to_lab(Rgb::new(0.2, 0.4, 0.6));
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```
//!
//! Converters are configured once at construction; build one per thread when
//! configurations differ:
//!
//! ```
//! use oxpix_core::color::white_point;
//! use oxpix_core::ColorConverter;
//!
//! let converter = ColorConverter::builder()
//!     .target_lab_white_point(white_point::D50)
//!     .build()
//!     .unwrap();
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod jpeg;
pub mod math;
pub mod pixel;
pub mod simd;

pub use color::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Chromaticity, Cmyk, Hsl, Hsv, HunterLab,
    LinearRgb, Lms, Rgb, RgbWorkingSpace, WhitePoint, YCbCr,
};
pub use convert::{ColorConverter, ColorConverterBuilder, FromColor, IntoXyz};
pub use error::{Error, Result};
pub use jpeg::{ComponentBuffers, JpegColorConverter, JpegColorSpace};
pub use math::{ChromaticAdaptation, Companding, Matrix3x3, VonKriesAdaptation};
pub use pixel::Rgba32;
pub use simd::{SIMD_PACK_THRESHOLD, SimdCapability, rgba32_to_vector4, vector4_to_rgba32};

/// Version of oxpix
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
