//! Mathematical operations for color conversion
//!
//! This module provides the foundational math used throughout oxpix:
//! - 3x3 matrix operations for RGB↔XYZ transforms and cone-response spaces
//! - Companding (transfer function) evaluation
//! - Chromatic adaptation (Von Kries style, Bradford by default)

pub mod chromatic_adaptation;
pub mod companding;
pub mod matrix;

pub use chromatic_adaptation::{
    BRADFORD, BRADFORD_INVERSE, ChromaticAdaptation, VON_KRIES, VON_KRIES_INVERSE,
    VonKriesAdaptation,
};
pub use companding::Companding;
pub use matrix::Matrix3x3;
