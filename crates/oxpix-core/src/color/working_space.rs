//! RGB Working Spaces
//!
//! A working space defines how RGB channel values are interpreted: the
//! chromaticities of its three primaries, its reference white point, and the
//! companding function that maps between encoded and linear-light values.
//!
//! Matrices for the built-in spaces are pre-populated constants; custom
//! spaces can derive them from primaries via [`RgbWorkingSpace::from_primaries`].

use crate::color::white_point::{self, WhitePoint};
use crate::error::{Error, Result};
use crate::math::{Companding, Matrix3x3};

/// CIE xy chromaticity coordinates of a primary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
}

impl Chromaticity {
    /// Create new chromaticity coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGB working space definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbWorkingSpace {
    /// Name of the working space
    pub name: &'static str,
    /// Reference white point
    pub white_point: WhitePoint,
    /// Companding function
    pub companding: Companding,
    /// Red primary chromaticity
    pub red: Chromaticity,
    /// Green primary chromaticity
    pub green: Chromaticity,
    /// Blue primary chromaticity
    pub blue: Chromaticity,
    /// Linear RGB → XYZ matrix
    pub xyz_matrix: Matrix3x3,
    /// XYZ → linear RGB matrix
    pub inverse_xyz_matrix: Matrix3x3,
}

impl RgbWorkingSpace {
    /// Derive a working space from primaries, white point and companding
    ///
    /// Builds the RGB→XYZ matrix by scaling the primary columns so that
    /// RGB (1,1,1) maps exactly onto the white point.
    pub fn from_primaries(
        name: &'static str,
        white_point: WhitePoint,
        companding: Companding,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
    ) -> Result<Self> {
        // Columns of unscaled primary tristimulus values (Y = 1 per primary)
        let col = |c: Chromaticity| -> [f32; 3] {
            [c.x / c.y, 1.0, (1.0 - c.x - c.y) / c.y]
        };
        let r = col(red);
        let g = col(green);
        let b = col(blue);

        let unscaled = Matrix3x3::new([
            [r[0], g[0], b[0]],
            [r[1], g[1], b[1]],
            [r[2], g[2], b[2]],
        ]);

        let unscaled_inv = unscaled
            .inverse()
            .ok_or(Error::DegeneratePrimaries(name))?;
        let s = unscaled_inv.multiply_vec(white_point.xyz.to_array());

        let xyz_matrix = Matrix3x3::new([
            [s[0] * r[0], s[1] * g[0], s[2] * b[0]],
            [s[0] * r[1], s[1] * g[1], s[2] * b[1]],
            [s[0] * r[2], s[1] * g[2], s[2] * b[2]],
        ]);
        let inverse_xyz_matrix = xyz_matrix
            .inverse()
            .ok_or(Error::DegeneratePrimaries(name))?;

        Ok(Self {
            name,
            white_point,
            companding,
            red,
            green,
            blue,
            xyz_matrix,
            inverse_xyz_matrix,
        })
    }
}

/// sRGB working space (D65)
///
/// IEC 61966-2-1 primaries; the matrix maps RGB (1,1,1) exactly onto [`white_point::D65`].
pub static SRGB: RgbWorkingSpace = RgbWorkingSpace {
    name: "sRGB",
    white_point: white_point::D65,
    companding: Companding::SRgb,
    red: Chromaticity::new(0.6400, 0.3300),
    green: Chromaticity::new(0.3000, 0.6000),
    blue: Chromaticity::new(0.1500, 0.0600),
    xyz_matrix: Matrix3x3::new([
        [0.4124616, 0.3575682, 0.1804702],
        [0.2126755, 0.7151364, 0.0721881],
        [0.0193341, 0.1191894, 0.9504765],
    ]),
    inverse_xyz_matrix: Matrix3x3::new([
        [3.2404138, -1.5371194, -0.4985252],
        [-0.9692874, 1.8760521, 0.0415569],
        [0.0556333, -0.2039889, 1.0570334],
    ]),
};

/// Adobe RGB (1998) working space (D65, gamma 563/256)
pub static ADOBE_RGB_1998: RgbWorkingSpace = RgbWorkingSpace {
    name: "Adobe RGB (1998)",
    white_point: white_point::D65,
    companding: Companding::Gamma(2.19921875),
    red: Chromaticity::new(0.6400, 0.3300),
    green: Chromaticity::new(0.2100, 0.7100),
    blue: Chromaticity::new(0.1500, 0.0600),
    xyz_matrix: Matrix3x3::new([
        [0.5767324, 0.1855499, 0.1882177],
        [0.2973776, 0.6273353, 0.0752871],
        [0.0270343, 0.0706857, 0.9912800],
    ]),
    inverse_xyz_matrix: Matrix3x3::new([
        [2.0413636, -0.5649449, -0.3446935],
        [-0.9692874, 1.8760521, 0.0415569],
        [0.0134451, -0.1183693, 1.0152339],
    ]),
};

/// ProPhoto RGB working space (D50, gamma 1.8)
pub static PRO_PHOTO_RGB: RgbWorkingSpace = RgbWorkingSpace {
    name: "ProPhoto RGB",
    white_point: white_point::D50,
    companding: Companding::Gamma(1.8),
    red: Chromaticity::new(0.7347, 0.2653),
    green: Chromaticity::new(0.1596, 0.8404),
    blue: Chromaticity::new(0.0366, 0.0001),
    xyz_matrix: Matrix3x3::new([
        [0.7976749, 0.1351917, 0.0313534],
        [0.2880402, 0.7118741, 0.0000857],
        [0.0000000, 0.0000000, 0.8252100],
    ]),
    inverse_xyz_matrix: Matrix3x3::new([
        [1.3459433, -0.2556075, -0.0511118],
        [-0.5445989, 1.5081673, 0.0205351],
        [0.0000000, 0.0000000, 1.2118128],
    ]),
};

/// Rec. 2020 working space (D65)
///
/// Uses a pure-gamma approximation of the BT.2020 transfer curve.
pub static REC_2020: RgbWorkingSpace = RgbWorkingSpace {
    name: "Rec. 2020",
    white_point: white_point::D65,
    companding: Companding::Gamma(2.4),
    red: Chromaticity::new(0.7080, 0.2920),
    green: Chromaticity::new(0.1700, 0.7970),
    blue: Chromaticity::new(0.1310, 0.0460),
    xyz_matrix: Matrix3x3::new([
        [0.6370156, 0.1446125, 0.1688719],
        [0.2627239, 0.6779775, 0.0592985],
        [0.0000000, 0.0280718, 1.0609282],
    ]),
    inverse_xyz_matrix: Matrix3x3::new([
        [1.7164962, -0.3556387, -0.2533434],
        [-0.6667045, 1.6165302, 0.0157690],
        [0.0176408, -0.0427729, 0.9421536],
    ]),
};
