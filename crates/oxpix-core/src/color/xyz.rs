//! CIE XYZ Color Space
//!
//! XYZ is the hub space: every cross-space conversion in the engine is routed
//! through it.

use std::ops::{Add, Mul, Sub};

/// CIE 1931 XYZ color coordinates
///
/// The XYZ color space is device-independent and encompasses all colors
/// visible to the human eye. Y represents luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieXyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f32,
    /// Y tristimulus value (luminance)
    pub y: f32,
    /// Z tristimulus value (roughly blue)
    pub z: f32,
}

impl CieXyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f32 {
        self.y
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f32; 3]> for CieXyz {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<CieXyz> for [f32; 3] {
    fn from(xyz: CieXyz) -> Self {
        xyz.to_array()
    }
}

impl Add for CieXyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for CieXyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32> for CieXyz {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}
