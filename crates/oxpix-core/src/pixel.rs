//! Packed pixel formats
//!
//! [`Rgba32`] is the 4-byte packed pixel record; its normalized form is a
//! 4-component float vector with channels in [0, 1]. The scalar conversion
//! functions here are the oracle for the SIMD bulk paths in `simd::pack`:
//! both use the same multiply-by-reciprocal normalize and round-ties-even
//! saturating denormalize, so every element is bit-identical regardless of
//! which path produced it.

use bytemuck::{Pod, Zeroable};

/// Reciprocal used for byte → float normalization (shared with the SIMD kernels)
pub(crate) const INV_255: f32 = 1.0 / 255.0;

/// Denormalize one channel: round to nearest, saturate to 0..=255
///
/// Shared between the scalar path and the SIMD store side so both produce
/// bit-identical bytes. NaN saturates to 0.
#[inline]
pub(crate) fn pack_component(c: f32) -> u8 {
    (c * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// A packed 32-bit RGBA pixel (one byte per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba32 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba32 {
    /// Create a new packed pixel
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Unpack to a normalized float vector (channels in [0, 1], alpha included)
    #[inline]
    pub fn to_vector4(self) -> [f32; 4] {
        [
            self.r as f32 * INV_255,
            self.g as f32 * INV_255,
            self.b as f32 * INV_255,
            self.a as f32 * INV_255,
        ]
    }

    /// Pack from a normalized float vector, rounding to nearest and saturating
    ///
    /// Out-of-range components clamp to 0 or 255; they never wrap.
    #[inline]
    pub fn from_vector4(v: [f32; 4]) -> Self {
        Self {
            r: pack_component(v[0]),
            g: pack_component(v[1]),
            b: pack_component(v[2]),
            a: pack_component(v[3]),
        }
    }
}
