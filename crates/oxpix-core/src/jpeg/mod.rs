//! JPEG planar color conversion
//!
//! Decoded JPEG component planes (Y/Cb/Cr, inverted CMYK, YCCK, grayscale)
//! convert to and from normalized RGB without interleaving. Forward
//! conversion is in place over the component planes; inverse conversion
//! reads separate RGB lanes and overwrites the planes.
//!
//! [`JpegColorConverter`] derives its value range from the coding precision
//! and picks a kernel per call: the 8-lane kernel when the element count
//! tiles 256-bit vectors and AVX2 is up, the 4-lane kernel when it tiles
//! 128-bit vectors, the scalar kernel otherwise. The scalar kernel is the
//! correctness oracle for both vector widths.

mod cmyk;
mod gray;
mod ycbcr;
mod ycck;

use wide::{f32x4, f32x8};

use crate::error::{Error, Result, check_len};
use crate::simd::SimdCapability;

/// Load a 4-lane vector from a slice of at least 4 elements
#[inline]
pub(crate) fn load4(chunk: &[f32]) -> f32x4 {
    f32x4::from([chunk[0], chunk[1], chunk[2], chunk[3]])
}

/// Load an 8-lane vector from a slice of at least 8 elements
#[inline]
pub(crate) fn load8(chunk: &[f32]) -> f32x8 {
    f32x8::from([
        chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
    ])
}

/// Store a 4-lane vector into a slice of exactly 4 elements
#[inline]
pub(crate) fn store4(chunk: &mut [f32], value: f32x4) {
    chunk.copy_from_slice(&value.to_array());
}

/// Store an 8-lane vector into a slice of exactly 8 elements
#[inline]
pub(crate) fn store8(chunk: &mut [f32], value: f32x8) {
    chunk.copy_from_slice(&value.to_array());
}

// ITU-R BT.601 reconstruction coefficients
pub(crate) const R_CR: f32 = 1.402;
pub(crate) const G_CB: f32 = 0.344_136;
pub(crate) const G_CR: f32 = 0.714_136;
pub(crate) const B_CB: f32 = 1.772;

// ITU-R BT.601 forward coefficients
pub(crate) const Y_R: f32 = 0.299;
pub(crate) const Y_G: f32 = 0.587;
pub(crate) const Y_B: f32 = 0.114;
pub(crate) const CB_R: f32 = 0.168_736;
pub(crate) const CB_G: f32 = 0.331_264;
pub(crate) const CB_B: f32 = 0.5;
pub(crate) const CR_R: f32 = 0.5;
pub(crate) const CR_G: f32 = 0.418_688;
pub(crate) const CR_B: f32 = 0.081_312;

/// Color space of the coded JPEG components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegColorSpace {
    /// Three components, BT.601 luma/chroma
    YCbCr,
    /// Four components: BT.601 over inverted CMY, plus the key plane
    Ycck,
    /// Four components, inverted storage (Adobe convention)
    Cmyk,
    /// Single luminance component
    Grayscale,
}

impl JpegColorSpace {
    /// Number of component planes the space carries
    #[inline]
    pub const fn component_count(self) -> usize {
        match self {
            JpegColorSpace::YCbCr => 3,
            JpegColorSpace::Ycck | JpegColorSpace::Cmyk => 4,
            JpegColorSpace::Grayscale => 1,
        }
    }
}

/// Up to four planar component buffers sharing one logical element count
///
/// Planes a color space does not use stay empty. Constructors validate that
/// every supplied plane can hold `count` samples.
#[derive(Debug)]
pub struct ComponentBuffers<'a> {
    components: [&'a mut [f32]; 4],
    count: usize,
}

impl<'a> ComponentBuffers<'a> {
    /// A single-plane buffer set (grayscale)
    pub fn single(c0: &'a mut [f32], count: usize) -> Result<Self> {
        Self::build([c0, &mut [], &mut [], &mut []], 1, count)
    }

    /// A three-plane buffer set (YCbCr)
    pub fn three(
        c0: &'a mut [f32],
        c1: &'a mut [f32],
        c2: &'a mut [f32],
        count: usize,
    ) -> Result<Self> {
        Self::build([c0, c1, c2, &mut []], 3, count)
    }

    /// A four-plane buffer set (CMYK, YCCK)
    pub fn four(
        c0: &'a mut [f32],
        c1: &'a mut [f32],
        c2: &'a mut [f32],
        c3: &'a mut [f32],
        count: usize,
    ) -> Result<Self> {
        Self::build([c0, c1, c2, c3], 4, count)
    }

    fn build(components: [&'a mut [f32]; 4], active: usize, count: usize) -> Result<Self> {
        for (index, component) in components.iter().enumerate().take(active) {
            if component.len() < count {
                return Err(Error::ComponentTooSmall {
                    component: index,
                    count,
                    actual: component.len(),
                });
            }
        }
        Ok(Self { components, count })
    }

    /// Logical element count shared by all active planes
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Read access to one component plane, truncated to the logical count
    pub fn component(&self, index: usize) -> &[f32] {
        &self.components[index][..self.count.min(self.components[index].len())]
    }

    fn plane(&mut self) -> &mut [f32] {
        let count = self.count;
        &mut self.components[0][..count]
    }

    fn planes3(&mut self) -> (&mut [f32], &mut [f32], &mut [f32]) {
        let count = self.count;
        let [c0, c1, c2, _] = &mut self.components;
        (&mut c0[..count], &mut c1[..count], &mut c2[..count])
    }

    #[allow(clippy::type_complexity)]
    fn planes4(&mut self) -> (&mut [f32], &mut [f32], &mut [f32], &mut [f32]) {
        let count = self.count;
        let [c0, c1, c2, c3] = &mut self.components;
        (
            &mut c0[..count],
            &mut c1[..count],
            &mut c2[..count],
            &mut c3[..count],
        )
    }
}

/// Kernel width chosen for one conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kernel {
    Scalar,
    Lanes4,
    Lanes8,
}

/// Converts JPEG component planes to and from normalized RGB
///
/// The value range follows the coding precision: `maximum_value = 2^p − 1`,
/// `half_value = 2^(p−1)` (255/128 for baseline 8-bit, 4095/2048 for 12-bit).
#[derive(Debug, Clone, Copy)]
pub struct JpegColorConverter {
    color_space: JpegColorSpace,
    precision: u8,
    maximum_value: f32,
    half_value: f32,
}

impl JpegColorConverter {
    /// Create a converter for `color_space` at `precision` bits per sample
    pub fn new(color_space: JpegColorSpace, precision: u8) -> Self {
        debug_assert!((1..=16).contains(&precision));
        Self {
            color_space,
            precision,
            maximum_value: ((1u32 << precision) - 1) as f32,
            half_value: (1u32 << (precision - 1)) as f32,
        }
    }

    /// The coded color space
    #[inline]
    pub fn color_space(&self) -> JpegColorSpace {
        self.color_space
    }

    /// Coding precision in bits per sample
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Largest coded sample value (`2^p − 1`)
    #[inline]
    pub fn maximum_value(&self) -> f32 {
        self.maximum_value
    }

    /// Chroma center value (`2^(p−1)`)
    #[inline]
    pub fn half_value(&self) -> f32 {
        self.half_value
    }

    /// Convert the component planes to normalized RGB, in place
    ///
    /// On return the first three planes hold R, G, B in [0, 1] (grayscale
    /// holds the replicated luminance in plane 0 only).
    pub fn convert_to_rgb_in_place(&self, buffers: &mut ComponentBuffers<'_>) -> Result<()> {
        self.validate(buffers)?;
        let kernel = self.select_kernel(buffers.count());
        match self.color_space {
            JpegColorSpace::YCbCr => {
                let (c0, c1, c2) = buffers.planes3();
                match kernel {
                    Kernel::Scalar => {
                        ycbcr::to_rgb_scalar(c0, c1, c2, self.maximum_value, self.half_value)
                    }
                    Kernel::Lanes4 => {
                        ycbcr::to_rgb_f32x4(c0, c1, c2, self.maximum_value, self.half_value)
                    }
                    Kernel::Lanes8 => {
                        ycbcr::to_rgb_f32x8(c0, c1, c2, self.maximum_value, self.half_value)
                    }
                }
            }
            JpegColorSpace::Ycck => {
                let (c0, c1, c2, c3) = buffers.planes4();
                match kernel {
                    Kernel::Scalar => {
                        ycck::to_rgb_scalar(c0, c1, c2, c3, self.maximum_value, self.half_value)
                    }
                    Kernel::Lanes4 => {
                        ycck::to_rgb_f32x4(c0, c1, c2, c3, self.maximum_value, self.half_value)
                    }
                    Kernel::Lanes8 => {
                        ycck::to_rgb_f32x8(c0, c1, c2, c3, self.maximum_value, self.half_value)
                    }
                }
            }
            JpegColorSpace::Cmyk => {
                let (c0, c1, c2, c3) = buffers.planes4();
                match kernel {
                    Kernel::Scalar => cmyk::to_rgb_scalar(c0, c1, c2, c3, self.maximum_value),
                    Kernel::Lanes4 => cmyk::to_rgb_f32x4(c0, c1, c2, c3, self.maximum_value),
                    Kernel::Lanes8 => cmyk::to_rgb_f32x8(c0, c1, c2, c3, self.maximum_value),
                }
            }
            JpegColorSpace::Grayscale => {
                let c0 = buffers.plane();
                match kernel {
                    Kernel::Scalar => gray::to_rgb_scalar(c0, self.maximum_value),
                    Kernel::Lanes4 => gray::to_rgb_f32x4(c0, self.maximum_value),
                    Kernel::Lanes8 => gray::to_rgb_f32x8(c0, self.maximum_value),
                }
            }
        }
        Ok(())
    }

    /// Convert separate normalized RGB lanes into the component planes
    ///
    /// The RGB lanes must each hold at least `buffers.count()` samples; on
    /// violation nothing is written.
    pub fn convert_from_rgb(
        &self,
        buffers: &mut ComponentBuffers<'_>,
        r_lane: &[f32],
        g_lane: &[f32],
        b_lane: &[f32],
    ) -> Result<()> {
        self.validate(buffers)?;
        let count = buffers.count();
        check_len(r_lane, "r_lane", count)?;
        check_len(g_lane, "g_lane", count)?;
        check_len(b_lane, "b_lane", count)?;
        let r_lane = &r_lane[..count];
        let g_lane = &g_lane[..count];
        let b_lane = &b_lane[..count];

        let kernel = self.select_kernel(count);
        match self.color_space {
            JpegColorSpace::YCbCr => {
                let (c0, c1, c2) = buffers.planes3();
                let args = (c0, c1, c2, r_lane, g_lane, b_lane);
                match kernel {
                    Kernel::Scalar => ycbcr::from_rgb_scalar(args, self.maximum_value, self.half_value),
                    Kernel::Lanes4 => ycbcr::from_rgb_f32x4(args, self.maximum_value, self.half_value),
                    Kernel::Lanes8 => ycbcr::from_rgb_f32x8(args, self.maximum_value, self.half_value),
                }
            }
            JpegColorSpace::Ycck => {
                let (c0, c1, c2, c3) = buffers.planes4();
                let args = (c0, c1, c2, c3, r_lane, g_lane, b_lane);
                match kernel {
                    Kernel::Scalar => ycck::from_rgb_scalar(args, self.maximum_value, self.half_value),
                    Kernel::Lanes4 => ycck::from_rgb_f32x4(args, self.maximum_value, self.half_value),
                    Kernel::Lanes8 => ycck::from_rgb_f32x8(args, self.maximum_value, self.half_value),
                }
            }
            JpegColorSpace::Cmyk => {
                let (c0, c1, c2, c3) = buffers.planes4();
                let args = (c0, c1, c2, c3, r_lane, g_lane, b_lane);
                match kernel {
                    Kernel::Scalar => cmyk::from_rgb_scalar(args, self.maximum_value),
                    Kernel::Lanes4 => cmyk::from_rgb_f32x4(args, self.maximum_value),
                    Kernel::Lanes8 => cmyk::from_rgb_f32x8(args, self.maximum_value),
                }
            }
            JpegColorSpace::Grayscale => {
                let c0 = buffers.plane();
                match kernel {
                    Kernel::Scalar => {
                        gray::from_rgb_scalar(c0, r_lane, g_lane, b_lane, self.maximum_value)
                    }
                    Kernel::Lanes4 => {
                        gray::from_rgb_f32x4(c0, r_lane, g_lane, b_lane, self.maximum_value)
                    }
                    Kernel::Lanes8 => {
                        gray::from_rgb_f32x8(c0, r_lane, g_lane, b_lane, self.maximum_value)
                    }
                }
            }
        }
        Ok(())
    }

    /// Forward conversion with a caller-supplied profile transform
    ///
    /// The transform mutates the coded planes first (profile application
    /// itself lives with the caller); conversion then always runs the scalar
    /// kernel so the output is deterministic across CPUs.
    pub fn convert_to_rgb_in_place_with_icc<F>(
        &self,
        buffers: &mut ComponentBuffers<'_>,
        transform: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut ComponentBuffers<'_>),
    {
        self.validate(buffers)?;
        transform(buffers);
        match self.color_space {
            JpegColorSpace::YCbCr => {
                let (c0, c1, c2) = buffers.planes3();
                ycbcr::to_rgb_scalar(c0, c1, c2, self.maximum_value, self.half_value);
            }
            JpegColorSpace::Ycck => {
                let (c0, c1, c2, c3) = buffers.planes4();
                ycck::to_rgb_scalar(c0, c1, c2, c3, self.maximum_value, self.half_value);
            }
            JpegColorSpace::Cmyk => {
                let (c0, c1, c2, c3) = buffers.planes4();
                cmyk::to_rgb_scalar(c0, c1, c2, c3, self.maximum_value);
            }
            JpegColorSpace::Grayscale => {
                gray::to_rgb_scalar(buffers.plane(), self.maximum_value);
            }
        }
        Ok(())
    }

    /// Check that every plane the color space needs can hold the count
    fn validate(&self, buffers: &ComponentBuffers<'_>) -> Result<()> {
        for index in 0..self.color_space.component_count() {
            let actual = buffers.components[index].len();
            if actual < buffers.count {
                return Err(Error::ComponentTooSmall {
                    component: index,
                    count: buffers.count,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn select_kernel(&self, count: usize) -> Kernel {
        if count == 0 {
            return Kernel::Scalar;
        }
        match SimdCapability::detect() {
            SimdCapability::Lanes8 if count % 8 == 0 => Kernel::Lanes8,
            SimdCapability::Lanes8 | SimdCapability::Lanes4 if count % 4 == 0 => Kernel::Lanes4,
            _ => Kernel::Scalar,
        }
    }
}
