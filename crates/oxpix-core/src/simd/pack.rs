//! Bulk packed-pixel ↔ float-vector conversion
//!
//! Public entry points validate both buffer lengths up front (nothing is
//! written on failure), then pick a kernel: short batches and CPUs without a
//! vector unit take the scalar path; longer batches run the widest available
//! kernel over the aligned prefix with a scalar loop finishing the remainder.
//!
//! The kernels scale in vector registers and round/saturate per lane with
//! the exact operation sequence of the scalar reference, so the output is
//! bit-identical whichever path ran.

use wide::{f32x4, f32x8};

use crate::error::{Result, check_len};
use crate::pixel::{INV_255, Rgba32};
use crate::simd::SimdCapability;

/// Batches below this element count skip vector dispatch entirely
///
/// Lane setup and remainder handling dominate short batches; the scalar loop
/// wins under roughly this size.
pub const SIMD_PACK_THRESHOLD: usize = 128;

/// Unpack the first `count` pixels of `source` into normalized float vectors
///
/// Both buffers must hold at least `count` elements; on violation nothing is
/// written. Elements beyond `count` are left untouched.
pub fn rgba32_to_vector4(
    source: &[Rgba32],
    destination: &mut [[f32; 4]],
    count: usize,
) -> Result<()> {
    check_len(source, "source", count)?;
    check_len(destination, "destination", count)?;
    let source = &source[..count];
    let destination = &mut destination[..count];

    if count < SIMD_PACK_THRESHOLD {
        unpack_scalar(source, destination);
        return Ok(());
    }
    match SimdCapability::detect() {
        SimdCapability::Lanes8 => {
            // two pixels per vector op; odd trailing pixel goes scalar
            let aligned = count - count % 2;
            unpack_f32x8(&source[..aligned], &mut destination[..aligned]);
            unpack_scalar(&source[aligned..], &mut destination[aligned..]);
        }
        SimdCapability::Lanes4 => unpack_f32x4(source, destination),
        SimdCapability::Scalar => unpack_scalar(source, destination),
    }
    Ok(())
}

/// Pack the first `count` normalized float vectors of `source` into pixels
///
/// Components round to the nearest byte and saturate; out-of-range values
/// clamp to 0 or 255, they never wrap. Both buffers must hold at least
/// `count` elements; on violation nothing is written.
pub fn vector4_to_rgba32(
    source: &[[f32; 4]],
    destination: &mut [Rgba32],
    count: usize,
) -> Result<()> {
    check_len(source, "source", count)?;
    check_len(destination, "destination", count)?;
    let source = &source[..count];
    let destination = &mut destination[..count];

    if count < SIMD_PACK_THRESHOLD {
        pack_scalar(source, destination);
        return Ok(());
    }
    match SimdCapability::detect() {
        SimdCapability::Lanes8 => {
            let aligned = count - count % 2;
            pack_f32x8(&source[..aligned], &mut destination[..aligned]);
            pack_scalar(&source[aligned..], &mut destination[aligned..]);
        }
        SimdCapability::Lanes4 => pack_f32x4(source, destination),
        SimdCapability::Scalar => pack_scalar(source, destination),
    }
    Ok(())
}

fn unpack_scalar(source: &[Rgba32], destination: &mut [[f32; 4]]) {
    for (pixel, vector) in source.iter().zip(destination.iter_mut()) {
        *vector = pixel.to_vector4();
    }
}

fn pack_scalar(source: &[[f32; 4]], destination: &mut [Rgba32]) {
    for (vector, pixel) in source.iter().zip(destination.iter_mut()) {
        *pixel = Rgba32::from_vector4(*vector);
    }
}

fn unpack_f32x4(source: &[Rgba32], destination: &mut [[f32; 4]]) {
    let scale = f32x4::splat(INV_255);
    for (pixel, vector) in source.iter().zip(destination.iter_mut()) {
        let lanes = f32x4::from([
            pixel.r as f32,
            pixel.g as f32,
            pixel.b as f32,
            pixel.a as f32,
        ]) * scale;
        *vector = lanes.to_array();
    }
}

/// Two pixels per iteration; callers pass an even-length slice
fn unpack_f32x8(source: &[Rgba32], destination: &mut [[f32; 4]]) {
    let scale = f32x8::splat(INV_255);
    for (pixels, vectors) in source
        .chunks_exact(2)
        .zip(destination.chunks_exact_mut(2))
    {
        let lanes = f32x8::from([
            pixels[0].r as f32,
            pixels[0].g as f32,
            pixels[0].b as f32,
            pixels[0].a as f32,
            pixels[1].r as f32,
            pixels[1].g as f32,
            pixels[1].b as f32,
            pixels[1].a as f32,
        ]) * scale;
        let arr = lanes.to_array();
        vectors[0] = [arr[0], arr[1], arr[2], arr[3]];
        vectors[1] = [arr[4], arr[5], arr[6], arr[7]];
    }
}

fn pack_f32x4(source: &[[f32; 4]], destination: &mut [Rgba32]) {
    let scale = f32x4::splat(255.0);
    for (vector, pixel) in source.iter().zip(destination.iter_mut()) {
        let scaled = (f32x4::from(*vector) * scale).to_array();
        *pixel = Rgba32::new(
            saturate(scaled[0]),
            saturate(scaled[1]),
            saturate(scaled[2]),
            saturate(scaled[3]),
        );
    }
}

/// Two pixels per iteration; callers pass an even-length slice
fn pack_f32x8(source: &[[f32; 4]], destination: &mut [Rgba32]) {
    let scale = f32x8::splat(255.0);
    for (vectors, pixels) in source
        .chunks_exact(2)
        .zip(destination.chunks_exact_mut(2))
    {
        let lanes = f32x8::from([
            vectors[0][0],
            vectors[0][1],
            vectors[0][2],
            vectors[0][3],
            vectors[1][0],
            vectors[1][1],
            vectors[1][2],
            vectors[1][3],
        ]) * scale;
        let arr = lanes.to_array();
        pixels[0] = Rgba32::new(
            saturate(arr[0]),
            saturate(arr[1]),
            saturate(arr[2]),
            saturate(arr[3]),
        );
        pixels[1] = Rgba32::new(
            saturate(arr[4]),
            saturate(arr[5]),
            saturate(arr[6]),
            saturate(arr[7]),
        );
    }
}

/// Round and saturate one pre-scaled lane; same operation sequence as
/// `pixel::pack_component` after its multiply
#[inline]
fn saturate(scaled: f32) -> u8 {
    scaled.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn checkerboard(count: usize) -> Vec<Rgba32> {
        (0..count)
            .map(|i| {
                let v = (i % 256) as u8;
                Rgba32::new(v, v.wrapping_add(85), v.wrapping_add(170), 255 - v)
            })
            .collect()
    }

    #[test]
    fn test_unpack_matches_scalar_across_thresholds() {
        for count in [0usize, 1, 7, 8, 127, 128, 129, 130, 256] {
            let pixels = checkerboard(count.max(1) + 2);
            let mut vectorized = vec![[0.0f32; 4]; pixels.len()];
            rgba32_to_vector4(&pixels, &mut vectorized, count).unwrap();

            for i in 0..count {
                let reference = pixels[i].to_vector4();
                assert_eq!(vectorized[i], reference, "count {count}, element {i}");
            }
        }
    }

    #[test]
    fn test_pack_matches_scalar_across_thresholds() {
        for count in [0usize, 1, 7, 8, 127, 128, 129, 130, 256] {
            let vectors: Vec<[f32; 4]> = (0..count.max(1) + 2)
                .map(|i| {
                    let t = i as f32 * 0.0039;
                    [t, 1.0 - t, t * 0.5, 1.0]
                })
                .collect();
            let mut packed = vec![Rgba32::default(); vectors.len()];
            vector4_to_rgba32(&vectors, &mut packed, count).unwrap();

            for i in 0..count {
                let reference = Rgba32::from_vector4(vectors[i]);
                assert_eq!(packed[i], reference, "count {count}, element {i}");
            }
        }
    }

    #[test]
    fn test_pack_saturates_out_of_range() {
        // Above the dispatch threshold so the vector kernel runs
        let vectors = vec![[10.0f32, -5.0, 0.25, 2.0]; 130];
        let mut packed = vec![Rgba32::default(); 130];
        vector4_to_rgba32(&vectors, &mut packed, 130).unwrap();
        for pixel in &packed {
            assert_eq!(*pixel, Rgba32::new(255, 0, 64, 255));
        }
    }

    #[test]
    fn test_size_violation_writes_nothing() {
        let pixels = checkerboard(4);
        let sentinel = [[-1.0f32; 4]; 4];
        let mut destination = sentinel;
        let err = rgba32_to_vector4(&pixels, &mut destination, 5).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { param: "source", .. }));
        assert_eq!(destination, sentinel);

        let vectors = [[0.5f32; 4]; 8];
        let mut packed = [Rgba32::new(7, 7, 7, 7); 4];
        let err = vector4_to_rgba32(&vectors, &mut packed, 5).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                param: "destination",
                ..
            }
        ));
        assert!(packed.iter().all(|p| *p == Rgba32::new(7, 7, 7, 7)));
    }

    #[test]
    fn test_excess_elements_untouched() {
        let pixels = checkerboard(200);
        let mut destination = vec![[-1.0f32; 4]; 200];
        rgba32_to_vector4(&pixels, &mut destination, 150).unwrap();
        assert_ne!(destination[149], [-1.0; 4]);
        assert_eq!(destination[150], [-1.0; 4]);
        assert_eq!(destination[199], [-1.0; 4]);
    }

    #[test]
    fn test_roundtrip_bulk() {
        let pixels = checkerboard(256);
        let mut vectors = vec![[0.0f32; 4]; 256];
        let mut back = vec![Rgba32::default(); 256];
        rgba32_to_vector4(&pixels, &mut vectors, 256).unwrap();
        vector4_to_rgba32(&vectors, &mut back, 256).unwrap();
        assert_eq!(pixels, back);
    }
}
