//! YCCK ↔ RGB planar kernels
//!
//! YCCK codes the inverted CMY planes through the BT.601 luma/chroma matrix
//! and carries the key plane unchanged. Reconstruction rounds the YCbCr
//! intermediate to the nearest integer before re-inverting, matching how the
//! chroma planes were quantized; scalar and vector kernels both round ties
//! to even so their outputs agree.

use wide::{f32x4, f32x8};

use super::{
    B_CB, CB_B, CB_G, CB_R, CR_B, CR_G, CR_R, G_CB, G_CR, R_CR, Y_B, Y_G, Y_R, cmyk, load4,
    load8, store4, store8,
};

pub(super) use super::cmyk::FromRgbPlanes;

pub(super) fn to_rgb_scalar(
    c0: &mut [f32],
    c1: &mut [f32],
    c2: &mut [f32],
    c3: &[f32],
    max: f32,
    half: f32,
) {
    let scale = 1.0 / (max * max);
    for i in 0..c0.len() {
        let y = c0[i];
        let cb = c1[i] - half;
        let cr = c2[i] - half;
        let scaled_k = c3[i] * scale;

        c0[i] = (max - (y + R_CR * cr).round_ties_even()) * scaled_k;
        c1[i] = (max - (y - G_CB * cb - G_CR * cr).round_ties_even()) * scaled_k;
        c2[i] = (max - (y + B_CB * cb).round_ties_even()) * scaled_k;
    }
}

pub(super) fn to_rgb_f32x4(
    c0: &mut [f32],
    c1: &mut [f32],
    c2: &mut [f32],
    c3: &[f32],
    max: f32,
    half: f32,
) {
    let scale = f32x4::splat(1.0 / (max * max));
    let max_value = f32x4::splat(max);
    let chroma_offset = f32x4::splat(half);
    for i in (0..c0.len()).step_by(4) {
        let y = load4(&c0[i..i + 4]);
        let cb = load4(&c1[i..i + 4]) - chroma_offset;
        let cr = load4(&c2[i..i + 4]) - chroma_offset;
        let scaled_k = load4(&c3[i..i + 4]) * scale;

        let r = (max_value - (y + f32x4::splat(R_CR) * cr).round()) * scaled_k;
        let g = (max_value - (y - f32x4::splat(G_CB) * cb - f32x4::splat(G_CR) * cr).round())
            * scaled_k;
        let b = (max_value - (y + f32x4::splat(B_CB) * cb).round()) * scaled_k;

        store4(&mut c0[i..i + 4], r);
        store4(&mut c1[i..i + 4], g);
        store4(&mut c2[i..i + 4], b);
    }
}

pub(super) fn to_rgb_f32x8(
    c0: &mut [f32],
    c1: &mut [f32],
    c2: &mut [f32],
    c3: &[f32],
    max: f32,
    half: f32,
) {
    let scale = f32x8::splat(1.0 / (max * max));
    let max_value = f32x8::splat(max);
    let chroma_offset = f32x8::splat(half);
    for i in (0..c0.len()).step_by(8) {
        let y = load8(&c0[i..i + 8]);
        let cb = load8(&c1[i..i + 8]) - chroma_offset;
        let cr = load8(&c2[i..i + 8]) - chroma_offset;
        let scaled_k = load8(&c3[i..i + 8]) * scale;

        let r = (max_value - (y + f32x8::splat(R_CR) * cr).round()) * scaled_k;
        let g = (max_value - (y - f32x8::splat(G_CB) * cb - f32x8::splat(G_CR) * cr).round())
            * scaled_k;
        let b = (max_value - (y + f32x8::splat(B_CB) * cb).round()) * scaled_k;

        store8(&mut c0[i..i + 8], r);
        store8(&mut c1[i..i + 8], g);
        store8(&mut c2[i..i + 8], b);
    }
}

pub(super) fn from_rgb_scalar(planes: FromRgbPlanes<'_, '_>, max: f32, half: f32) {
    let (c0, c1, c2, c3, r_lane, g_lane, b_lane) = planes;
    cmyk::from_rgb_scalar(
        (&mut *c0, &mut *c1, &mut *c2, &mut *c3, r_lane, g_lane, b_lane),
        max,
    );

    // The inverted CMY planes are already in sample range; no rescale before
    // the luma/chroma matrix. The key plane stays as CMYK wrote it.
    for i in 0..c0.len() {
        let r = max - c0[i];
        let g = max - c1[i];
        let b = max - c2[i];

        c0[i] = Y_R * r + Y_G * g + Y_B * b;
        c1[i] = half - CB_R * r - CB_G * g + CB_B * b;
        c2[i] = half + CR_R * r - CR_G * g - CR_B * b;
    }
}

pub(super) fn from_rgb_f32x4(planes: FromRgbPlanes<'_, '_>, max: f32, half: f32) {
    let (c0, c1, c2, c3, r_lane, g_lane, b_lane) = planes;
    cmyk::from_rgb_f32x4(
        (&mut *c0, &mut *c1, &mut *c2, &mut *c3, r_lane, g_lane, b_lane),
        max,
    );

    let max_value = f32x4::splat(max);
    let chroma_offset = f32x4::splat(half);
    for i in (0..c0.len()).step_by(4) {
        let r = max_value - load4(&c0[i..i + 4]);
        let g = max_value - load4(&c1[i..i + 4]);
        let b = max_value - load4(&c2[i..i + 4]);

        let y = f32x4::splat(Y_R) * r + f32x4::splat(Y_G) * g + f32x4::splat(Y_B) * b;
        let cb = chroma_offset - f32x4::splat(CB_R) * r - f32x4::splat(CB_G) * g
            + f32x4::splat(CB_B) * b;
        let cr = chroma_offset + f32x4::splat(CR_R) * r
            - f32x4::splat(CR_G) * g
            - f32x4::splat(CR_B) * b;

        store4(&mut c0[i..i + 4], y);
        store4(&mut c1[i..i + 4], cb);
        store4(&mut c2[i..i + 4], cr);
    }
}

pub(super) fn from_rgb_f32x8(planes: FromRgbPlanes<'_, '_>, max: f32, half: f32) {
    let (c0, c1, c2, c3, r_lane, g_lane, b_lane) = planes;
    cmyk::from_rgb_f32x8(
        (&mut *c0, &mut *c1, &mut *c2, &mut *c3, r_lane, g_lane, b_lane),
        max,
    );

    let max_value = f32x8::splat(max);
    let chroma_offset = f32x8::splat(half);
    for i in (0..c0.len()).step_by(8) {
        let r = max_value - load8(&c0[i..i + 8]);
        let g = max_value - load8(&c1[i..i + 8]);
        let b = max_value - load8(&c2[i..i + 8]);

        let y = f32x8::splat(Y_R) * r + f32x8::splat(Y_G) * g + f32x8::splat(Y_B) * b;
        let cb = chroma_offset - f32x8::splat(CB_R) * r - f32x8::splat(CB_G) * g
            + f32x8::splat(CB_B) * b;
        let cr = chroma_offset + f32x8::splat(CR_R) * r
            - f32x8::splat(CR_G) * g
            - f32x8::splat(CR_B) * b;

        store8(&mut c0[i..i + 8], y);
        store8(&mut c1[i..i + 8], cb);
        store8(&mut c2[i..i + 8], cr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_roundtrip() {
        let count = 8;
        let ones = vec![1.0f32; count];
        let mut c0 = vec![0.0f32; count];
        let mut c1 = vec![0.0f32; count];
        let mut c2 = vec![0.0f32; count];
        let mut c3 = vec![0.0f32; count];
        from_rgb_scalar(
            (&mut c0, &mut c1, &mut c2, &mut c3, &ones, &ones, &ones),
            255.0,
            128.0,
        );
        to_rgb_scalar(&mut c0, &mut c1, &mut c2, &c3, 255.0, 128.0);
        for i in 0..count {
            assert!((c0[i] - 1.0).abs() < 1e-2, "r lane {i}: {}", c0[i]);
            assert!((c1[i] - 1.0).abs() < 1e-2, "g lane {i}: {}", c1[i]);
            assert!((c2[i] - 1.0).abs() < 1e-2, "b lane {i}: {}", c2[i]);
        }
    }

    #[test]
    fn test_vector_kernels_match_scalar() {
        let count = 16;
        let c0: Vec<f32> = (0..count).map(|i| (i * 11 % 256) as f32).collect();
        let c1: Vec<f32> = (0..count).map(|i| (i * 17 % 256) as f32).collect();
        let c2: Vec<f32> = (0..count).map(|i| (i * 23 % 256) as f32).collect();
        let c3: Vec<f32> = (0..count).map(|i| (255 - i * 9 % 256) as f32).collect();

        let (mut s0, mut s1, mut s2) = (c0.clone(), c1.clone(), c2.clone());
        to_rgb_scalar(&mut s0, &mut s1, &mut s2, &c3, 255.0, 128.0);

        let (mut v0, mut v1, mut v2) = (c0.clone(), c1.clone(), c2.clone());
        to_rgb_f32x4(&mut v0, &mut v1, &mut v2, &c3, 255.0, 128.0);

        let (mut w0, mut w1, mut w2) = (c0, c1, c2);
        to_rgb_f32x8(&mut w0, &mut w1, &mut w2, &c3, 255.0, 128.0);

        for i in 0..count {
            assert!((s0[i] - v0[i]).abs() < 1e-5, "f32x4 r lane {i}");
            assert!((s1[i] - v1[i]).abs() < 1e-5, "f32x4 g lane {i}");
            assert!((s2[i] - v2[i]).abs() < 1e-5, "f32x4 b lane {i}");
            assert!((s0[i] - w0[i]).abs() < 1e-5, "f32x8 r lane {i}");
        }
    }
}
