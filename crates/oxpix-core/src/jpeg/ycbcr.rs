//! YCbCr ↔ RGB planar kernels (ITU-R BT.601, full range)
//!
//! Forward output is normalized [0, 1] without clamping; out-of-gamut chroma
//! passes through so downstream stages decide the policy. Vector kernels are
//! called only with counts that tile their width exactly.

use wide::{f32x4, f32x8};

use super::{
    B_CB, CB_B, CB_G, CB_R, CR_B, CR_G, CR_R, G_CB, G_CR, R_CR, Y_B, Y_G, Y_R, load4, load8,
    store4, store8,
};

pub(super) type FromRgbPlanes<'a, 'b> = (
    &'a mut [f32],
    &'a mut [f32],
    &'a mut [f32],
    &'b [f32],
    &'b [f32],
    &'b [f32],
);

pub(super) fn to_rgb_scalar(c0: &mut [f32], c1: &mut [f32], c2: &mut [f32], max: f32, half: f32) {
    let scale = 1.0 / max;
    for i in 0..c0.len() {
        let y = c0[i];
        let cb = c1[i] - half;
        let cr = c2[i] - half;

        c0[i] = (y + R_CR * cr) * scale;
        c1[i] = (y - G_CB * cb - G_CR * cr) * scale;
        c2[i] = (y + B_CB * cb) * scale;
    }
}

pub(super) fn to_rgb_f32x4(c0: &mut [f32], c1: &mut [f32], c2: &mut [f32], max: f32, half: f32) {
    let scale = f32x4::splat(1.0 / max);
    let chroma_offset = f32x4::splat(half);
    for ((y_chunk, cb_chunk), cr_chunk) in c0
        .chunks_exact_mut(4)
        .zip(c1.chunks_exact_mut(4))
        .zip(c2.chunks_exact_mut(4))
    {
        let y = load4(y_chunk);
        let cb = load4(cb_chunk) - chroma_offset;
        let cr = load4(cr_chunk) - chroma_offset;

        let r = (y + f32x4::splat(R_CR) * cr) * scale;
        let g = (y - f32x4::splat(G_CB) * cb - f32x4::splat(G_CR) * cr) * scale;
        let b = (y + f32x4::splat(B_CB) * cb) * scale;

        store4(y_chunk, r);
        store4(cb_chunk, g);
        store4(cr_chunk, b);
    }
}

pub(super) fn to_rgb_f32x8(c0: &mut [f32], c1: &mut [f32], c2: &mut [f32], max: f32, half: f32) {
    let scale = f32x8::splat(1.0 / max);
    let chroma_offset = f32x8::splat(half);
    for ((y_chunk, cb_chunk), cr_chunk) in c0
        .chunks_exact_mut(8)
        .zip(c1.chunks_exact_mut(8))
        .zip(c2.chunks_exact_mut(8))
    {
        let y = load8(y_chunk);
        let cb = load8(cb_chunk) - chroma_offset;
        let cr = load8(cr_chunk) - chroma_offset;

        let r = (y + f32x8::splat(R_CR) * cr) * scale;
        let g = (y - f32x8::splat(G_CB) * cb - f32x8::splat(G_CR) * cr) * scale;
        let b = (y + f32x8::splat(B_CB) * cb) * scale;

        store8(y_chunk, r);
        store8(cb_chunk, g);
        store8(cr_chunk, b);
    }
}

pub(super) fn from_rgb_scalar(planes: FromRgbPlanes<'_, '_>, max: f32, half: f32) {
    let (c0, c1, c2, r_lane, g_lane, b_lane) = planes;
    for i in 0..c0.len() {
        let r = r_lane[i] * max;
        let g = g_lane[i] * max;
        let b = b_lane[i] * max;

        c0[i] = Y_R * r + Y_G * g + Y_B * b;
        c1[i] = half - CB_R * r - CB_G * g + CB_B * b;
        c2[i] = half + CR_R * r - CR_G * g - CR_B * b;
    }
}

pub(super) fn from_rgb_f32x4(planes: FromRgbPlanes<'_, '_>, max: f32, half: f32) {
    let (c0, c1, c2, r_lane, g_lane, b_lane) = planes;
    let scale = f32x4::splat(max);
    let chroma_offset = f32x4::splat(half);
    for i in (0..c0.len()).step_by(4) {
        let r = load4(&r_lane[i..i + 4]) * scale;
        let g = load4(&g_lane[i..i + 4]) * scale;
        let b = load4(&b_lane[i..i + 4]) * scale;

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
    let (c0, c1, c2, r_lane, g_lane, b_lane) = planes;
    let scale = f32x8::splat(max);
    let chroma_offset = f32x8::splat(half);
    for i in (0..c0.len()).step_by(8) {
        let r = load8(&r_lane[i..i + 8]) * scale;
        let g = load8(&g_lane[i..i + 8]) * scale;
        let b = load8(&b_lane[i..i + 8]) * scale;

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

    fn planes(count: usize) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let c0 = (0..count).map(|i| (i * 7 % 256) as f32).collect();
        let c1 = (0..count).map(|i| (i * 13 % 256) as f32).collect();
        let c2 = (0..count).map(|i| (i * 29 % 256) as f32).collect();
        (c0, c1, c2)
    }

    #[test]
    fn test_neutral_gray_decodes_to_equal_channels() {
        let mut c0 = [100.0f32; 4];
        let mut c1 = [128.0f32; 4];
        let mut c2 = [128.0f32; 4];
        to_rgb_scalar(&mut c0, &mut c1, &mut c2, 255.0, 128.0);
        for i in 0..4 {
            assert!((c0[i] - c1[i]).abs() < 1e-6);
            assert!((c1[i] - c2[i]).abs() < 1e-6);
            assert!((c0[i] - 100.0 / 255.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_vector_kernels_match_scalar() {
        let count = 32;
        let (r0, r1, r2) = planes(count);

        let (mut s0, mut s1, mut s2) = (r0.clone(), r1.clone(), r2.clone());
        to_rgb_scalar(&mut s0, &mut s1, &mut s2, 255.0, 128.0);

        let (mut v0, mut v1, mut v2) = (r0.clone(), r1.clone(), r2.clone());
        to_rgb_f32x4(&mut v0, &mut v1, &mut v2, 255.0, 128.0);
        for i in 0..count {
            assert!((s0[i] - v0[i]).abs() < 1e-6, "f32x4 r lane {i}");
            assert!((s1[i] - v1[i]).abs() < 1e-6, "f32x4 g lane {i}");
            assert!((s2[i] - v2[i]).abs() < 1e-6, "f32x4 b lane {i}");
        }

        let (mut w0, mut w1, mut w2) = (r0, r1, r2);
        to_rgb_f32x8(&mut w0, &mut w1, &mut w2, 255.0, 128.0);
        for i in 0..count {
            assert!((s0[i] - w0[i]).abs() < 1e-6, "f32x8 r lane {i}");
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let count = 16;
        let r: Vec<f32> = (0..count).map(|i| i as f32 / 15.0).collect();
        let g: Vec<f32> = (0..count).map(|i| 1.0 - i as f32 / 15.0).collect();
        let b = vec![0.25f32; count];

        let mut c0 = vec![0.0f32; count];
        let mut c1 = vec![0.0f32; count];
        let mut c2 = vec![0.0f32; count];
        from_rgb_scalar((&mut c0, &mut c1, &mut c2, &r, &g, &b), 255.0, 128.0);
        to_rgb_scalar(&mut c0, &mut c1, &mut c2, 255.0, 128.0);

        for i in 0..count {
            assert!((c0[i] - r[i]).abs() < 1e-3, "r lane {i}");
            assert!((c1[i] - g[i]).abs() < 1e-3, "g lane {i}");
            assert!((c2[i] - b[i]).abs() < 1e-3, "b lane {i}");
        }
    }
}
