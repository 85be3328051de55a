//! CMYK ↔ RGB planar kernels (Adobe inverted storage)
//!
//! Coded planes store inverted ink values: `maximum_value` means no ink. A
//! channel reconstructs as `c · k / max²`, which keeps pure white at full
//! sample values and pure black at zero. The inverse extracts the key as the
//! largest RGB channel; black maps every plane to zero.

use wide::{CmpEq, f32x4, f32x8};

use super::{load4, load8, store4, store8};

pub(super) type FromRgbPlanes<'a, 'b> = (
    &'a mut [f32],
    &'a mut [f32],
    &'a mut [f32],
    &'a mut [f32],
    &'b [f32],
    &'b [f32],
    &'b [f32],
);

pub(super) fn to_rgb_scalar(c0: &mut [f32], c1: &mut [f32], c2: &mut [f32], c3: &[f32], max: f32) {
    let scale = 1.0 / (max * max);
    for i in 0..c0.len() {
        let k = c3[i] * scale;
        c0[i] *= k;
        c1[i] *= k;
        c2[i] *= k;
    }
}

pub(super) fn to_rgb_f32x4(c0: &mut [f32], c1: &mut [f32], c2: &mut [f32], c3: &[f32], max: f32) {
    let scale = f32x4::splat(1.0 / (max * max));
    for i in (0..c0.len()).step_by(4) {
        let k = load4(&c3[i..i + 4]) * scale;
        let r = load4(&c0[i..i + 4]) * k;
        let g = load4(&c1[i..i + 4]) * k;
        let b = load4(&c2[i..i + 4]) * k;
        store4(&mut c0[i..i + 4], r);
        store4(&mut c1[i..i + 4], g);
        store4(&mut c2[i..i + 4], b);
    }
}

pub(super) fn to_rgb_f32x8(c0: &mut [f32], c1: &mut [f32], c2: &mut [f32], c3: &[f32], max: f32) {
    let scale = f32x8::splat(1.0 / (max * max));
    for i in (0..c0.len()).step_by(8) {
        let k = load8(&c3[i..i + 8]) * scale;
        let r = load8(&c0[i..i + 8]) * k;
        let g = load8(&c1[i..i + 8]) * k;
        let b = load8(&c2[i..i + 8]) * k;
        store8(&mut c0[i..i + 8], r);
        store8(&mut c1[i..i + 8], g);
        store8(&mut c2[i..i + 8], b);
    }
}

pub(super) fn from_rgb_scalar(planes: FromRgbPlanes<'_, '_>, max: f32) {
    let (c0, c1, c2, c3, r_lane, g_lane, b_lane) = planes;
    for i in 0..c0.len() {
        let r = r_lane[i];
        let g = g_lane[i];
        let b = b_lane[i];
        let k = r.max(g).max(b);
        if k == 0.0 {
            c0[i] = 0.0;
            c1[i] = 0.0;
            c2[i] = 0.0;
            c3[i] = 0.0;
        } else {
            c0[i] = max * (r / k);
            c1[i] = max * (g / k);
            c2[i] = max * (b / k);
            c3[i] = max * k;
        }
    }
}

pub(super) fn from_rgb_f32x4(planes: FromRgbPlanes<'_, '_>, max: f32) {
    let (c0, c1, c2, c3, r_lane, g_lane, b_lane) = planes;
    let scale = f32x4::splat(max);
    let zero = f32x4::splat(0.0);
    for i in (0..c0.len()).step_by(4) {
        let r = load4(&r_lane[i..i + 4]);
        let g = load4(&g_lane[i..i + 4]);
        let b = load4(&b_lane[i..i + 4]);
        let k = r.max(g).max(b);

        // Black lanes divide by zero; the blend discards those results
        let black = k.cmp_eq(zero);
        store4(&mut c0[i..i + 4], black.blend(zero, scale * (r / k)));
        store4(&mut c1[i..i + 4], black.blend(zero, scale * (g / k)));
        store4(&mut c2[i..i + 4], black.blend(zero, scale * (b / k)));
        store4(&mut c3[i..i + 4], black.blend(zero, scale * k));
    }
}

pub(super) fn from_rgb_f32x8(planes: FromRgbPlanes<'_, '_>, max: f32) {
    let (c0, c1, c2, c3, r_lane, g_lane, b_lane) = planes;
    let scale = f32x8::splat(max);
    let zero = f32x8::splat(0.0);
    for i in (0..c0.len()).step_by(8) {
        let r = load8(&r_lane[i..i + 8]);
        let g = load8(&g_lane[i..i + 8]);
        let b = load8(&b_lane[i..i + 8]);
        let k = r.max(g).max(b);

        let black = k.cmp_eq(zero);
        store8(&mut c0[i..i + 8], black.blend(zero, scale * (r / k)));
        store8(&mut c1[i..i + 8], black.blend(zero, scale * (g / k)));
        store8(&mut c2[i..i + 8], black.blend(zero, scale * (b / k)));
        store8(&mut c3[i..i + 8], black.blend(zero, scale * k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_samples_decode_to_white() {
        let mut c0 = [255.0f32; 4];
        let mut c1 = [255.0f32; 4];
        let mut c2 = [255.0f32; 4];
        let c3 = [255.0f32; 4];
        to_rgb_scalar(&mut c0, &mut c1, &mut c2, &c3, 255.0);
        for i in 0..4 {
            assert!((c0[i] - 1.0).abs() < 1e-6);
            assert!((c1[i] - 1.0).abs() < 1e-6);
            assert!((c2[i] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_black_encodes_to_zero_planes() {
        let mut c0 = [9.0f32; 4];
        let mut c1 = [9.0f32; 4];
        let mut c2 = [9.0f32; 4];
        let mut c3 = [9.0f32; 4];
        let zeroes = [0.0f32; 4];
        from_rgb_scalar(
            (&mut c0, &mut c1, &mut c2, &mut c3, &zeroes, &zeroes, &zeroes),
            255.0,
        );
        assert_eq!(c0, [0.0; 4]);
        assert_eq!(c3, [0.0; 4]);
    }

    #[test]
    fn test_vector_decode_matches_scalar() {
        let count = 16;
        let base: Vec<f32> = (0..count).map(|i| (i * 15) as f32).collect();
        let k: Vec<f32> = (0..count).map(|i| (255 - i * 9) as f32).collect();

        let mut s0 = base.clone();
        let mut s1 = base.clone();
        let mut s2 = base.clone();
        to_rgb_scalar(&mut s0, &mut s1, &mut s2, &k, 255.0);

        let mut v0 = base.clone();
        let mut v1 = base.clone();
        let mut v2 = base.clone();
        to_rgb_f32x4(&mut v0, &mut v1, &mut v2, &k, 255.0);

        let mut w0 = base.clone();
        let mut w1 = base.clone();
        let mut w2 = base;
        to_rgb_f32x8(&mut w0, &mut w1, &mut w2, &k, 255.0);

        for i in 0..count {
            assert!((s0[i] - v0[i]).abs() < 1e-6, "f32x4 c0 lane {i}");
            assert!((s1[i] - v1[i]).abs() < 1e-6, "f32x4 c1 lane {i}");
            assert!((s0[i] - w0[i]).abs() < 1e-6, "f32x8 c0 lane {i}");
            assert!((s2[i] - w2[i]).abs() < 1e-6, "f32x8 c2 lane {i}");
        }
    }

    #[test]
    fn test_vector_black_handling_matches_scalar() {
        let count = 16;
        let r: Vec<f32> = (0..count)
            .map(|i| if i % 3 == 0 { 0.0 } else { i as f32 / 15.0 })
            .collect();
        let g: Vec<f32> = (0..count).map(|i| if i % 3 == 0 { 0.0 } else { 0.5 }).collect();
        let b = vec![0.0f32; count];

        let mut s0 = vec![0.0f32; count];
        let mut s1 = vec![0.0f32; count];
        let mut s2 = vec![0.0f32; count];
        let mut s3 = vec![0.0f32; count];
        from_rgb_scalar((&mut s0, &mut s1, &mut s2, &mut s3, &r, &g, &b), 255.0);

        let mut v0 = vec![0.0f32; count];
        let mut v1 = vec![0.0f32; count];
        let mut v2 = vec![0.0f32; count];
        let mut v3 = vec![0.0f32; count];
        from_rgb_f32x4((&mut v0, &mut v1, &mut v2, &mut v3, &r, &g, &b), 255.0);

        for i in 0..count {
            assert!((s0[i] - v0[i]).abs() < 1e-4, "c0 lane {i}");
            assert!((s3[i] - v3[i]).abs() < 1e-4, "c3 lane {i}");
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let count = 8;
        let r: Vec<f32> = (1..=count).map(|i| i as f32 / count as f32).collect();
        let g = vec![0.5f32; count];
        let b: Vec<f32> = (1..=count).map(|i| 1.0 - i as f32 / (2 * count) as f32).collect();

        let mut c0 = vec![0.0f32; count];
        let mut c1 = vec![0.0f32; count];
        let mut c2 = vec![0.0f32; count];
        let mut c3 = vec![0.0f32; count];
        from_rgb_scalar((&mut c0, &mut c1, &mut c2, &mut c3, &r, &g, &b), 255.0);
        to_rgb_scalar(&mut c0, &mut c1, &mut c2, &c3, 255.0);

        for i in 0..count {
            assert!((c0[i] - r[i]).abs() < 1e-4, "r lane {i}");
            assert!((c1[i] - g[i]).abs() < 1e-4, "g lane {i}");
            assert!((c2[i] - b[i]).abs() < 1e-4, "b lane {i}");
        }
    }
}
