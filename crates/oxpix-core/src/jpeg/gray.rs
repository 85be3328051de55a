//! Grayscale ↔ RGB planar kernels
//!
//! Forward conversion normalizes the single luminance plane; consumers
//! replicate it across channels. The inverse takes BT.601 luma of the RGB
//! lanes back into sample range.

use wide::{f32x4, f32x8};

use super::{Y_B, Y_G, Y_R, load4, load8, store4, store8};

pub(super) fn to_rgb_scalar(c0: &mut [f32], max: f32) {
    let scale = 1.0 / max;
    for v in c0 {
        *v *= scale;
    }
}

pub(super) fn to_rgb_f32x4(c0: &mut [f32], max: f32) {
    let scale = f32x4::splat(1.0 / max);
    for chunk in c0.chunks_exact_mut(4) {
        store4(chunk, load4(chunk) * scale);
    }
}

pub(super) fn to_rgb_f32x8(c0: &mut [f32], max: f32) {
    let scale = f32x8::splat(1.0 / max);
    for chunk in c0.chunks_exact_mut(8) {
        store8(chunk, load8(chunk) * scale);
    }
}

pub(super) fn from_rgb_scalar(
    c0: &mut [f32],
    r_lane: &[f32],
    g_lane: &[f32],
    b_lane: &[f32],
    max: f32,
) {
    for i in 0..c0.len() {
        c0[i] = (Y_R * r_lane[i] + Y_G * g_lane[i] + Y_B * b_lane[i]) * max;
    }
}

pub(super) fn from_rgb_f32x4(
    c0: &mut [f32],
    r_lane: &[f32],
    g_lane: &[f32],
    b_lane: &[f32],
    max: f32,
) {
    let scale = f32x4::splat(max);
    for i in (0..c0.len()).step_by(4) {
        let y = f32x4::splat(Y_R) * load4(&r_lane[i..i + 4])
            + f32x4::splat(Y_G) * load4(&g_lane[i..i + 4])
            + f32x4::splat(Y_B) * load4(&b_lane[i..i + 4]);
        store4(&mut c0[i..i + 4], y * scale);
    }
}

pub(super) fn from_rgb_f32x8(
    c0: &mut [f32],
    r_lane: &[f32],
    g_lane: &[f32],
    b_lane: &[f32],
    max: f32,
) {
    let scale = f32x8::splat(max);
    for i in (0..c0.len()).step_by(8) {
        let y = f32x8::splat(Y_R) * load8(&r_lane[i..i + 8])
            + f32x8::splat(Y_G) * load8(&g_lane[i..i + 8])
            + f32x8::splat(Y_B) * load8(&b_lane[i..i + 8]);
        store8(&mut c0[i..i + 8], y * scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_by_precision_range() {
        let mut plane = [0.0f32, 2047.5, 4095.0];
        to_rgb_scalar(&mut plane, 4095.0);
        assert!((plane[0]).abs() < 1e-6);
        assert!((plane[1] - 0.5).abs() < 1e-6);
        assert!((plane[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luma_weights_sum_to_one() {
        let r = [1.0f32; 4];
        let mut plane = [0.0f32; 4];
        from_rgb_scalar(&mut plane, &r, &r, &r, 255.0);
        for v in plane {
            assert!((v - 255.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_vector_kernels_match_scalar() {
        let count = 24;
        let source: Vec<f32> = (0..count).map(|i| (i * 37 % 256) as f32).collect();

        let mut scalar = source.clone();
        to_rgb_scalar(&mut scalar, 255.0);
        let mut lanes4 = source.clone();
        to_rgb_f32x4(&mut lanes4, 255.0);
        let mut lanes8 = source;
        to_rgb_f32x8(&mut lanes8, 255.0);

        for i in 0..count {
            assert!((scalar[i] - lanes4[i]).abs() < 1e-7, "f32x4 lane {i}");
            assert!((scalar[i] - lanes8[i]).abs() < 1e-7, "f32x8 lane {i}");
        }
    }
}
