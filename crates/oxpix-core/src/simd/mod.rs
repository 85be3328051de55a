//! SIMD pixel-format kernels
//!
//! Bulk packed-pixel ↔ float-vector conversion with runtime CPU dispatch.
//! The wide kernels live in [`pack`]; this module owns capability detection.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! Every dispatched path produces bytes bit-identical to the scalar
//! reference in [`crate::pixel`]; the capability only changes throughput.

mod pack;

pub use pack::{SIMD_PACK_THRESHOLD, rgba32_to_vector4, vector4_to_rgba32};

/// The widest f32 vector the running CPU supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdCapability {
    /// No usable vector unit; element-at-a-time processing
    Scalar,
    /// 128-bit vectors, 4 f32 lanes (SSE4.1, NEON)
    Lanes4,
    /// 256-bit vectors, 8 f32 lanes (AVX2)
    Lanes8,
}

impl SimdCapability {
    /// Probe the running CPU
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") {
                SimdCapability::Lanes8
            } else if is_x86_feature_detected!("sse4.1") {
                SimdCapability::Lanes4
            } else {
                SimdCapability::Scalar
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            SimdCapability::Lanes4
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdCapability::Scalar
        }
    }

    /// Number of f32 lanes per vector operation
    #[inline]
    pub const fn f32_lanes(self) -> usize {
        match self {
            SimdCapability::Scalar => 1,
            SimdCapability::Lanes4 => 4,
            SimdCapability::Lanes8 => 8,
        }
    }
}

/// Check if AVX2 is available at runtime
#[cfg(target_arch = "x86_64")]
pub fn has_avx2() -> bool {
    is_x86_feature_detected!("avx2")
}

/// Check if SSE4.1 is available at runtime
#[cfg(target_arch = "x86_64")]
pub fn has_sse41() -> bool {
    is_x86_feature_detected!("sse4.1")
}

/// Check if NEON is available (always true on aarch64)
#[cfg(target_arch = "aarch64")]
pub fn has_neon() -> bool {
    true
}

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    match SimdCapability::detect() {
        SimdCapability::Lanes8 => "AVX2",
        #[cfg(target_arch = "aarch64")]
        SimdCapability::Lanes4 => "NEON",
        #[cfg(not(target_arch = "aarch64"))]
        SimdCapability::Lanes4 => "SSE4.1",
        SimdCapability::Scalar => "scalar",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_features() {
        let features = active_features();
        println!("Active SIMD features: {}", features);
        assert!(!features.is_empty());
    }

    #[test]
    fn test_detect_matches_lane_count() {
        let capability = SimdCapability::detect();
        match capability {
            SimdCapability::Scalar => assert_eq!(capability.f32_lanes(), 1),
            SimdCapability::Lanes4 => assert_eq!(capability.f32_lanes(), 4),
            SimdCapability::Lanes8 => assert_eq!(capability.f32_lanes(), 8),
        }
    }
}
