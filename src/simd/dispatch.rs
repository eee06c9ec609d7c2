//! Runtime CPU feature detection.
//!
//! The portable lanes let `wide` pick instructions at compile time, so the
//! detected level never changes a result. It is reported when a kernel is
//! built so that benchmark logs record what the host could do.

use std::fmt;

/// Enumeration of SIMD support levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdSupportLevel {
    /// No SIMD support. Never detected on a host; it is the reporting floor
    /// every other level orders above.
    Scalar,
    /// Portable SIMD via `wide` crate.
    Portable,
    /// NEON support (aarch64).
    #[cfg(target_arch = "aarch64")]
    Neon,
    /// SSE4.1 support (x86_64).
    #[cfg(target_arch = "x86_64")]
    Sse4,
    /// AVX2 support (x86_64).
    #[cfg(target_arch = "x86_64")]
    Avx2,
    /// AVX-512 support (x86_64).
    #[cfg(target_arch = "x86_64")]
    Avx512,
}

impl SimdSupportLevel {
    /// Widest native register in bits, 0 for scalar.
    pub fn register_bits(self) -> usize {
        match self {
            SimdSupportLevel::Scalar => 0,
            SimdSupportLevel::Portable => 128,
            #[cfg(target_arch = "aarch64")]
            SimdSupportLevel::Neon => 128,
            #[cfg(target_arch = "x86_64")]
            SimdSupportLevel::Sse4 => 128,
            #[cfg(target_arch = "x86_64")]
            SimdSupportLevel::Avx2 => 256,
            #[cfg(target_arch = "x86_64")]
            SimdSupportLevel::Avx512 => 512,
        }
    }
}

impl fmt::Display for SimdSupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimdSupportLevel::Scalar => "scalar",
            SimdSupportLevel::Portable => "portable",
            #[cfg(target_arch = "aarch64")]
            SimdSupportLevel::Neon => "neon",
            #[cfg(target_arch = "x86_64")]
            SimdSupportLevel::Sse4 => "sse4.1",
            #[cfg(target_arch = "x86_64")]
            SimdSupportLevel::Avx2 => "avx2",
            #[cfg(target_arch = "x86_64")]
            SimdSupportLevel::Avx512 => "avx512f",
        };
        f.write_str(name)
    }
}

/// Detect the highest supported SIMD level at runtime.
pub fn simd_support_level() -> SimdSupportLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            SimdSupportLevel::Avx512
        } else if is_x86_feature_detected!("avx2") {
            SimdSupportLevel::Avx2
        } else if is_x86_feature_detected!("sse4.1") {
            SimdSupportLevel::Sse4
        } else {
            SimdSupportLevel::Portable
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            SimdSupportLevel::Neon
        } else {
            SimdSupportLevel::Portable
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        SimdSupportLevel::Portable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simd_support_level() {
        let level = simd_support_level();
        // Should at least be Portable
        assert!(level >= SimdSupportLevel::Portable);
        assert!(level.register_bits() >= 128);
        assert!(!level.to_string().is_empty());
    }

    #[test]
    fn test_scalar_is_lowest() {
        assert!(SimdSupportLevel::Scalar < SimdSupportLevel::Portable);
        assert_eq!(SimdSupportLevel::Scalar.register_bits(), 0);
    }
}
