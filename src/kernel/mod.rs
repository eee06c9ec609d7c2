//! The public kernel interface.
//!
//! [`VectorKernel`] holds no data between calls; every operation validates
//! its operands, runs one linear pass and returns a freshly allocated result.
//! The operations are split by family:
//!
//! - [`elementwise`]: fixed-width add, multiply, scale, sum and dot product
//! - [`optimized`]: adaptive 16/8/4-wide variants
//! - [`bitwise`]: AND/OR/XOR over integer vectors
//! - [`matrix`]: dense matrix multiply

pub mod bitwise;
pub mod elementwise;
pub mod matrix;
pub mod optimized;

pub use bitwise::BitOp;
pub use matrix::Matrix;

use crate::config::KernelConfig;
use crate::simd::chunks;
use crate::simd::dispatch::{simd_support_level, SimdSupportLevel};
use crate::types::Scalar;

/// Lane-chunked SIMD kernels over `f32`, `f64`, `i32` and `i64`.
///
/// # Example
///
/// ```rust
/// use lanekit::VectorKernel;
///
/// let kernel = VectorKernel::new();
/// let sum = kernel.add(&[1.0f32, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]).unwrap();
/// assert_eq!(sum, vec![6.0, 8.0, 10.0, 12.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VectorKernel {
    config: KernelConfig,
}

impl VectorKernel {
    /// Create a kernel with default configuration.
    pub fn new() -> Self {
        Self::with_config(KernelConfig::default())
    }

    /// Create a kernel with the given configuration.
    pub fn with_config(config: KernelConfig) -> Self {
        log::debug!(
            "vector kernel: prefer_optimized={} host_simd={}",
            config.prefer_optimized,
            simd_support_level()
        );
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Highest SIMD level the host CPU reports.
    pub fn support_level(&self) -> SimdSupportLevel {
        simd_support_level()
    }

    /// Split `values` into the kind's default lanes plus a borrowed remainder.
    pub fn to_lane_chunks<'a, T: Scalar>(&self, values: &'a [T]) -> (Vec<T::Lane>, &'a [T]) {
        chunks::to_lane_chunks::<T::Lane>(values)
    }

    /// Inverse of [`VectorKernel::to_lane_chunks`].
    pub fn from_lane_chunks<T: Scalar>(&self, chunks: &[T::Lane], remainder: &[T]) -> Vec<T> {
        chunks::from_lane_chunks::<T::Lane>(chunks, remainder)
    }
}
