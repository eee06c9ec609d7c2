//! Bitwise kernels for integer vectors.

use serde::{Deserialize, Serialize};

use crate::error::{check_pair, Result};
use crate::kernel::VectorKernel;
use crate::simd::chunked::{full_lanes, zip_lanes, zip_tail};
use crate::simd::traits::LaneBitwise;
use crate::types::BitwiseScalar;

/// A bitwise binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    #[inline]
    fn lane<L: LaneBitwise>(self, a: L, b: L) -> L {
        match self {
            BitOp::And => a.bitand(b),
            BitOp::Or => a.bitor(b),
            BitOp::Xor => a.bitxor(b),
        }
    }

    #[inline]
    fn scalar<T: BitwiseScalar>(self, a: T, b: T) -> T {
        match self {
            BitOp::And => a.bitand(b),
            BitOp::Or => a.bitor(b),
            BitOp::Xor => a.bitxor(b),
        }
    }
}

impl VectorKernel {
    /// Apply `op` element-wise to two integer vectors.
    pub fn bitwise<T: BitwiseScalar>(&self, op: BitOp, a: &[T], b: &[T]) -> Result<Vec<T>> {
        check_pair(a, b)?;

        let mut result = vec![T::zero(); a.len()];
        let lanes = full_lanes::<T::BitLane>(a.len());
        let end = zip_lanes::<T::BitLane, _>(a, b, &mut result, 0, lanes, |x, y| op.lane(x, y));
        zip_tail(a, b, &mut result, end, |x, y| op.scalar(x, y));

        Ok(result)
    }

    /// Bitwise AND of two integer vectors.
    pub fn bitwise_and<T: BitwiseScalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        self.bitwise(BitOp::And, a, b)
    }

    /// Bitwise OR of two integer vectors.
    pub fn bitwise_or<T: BitwiseScalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        self.bitwise(BitOp::Or, a, b)
    }

    /// Bitwise XOR of two integer vectors.
    pub fn bitwise_xor<T: BitwiseScalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        self.bitwise(BitOp::Xor, a, b)
    }
}
