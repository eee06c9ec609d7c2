//! Core numeric type definitions.
//!
//! The set of scalar kinds is closed: `f32`, `f64`, `i32` and `i64`. Each kind
//! names its default lane type, so kernels are monomorphised per kind and no
//! runtime type check ever happens on the statically-typed entry points.

use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::SimdError;
use crate::simd::portable::{F32x16, F32x4, F32x8, F64x4, I32x4, I64x2};
use crate::simd::traits::{LaneArith, LaneBitwise, LaneVector};

/// The closed set of supported scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
    /// 32-bit signed integer, wrapping arithmetic.
    I32,
    /// 64-bit signed integer, wrapping arithmetic.
    I64,
}

impl ScalarKind {
    /// All supported kinds.
    pub const ALL: [ScalarKind; 4] = [ScalarKind::F32, ScalarKind::F64, ScalarKind::I32, ScalarKind::I64];

    /// Canonical short name.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
        }
    }

    /// Whether the kind is an integer kind.
    pub fn is_integer(self) -> bool {
        matches!(self, ScalarKind::I32 | ScalarKind::I64)
    }

    /// Lane width used by the fixed-width kernels for this kind.
    ///
    /// 64-bit integers use two lanes; everything else uses four.
    pub fn lane_width(self) -> usize {
        match self {
            ScalarKind::F32 => F32x4::LANES,
            ScalarKind::F64 => F64x4::LANES,
            ScalarKind::I32 => I32x4::LANES,
            ScalarKind::I64 => I64x2::LANES,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = SimdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f32" | "float" | "float32" => Ok(ScalarKind::F32),
            "f64" | "double" | "float64" => Ok(ScalarKind::F64),
            "i32" | "int32" => Ok(ScalarKind::I32),
            "i64" | "int64" => Ok(ScalarKind::I64),
            _ => Err(SimdError::unsupported(s)),
        }
    }
}

/// Trait for scalar types the lane kernels operate on.
///
/// `wrapping_add` and `wrapping_mul` are IEEE arithmetic for floats and
/// modular arithmetic for integers, so the scalar tail always agrees with
/// the lane path across the split point.
pub trait Scalar:
    Copy + Clone + Default + PartialEq + fmt::Debug + Zero + One + Send + Sync + 'static
{
    /// Lane type used by the fixed-width kernels.
    type Lane: LaneArith + LaneVector<Element = Self>;

    /// Runtime tag for this kind.
    const KIND: ScalarKind;

    /// Addition that never traps.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication that never traps.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

impl Scalar for f32 {
    type Lane = F32x4;
    const KIND: ScalarKind = ScalarKind::F32;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl Scalar for f64 {
    type Lane = F64x4;
    const KIND: ScalarKind = ScalarKind::F64;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl Scalar for i32 {
    type Lane = I32x4;
    const KIND: ScalarKind = ScalarKind::I32;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        i32::wrapping_mul(self, rhs)
    }
}

impl Scalar for i64 {
    type Lane = I64x2;
    const KIND: ScalarKind = ScalarKind::I64;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i64::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        i64::wrapping_mul(self, rhs)
    }
}

/// Integer scalars that support lane-wise bitwise operations.
pub trait BitwiseScalar: Scalar + Eq {
    /// Lane type used by the bitwise kernels.
    type BitLane: LaneBitwise + LaneVector<Element = Self>;

    fn bitand(self, rhs: Self) -> Self;
    fn bitor(self, rhs: Self) -> Self;
    fn bitxor(self, rhs: Self) -> Self;
}

impl BitwiseScalar for i32 {
    type BitLane = I32x4;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self ^ rhs
    }
}

impl BitwiseScalar for i64 {
    type BitLane = I64x2;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self ^ rhs
    }
}

/// Scalars with 4-, 8- and 16-wide lanes for the adaptive kernels.
pub trait AdaptiveScalar: Scalar {
    type Lane4: LaneArith + LaneVector<Element = Self>;
    type Lane8: LaneArith + LaneVector<Element = Self>;
    type Lane16: LaneArith + LaneVector<Element = Self>;
}

impl AdaptiveScalar for f32 {
    type Lane4 = F32x4;
    type Lane8 = F32x8;
    type Lane16 = F32x16;
}
