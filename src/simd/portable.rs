//! Portable lane implementations using the `wide` crate.
//!
//! These work on any platform; `wide` lowers them to SSE/AVX/NEON/SIMD128
//! where the target allows and to plain arrays otherwise.
//!
//! Horizontal sums fold first to last so that a lane reduction matches the
//! scalar loop over the same elements.

use wide::{f32x4, f32x8, f64x4, i32x4, i64x2};

use crate::simd::traits::*;

// ============================================================================
// F32x4 - 4-lane f32
// ============================================================================

/// 4-lane f32 vector.
#[derive(Clone, Copy, Debug)]
pub struct F32x4(pub f32x4);

impl LaneVector for F32x4 {
    type Element = f32;
    const LANES: usize = 4;

    #[inline]
    fn zero() -> Self {
        Self(f32x4::ZERO)
    }

    #[inline]
    fn splat(value: f32) -> Self {
        Self(f32x4::splat(value))
    }

    #[inline]
    fn load(slice: &[f32]) -> Self {
        debug_assert!(slice.len() >= 4);
        Self(f32x4::new([slice[0], slice[1], slice[2], slice[3]]))
    }

    #[inline]
    fn store(self, slice: &mut [f32]) {
        debug_assert!(slice.len() >= 4);
        slice[..4].copy_from_slice(&self.0.to_array());
    }
}

impl LaneAdd for F32x4 {
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl LaneMul for F32x4 {
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl LaneHorizontal for F32x4 {
    #[inline]
    fn horizontal_sum(self) -> f32 {
        let arr = self.0.to_array();
        arr[0] + arr[1] + arr[2] + arr[3]
    }
}

// ============================================================================
// F32x8 - 8-lane f32
// ============================================================================

/// 8-lane f32 vector.
#[derive(Clone, Copy, Debug)]
pub struct F32x8(pub f32x8);

impl LaneVector for F32x8 {
    type Element = f32;
    const LANES: usize = 8;

    #[inline]
    fn zero() -> Self {
        Self(f32x8::ZERO)
    }

    #[inline]
    fn splat(value: f32) -> Self {
        Self(f32x8::splat(value))
    }

    #[inline]
    fn load(slice: &[f32]) -> Self {
        debug_assert!(slice.len() >= 8);
        Self(f32x8::new([
            slice[0], slice[1], slice[2], slice[3],
            slice[4], slice[5], slice[6], slice[7],
        ]))
    }

    #[inline]
    fn store(self, slice: &mut [f32]) {
        debug_assert!(slice.len() >= 8);
        slice[..8].copy_from_slice(&self.0.to_array());
    }
}

impl LaneAdd for F32x8 {
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl LaneMul for F32x8 {
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl LaneHorizontal for F32x8 {
    #[inline]
    fn horizontal_sum(self) -> f32 {
        let arr = self.0.to_array();
        arr[0] + arr[1] + arr[2] + arr[3] + arr[4] + arr[5] + arr[6] + arr[7]
    }
}

// ============================================================================
// F32x16 - 16-lane f32, two 8-lane halves
// ============================================================================

/// 16-lane f32 vector.
#[derive(Clone, Copy, Debug)]
pub struct F32x16(pub [f32x8; 2]);

impl LaneVector for F32x16 {
    type Element = f32;
    const LANES: usize = 16;

    #[inline]
    fn zero() -> Self {
        Self([f32x8::ZERO; 2])
    }

    #[inline]
    fn splat(value: f32) -> Self {
        Self([f32x8::splat(value); 2])
    }

    #[inline]
    fn load(slice: &[f32]) -> Self {
        debug_assert!(slice.len() >= 16);
        Self([F32x8::load(slice).0, F32x8::load(&slice[8..]).0])
    }

    #[inline]
    fn store(self, slice: &mut [f32]) {
        debug_assert!(slice.len() >= 16);
        F32x8(self.0[0]).store(slice);
        F32x8(self.0[1]).store(&mut slice[8..]);
    }
}

impl LaneAdd for F32x16 {
    #[inline]
    fn add(self, other: Self) -> Self {
        Self([self.0[0] + other.0[0], self.0[1] + other.0[1]])
    }
}

impl LaneMul for F32x16 {
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self([self.0[0] * other.0[0], self.0[1] * other.0[1]])
    }
}

impl LaneHorizontal for F32x16 {
    #[inline]
    fn horizontal_sum(self) -> f32 {
        F32x8(self.0[0]).horizontal_sum() + F32x8(self.0[1]).horizontal_sum()
    }
}

// ============================================================================
// F64x4 - 4-lane f64
// ============================================================================

/// 4-lane f64 vector.
#[derive(Clone, Copy, Debug)]
pub struct F64x4(pub f64x4);

impl LaneVector for F64x4 {
    type Element = f64;
    const LANES: usize = 4;

    #[inline]
    fn zero() -> Self {
        Self(f64x4::splat(0.0))
    }

    #[inline]
    fn splat(value: f64) -> Self {
        Self(f64x4::splat(value))
    }

    #[inline]
    fn load(slice: &[f64]) -> Self {
        debug_assert!(slice.len() >= 4);
        Self(f64x4::new([slice[0], slice[1], slice[2], slice[3]]))
    }

    #[inline]
    fn store(self, slice: &mut [f64]) {
        debug_assert!(slice.len() >= 4);
        slice[..4].copy_from_slice(&self.0.to_array());
    }
}

impl LaneAdd for F64x4 {
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl LaneMul for F64x4 {
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl LaneHorizontal for F64x4 {
    #[inline]
    fn horizontal_sum(self) -> f64 {
        let arr = self.0.to_array();
        arr[0] + arr[1] + arr[2] + arr[3]
    }
}

// ============================================================================
// I32x4 - 4-lane i32, wrapping
// ============================================================================

/// 4-lane i32 vector. Arithmetic wraps on overflow.
#[derive(Clone, Copy, Debug)]
pub struct I32x4(pub i32x4);

impl LaneVector for I32x4 {
    type Element = i32;
    const LANES: usize = 4;

    #[inline]
    fn zero() -> Self {
        Self(i32x4::splat(0))
    }

    #[inline]
    fn splat(value: i32) -> Self {
        Self(i32x4::splat(value))
    }

    #[inline]
    fn load(slice: &[i32]) -> Self {
        debug_assert!(slice.len() >= 4);
        Self(i32x4::new([slice[0], slice[1], slice[2], slice[3]]))
    }

    #[inline]
    fn store(self, slice: &mut [i32]) {
        debug_assert!(slice.len() >= 4);
        slice[..4].copy_from_slice(&self.0.to_array());
    }
}

impl LaneAdd for I32x4 {
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl LaneMul for I32x4 {
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl LaneHorizontal for I32x4 {
    #[inline]
    fn horizontal_sum(self) -> i32 {
        self.0.to_array().iter().fold(0i32, |acc, &x| acc.wrapping_add(x))
    }
}

impl LaneBitwise for I32x4 {
    #[inline]
    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    fn bitxor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

// ============================================================================
// I64x2 - 2-lane i64, wrapping
// ============================================================================

/// 2-lane i64 vector. Arithmetic wraps on overflow.
#[derive(Clone, Copy, Debug)]
pub struct I64x2(pub i64x2);

impl LaneVector for I64x2 {
    type Element = i64;
    const LANES: usize = 2;

    #[inline]
    fn zero() -> Self {
        Self(i64x2::splat(0))
    }

    #[inline]
    fn splat(value: i64) -> Self {
        Self(i64x2::splat(value))
    }

    #[inline]
    fn load(slice: &[i64]) -> Self {
        debug_assert!(slice.len() >= 2);
        Self(i64x2::new([slice[0], slice[1]]))
    }

    #[inline]
    fn store(self, slice: &mut [i64]) {
        debug_assert!(slice.len() >= 2);
        slice[..2].copy_from_slice(&self.0.to_array());
    }
}

impl LaneAdd for I64x2 {
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl LaneMul for I64x2 {
    #[inline]
    fn mul(self, other: Self) -> Self {
        // No packed 64-bit low multiply below AVX-512DQ.
        let a = self.0.to_array();
        let b = other.0.to_array();
        Self(i64x2::new([a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])]))
    }
}

impl LaneHorizontal for I64x2 {
    #[inline]
    fn horizontal_sum(self) -> i64 {
        let arr = self.0.to_array();
        arr[0].wrapping_add(arr[1])
    }
}

impl LaneBitwise for I64x2 {
    #[inline]
    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    fn bitxor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}
