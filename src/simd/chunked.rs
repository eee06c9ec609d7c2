//! The shared lane/remainder routines behind every kernel.
//!
//! Each routine handles `lanes` full lanes of type `L` starting at element
//! `start` and returns the index one past the last element it touched. The
//! caller picks the lane type (fixed per kind, or per segment from
//! [`crate::simd::width::Cascade`]) and finishes with the matching scalar
//! tail routine.

use crate::simd::traits::{LaneArith, LaneVector};
use crate::types::Scalar;

/// Combine `a` and `b` lane by lane into `out`.
#[inline]
pub fn zip_lanes<L, F>(
    a: &[L::Element],
    b: &[L::Element],
    out: &mut [L::Element],
    start: usize,
    lanes: usize,
    lane_op: F,
) -> usize
where
    L: LaneVector,
    F: Fn(L, L) -> L,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(out.len() >= start + lanes * L::LANES);

    for i in 0..lanes {
        let offset = start + i * L::LANES;
        let va = L::load(&a[offset..]);
        let vb = L::load(&b[offset..]);
        lane_op(va, vb).store(&mut out[offset..]);
    }

    start + lanes * L::LANES
}

/// Scalar tail for [`zip_lanes`].
#[inline]
pub fn zip_tail<T, F>(a: &[T], b: &[T], out: &mut [T], start: usize, scalar_op: F)
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    for i in start..a.len() {
        out[i] = scalar_op(a[i], b[i]);
    }
}

/// Transform `v` lane by lane into `out`.
#[inline]
pub fn map_lanes<L, F>(v: &[L::Element], out: &mut [L::Element], start: usize, lanes: usize, lane_op: F) -> usize
where
    L: LaneVector,
    F: Fn(L) -> L,
{
    debug_assert!(out.len() >= start + lanes * L::LANES);

    for i in 0..lanes {
        let offset = start + i * L::LANES;
        lane_op(L::load(&v[offset..])).store(&mut out[offset..]);
    }

    start + lanes * L::LANES
}

/// Scalar tail for [`map_lanes`].
#[inline]
pub fn map_tail<T, F>(v: &[T], out: &mut [T], start: usize, scalar_op: F)
where
    T: Copy,
    F: Fn(T) -> T,
{
    for i in start..v.len() {
        out[i] = scalar_op(v[i]);
    }
}

/// Sum full lanes into a lane-wide accumulator, reducing it once at the end.
#[inline]
pub fn sum_lanes<T, L>(v: &[T], start: usize, lanes: usize) -> (T, usize)
where
    T: Scalar,
    L: LaneArith + LaneVector<Element = T>,
{
    let mut acc = L::zero();

    for i in 0..lanes {
        let offset = start + i * L::LANES;
        acc = acc.add(L::load(&v[offset..]));
    }

    (acc.horizontal_sum(), start + lanes * L::LANES)
}

/// Multiply full lanes and reduce each product immediately into `total`.
#[inline]
pub fn dot_lanes<T, L>(a: &[T], b: &[T], start: usize, lanes: usize, total: &mut T) -> usize
where
    T: Scalar,
    L: LaneArith + LaneVector<Element = T>,
{
    debug_assert_eq!(a.len(), b.len());

    for i in 0..lanes {
        let offset = start + i * L::LANES;
        let va = L::load(&a[offset..]);
        let vb = L::load(&b[offset..]);
        *total = Scalar::wrapping_add(*total, va.dot(vb));
    }

    start + lanes * L::LANES
}

/// Number of full lanes of type `L` in `len` elements.
#[inline]
pub fn full_lanes<L: LaneVector>(len: usize) -> usize {
    len / L::LANES
}
