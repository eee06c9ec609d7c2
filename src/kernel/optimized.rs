//! Adaptive-width kernels.
//!
//! Same contracts as the fixed-width kernels, but each input is walked with
//! the widest lane that still fits: 16, then 8, then 4, then scalar. Add,
//! multiply and scale are exactly equal to their fixed-width counterparts;
//! sum agrees within floating-point reassociation.

use crate::error::{check_non_empty, check_pair, Result};
use crate::kernel::VectorKernel;
use crate::simd::chunked::{map_lanes, map_tail, sum_lanes, zip_lanes, zip_tail};
use crate::simd::traits::LaneArith;
use crate::simd::width::{cascade, LaneWidth};
use crate::types::{AdaptiveScalar, Scalar};

/// Binary arithmetic selectable per segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithOp {
    Add,
    Mul,
}

impl ArithOp {
    #[inline]
    fn lane<L: LaneArith>(self, a: L, b: L) -> L {
        match self {
            ArithOp::Add => a.add(b),
            ArithOp::Mul => a.mul(b),
        }
    }

    #[inline]
    fn scalar<T: Scalar>(self, a: T, b: T) -> T {
        match self {
            ArithOp::Add => a.wrapping_add(b),
            ArithOp::Mul => a.wrapping_mul(b),
        }
    }
}

fn zip_adaptive<T: AdaptiveScalar>(a: &[T], b: &[T], op: ArithOp) -> Vec<T> {
    let mut result = vec![T::zero(); a.len()];
    let mut plan = cascade(a.len());

    for seg in plan.by_ref() {
        log::trace!("adaptive {:?}: {} x {:?} at {}", op, seg.lanes, seg.width, seg.start);
        match seg.width {
            LaneWidth::W16 => {
                zip_lanes::<T::Lane16, _>(a, b, &mut result, seg.start, seg.lanes, |x, y| op.lane(x, y));
            }
            LaneWidth::W8 => {
                zip_lanes::<T::Lane8, _>(a, b, &mut result, seg.start, seg.lanes, |x, y| op.lane(x, y));
            }
            LaneWidth::W4 => {
                zip_lanes::<T::Lane4, _>(a, b, &mut result, seg.start, seg.lanes, |x, y| op.lane(x, y));
            }
        }
    }

    zip_tail(a, b, &mut result, plan.tail_start(), |x, y| op.scalar(x, y));
    result
}

fn scale_lanes<L: LaneArith>(v: &[L::Element], out: &mut [L::Element], start: usize, lanes: usize, scalar: L::Element) {
    let factor = L::splat(scalar);
    map_lanes::<L, _>(v, out, start, lanes, |x| x.mul(factor));
}

impl VectorKernel {
    /// [`VectorKernel::add`] with adaptive lane width.
    pub fn add_optimized<T: AdaptiveScalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        check_pair(a, b)?;
        Ok(zip_adaptive(a, b, ArithOp::Add))
    }

    /// [`VectorKernel::multiply`] with adaptive lane width.
    pub fn multiply_optimized<T: AdaptiveScalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        check_pair(a, b)?;
        Ok(zip_adaptive(a, b, ArithOp::Mul))
    }

    /// [`VectorKernel::scale`] with adaptive lane width.
    pub fn scale_optimized<T: AdaptiveScalar>(&self, vector: &[T], scalar: T) -> Result<Vec<T>> {
        check_non_empty(vector)?;

        let mut result = vec![T::zero(); vector.len()];
        let mut plan = cascade(vector.len());

        for seg in plan.by_ref() {
            match seg.width {
                LaneWidth::W16 => scale_lanes::<T::Lane16>(vector, &mut result, seg.start, seg.lanes, scalar),
                LaneWidth::W8 => scale_lanes::<T::Lane8>(vector, &mut result, seg.start, seg.lanes, scalar),
                LaneWidth::W4 => scale_lanes::<T::Lane4>(vector, &mut result, seg.start, seg.lanes, scalar),
            }
        }

        map_tail(vector, &mut result, plan.tail_start(), |x| x.wrapping_mul(scalar));
        Ok(result)
    }

    /// [`VectorKernel::sum`] with adaptive lane width.
    ///
    /// Each width's segment is reduced on its own and added to one running
    /// scalar total.
    pub fn sum_optimized<T: AdaptiveScalar>(&self, vector: &[T]) -> Result<T> {
        check_non_empty(vector)?;

        let mut total = T::zero();
        let mut plan = cascade(vector.len());

        for seg in plan.by_ref() {
            let (partial, _) = match seg.width {
                LaneWidth::W16 => sum_lanes::<T, T::Lane16>(vector, seg.start, seg.lanes),
                LaneWidth::W8 => sum_lanes::<T, T::Lane8>(vector, seg.start, seg.lanes),
                LaneWidth::W4 => sum_lanes::<T, T::Lane4>(vector, seg.start, seg.lanes),
            };
            total = total.wrapping_add(partial);
        }

        for &x in &vector[plan.tail_start()..] {
            total = total.wrapping_add(x);
        }

        Ok(total)
    }
}
