//! Fixed-width element-wise kernels.
//!
//! Every operation walks the input in lanes of the kind's default width
//! (four, or two for `i64`) and finishes the remainder with the same scalar
//! arithmetic the lanes use. Integer arithmetic wraps on both paths.

use crate::error::{check_non_empty, check_pair, Result};
use crate::kernel::VectorKernel;
use crate::simd::chunked::{
    dot_lanes, full_lanes, map_lanes, map_tail, sum_lanes, zip_lanes, zip_tail,
};
use crate::simd::traits::{LaneAdd, LaneMul, LaneVector};
use crate::types::Scalar;

impl VectorKernel {
    /// Add two vectors element-wise.
    ///
    /// Fails with `MismatchedLengths` if the lengths differ, then with
    /// `EmptyInput` if they are empty.
    pub fn add<T: Scalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        check_pair(a, b)?;

        let mut result = vec![T::zero(); a.len()];
        let lanes = full_lanes::<T::Lane>(a.len());
        let end = zip_lanes::<T::Lane, _>(a, b, &mut result, 0, lanes, |x, y| x.add(y));
        zip_tail(a, b, &mut result, end, T::wrapping_add);

        Ok(result)
    }

    /// Multiply two vectors element-wise.
    pub fn multiply<T: Scalar>(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        check_pair(a, b)?;

        let mut result = vec![T::zero(); a.len()];
        let lanes = full_lanes::<T::Lane>(a.len());
        let end = zip_lanes::<T::Lane, _>(a, b, &mut result, 0, lanes, |x, y| x.mul(y));
        zip_tail(a, b, &mut result, end, T::wrapping_mul);

        Ok(result)
    }

    /// Multiply every element by `scalar`.
    pub fn scale<T: Scalar>(&self, vector: &[T], scalar: T) -> Result<Vec<T>> {
        check_non_empty(vector)?;

        let mut result = vec![T::zero(); vector.len()];
        let factor = <T::Lane as LaneVector>::splat(scalar);
        let lanes = full_lanes::<T::Lane>(vector.len());
        let end = map_lanes::<T::Lane, _>(vector, &mut result, 0, lanes, |x| x.mul(factor));
        map_tail(vector, &mut result, end, |x| x.wrapping_mul(scalar));

        Ok(result)
    }

    /// Sum all elements.
    ///
    /// Full lanes accumulate into a lane-wide register that is reduced once;
    /// the remainder is added to that scalar afterwards.
    pub fn sum<T: Scalar>(&self, vector: &[T]) -> Result<T> {
        check_non_empty(vector)?;

        let lanes = full_lanes::<T::Lane>(vector.len());
        let (mut total, end) = sum_lanes::<T, T::Lane>(vector, 0, lanes);
        for &x in &vector[end..] {
            total = total.wrapping_add(x);
        }

        Ok(total)
    }

    /// Dot product of two vectors.
    ///
    /// Each lane product is reduced as soon as it is computed and added to a
    /// running scalar.
    pub fn dot_product<T: Scalar>(&self, a: &[T], b: &[T]) -> Result<T> {
        check_pair(a, b)?;

        let mut total = T::zero();
        let lanes = full_lanes::<T::Lane>(a.len());
        let end = dot_lanes::<T, T::Lane>(a, b, 0, lanes, &mut total);
        for i in end..a.len() {
            total = total.wrapping_add(a[i].wrapping_mul(b[i]));
        }

        Ok(total)
    }
}
