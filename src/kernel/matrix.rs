//! Dense matrix multiply.
//!
//! Matrices are row-major `Vec<Vec<T>>`. Each output cell is a dot product
//! along the shared dimension using the kind's default lanes: row elements
//! load contiguously, column elements are gathered one at a time.

use crate::error::{Result, SimdError};
use crate::kernel::VectorKernel;
use crate::simd::traits::{LaneArith, LaneVector};
use crate::types::Scalar;

/// A dense row-major matrix.
pub type Matrix<T> = Vec<Vec<T>>;

/// Validate `A (m x p) * B (p x n)` and return `(m, p, n)`.
///
/// The leading checks run in a fixed order: A has rows, A has columns, B has
/// `p` rows, B has columns. Ragged rows are rejected afterwards.
fn check_dimensions<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<(usize, usize, usize)> {
    let m = a.len();
    if m == 0 {
        return Err(SimdError::EmptyInput);
    }

    let p = a[0].len();
    if p == 0 {
        return Err(SimdError::EmptyInput);
    }

    if b.len() != p {
        return Err(SimdError::invalid_dimensions(format!(
            "A columns ({}) must equal B rows ({})",
            p,
            b.len()
        )));
    }

    let n = b[0].len();
    if n == 0 {
        return Err(SimdError::EmptyInput);
    }

    check_rows("A", a, p)?;
    check_rows("B", b, n)?;

    Ok((m, p, n))
}

fn check_rows<T>(name: &str, rows: &[Vec<T>], cols: usize) -> Result<()> {
    for (r, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(SimdError::EmptyInput);
        }
        if row.len() != cols {
            return Err(SimdError::invalid_dimensions(format!(
                "row {} of {} has {} columns, expected {}",
                r,
                name,
                row.len(),
                cols
            )));
        }
    }
    Ok(())
}

impl VectorKernel {
    /// Multiply `a` (m x p) by `b` (p x n).
    pub fn matrix_multiply<T: Scalar>(&self, a: &[Vec<T>], b: &[Vec<T>]) -> Result<Matrix<T>> {
        let (m, p, n) = check_dimensions(a, b)?;

        let width = T::Lane::LANES;
        let lanes = p / width;
        let tail = lanes * width;

        let mut result = vec![vec![T::zero(); n]; m];
        let mut column = vec![T::zero(); width];

        for i in 0..m {
            let row = &a[i];
            for j in 0..n {
                let mut sum = T::zero();

                for k in 0..lanes {
                    let offset = k * width;
                    for idx in 0..width {
                        column[idx] = b[offset + idx][j];
                    }
                    let va = <T::Lane as LaneVector>::load(&row[offset..]);
                    let vb = <T::Lane as LaneVector>::load(&column);
                    sum = sum.wrapping_add(LaneArith::dot(va, vb));
                }

                for k in tail..p {
                    sum = sum.wrapping_add(row[k].wrapping_mul(b[k][j]));
                }

                result[i][j] = sum;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_matrix_multiply_2x2() {
        let kernel = VectorKernel::new();
        let a = vec![vec![1.0f32, 2.0], vec![3.0, 4.0]];
        let b = vec![vec![5.0f32, 6.0], vec![7.0, 8.0]];
        assert_eq!(kernel.matrix_multiply(&a, &b).unwrap(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn test_matrix_multiply_uses_lanes_and_tail() {
        let kernel = VectorKernel::new();
        // p = 6: one full lane of four plus two tail elements.
        let a = vec![vec![1i32, 2, 3, 4, 5, 6]];
        let b: Vec<Vec<i32>> = (0..6).map(|k| vec![1, k]).collect();
        assert_eq!(kernel.matrix_multiply(&a, &b).unwrap(), vec![vec![21, 70]]);
    }

    #[test]
    fn test_matrix_multiply_identity_f64() {
        let kernel = VectorKernel::new();
        let a: Vec<Vec<f64>> = (0..5).map(|r| (0..5).map(|c| (r * 5 + c) as f64).collect()).collect();
        let identity: Vec<Vec<f64>> = (0..5)
            .map(|r| (0..5).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
            .collect();
        assert_eq!(kernel.matrix_multiply(&a, &identity).unwrap(), a);
        assert_eq!(kernel.matrix_multiply(&identity, &a).unwrap(), a);
    }

    #[test]
    fn test_matrix_multiply_i64_rectangular() {
        let kernel = VectorKernel::new();
        let a = vec![vec![1i64, 2, 3]];
        let b = vec![vec![4i64], vec![5], vec![6]];
        assert_eq!(kernel.matrix_multiply(&a, &b).unwrap(), vec![vec![32]]);
    }

    #[test]
    fn test_invalid_dimensions() {
        let kernel = VectorKernel::new();
        let a = vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let b = vec![vec![7.0f32, 8.0], vec![9.0, 10.0]];
        let err = kernel.matrix_multiply(&a, &b).unwrap_err();
        assert_eq!(err, SimdError::invalid_dimensions("A columns (3) must equal B rows (2)"));
    }

    #[test]
    fn test_empty_inputs() {
        let kernel = VectorKernel::new();
        let empty: Vec<Vec<f32>> = vec![];
        let b = vec![vec![1.0f32]];

        assert_eq!(kernel.matrix_multiply(&empty, &b), Err(SimdError::EmptyInput));
        assert_eq!(kernel.matrix_multiply(&[vec![]], &b), Err(SimdError::EmptyInput));
        assert_eq!(kernel.matrix_multiply(&[vec![1.0f32]], &[vec![]]), Err(SimdError::EmptyInput));
    }

    #[test]
    fn test_ragged_rows() {
        let kernel = VectorKernel::new();
        let a = vec![vec![1i32, 2], vec![3]];
        let b = vec![vec![1i32, 0], vec![0, 1]];
        let err = kernel.matrix_multiply(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMatrixDimensions);
        assert!(err.to_string().contains("row 1 of A"));

        let a = vec![vec![1i32, 2]];
        let b = vec![vec![1i32, 0], vec![]];
        assert_eq!(kernel.matrix_multiply(&a, &b), Err(SimdError::EmptyInput));
    }
}
