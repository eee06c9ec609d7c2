//! Error types for lane-chunked kernels.
//!
//! Every operation validates its inputs before any lane work is done, so an
//! error always means "nothing was computed".

use std::fmt;
use thiserror::Error;

/// Payload-free discriminant of a [`SimdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Two vector operands differ in length.
    MismatchedLengths,
    /// Matrix operands do not agree on their shared dimension.
    InvalidMatrixDimensions,
    /// A runtime-dispatched scalar kind has no implementation.
    UnsupportedType,
    /// An operand (vector, matrix or matrix row) is empty.
    EmptyInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MismatchedLengths => write!(f, "MISMATCHED_LENGTHS"),
            ErrorKind::InvalidMatrixDimensions => write!(f, "INVALID_MATRIX_DIMENSIONS"),
            ErrorKind::UnsupportedType => write!(f, "UNSUPPORTED_TYPE"),
            ErrorKind::EmptyInput => write!(f, "EMPTY_INPUT"),
        }
    }
}

/// Main error type for kernel operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimdError {
    /// Vectors have mismatched lengths.
    #[error("vector lengths do not match: {len_a} != {len_b}")]
    MismatchedLengths { len_a: usize, len_b: usize },

    /// Matrix dimensions are invalid for the requested operation.
    #[error("invalid matrix dimensions: {message}")]
    InvalidMatrixDimensions { message: String },

    /// The scalar kind is not supported by the requested operation.
    #[error("unsupported type for SIMD operations: {name}")]
    UnsupportedType { name: String },

    /// Input is empty where non-empty input is required.
    #[error("empty input provided where non-empty input is required")]
    EmptyInput,
}

impl SimdError {
    /// Create a length mismatch error.
    pub fn mismatched(len_a: usize, len_b: usize) -> Self {
        Self::MismatchedLengths { len_a, len_b }
    }

    /// Create an invalid matrix dimensions error.
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidMatrixDimensions {
            message: message.into(),
        }
    }

    /// Create an unsupported type error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedType { name: name.into() }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimdError::MismatchedLengths { .. } => ErrorKind::MismatchedLengths,
            SimdError::InvalidMatrixDimensions { .. } => ErrorKind::InvalidMatrixDimensions,
            SimdError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            SimdError::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

/// Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, SimdError>;

/// Check the binary-operand preconditions in order: lengths first, then emptiness.
#[inline]
pub(crate) fn check_pair<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(SimdError::mismatched(a.len(), b.len()));
    }
    check_non_empty(a)
}

#[inline]
pub(crate) fn check_non_empty<T>(v: &[T]) -> Result<()> {
    if v.is_empty() {
        return Err(SimdError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SimdError::mismatched(3, 0);
        assert_eq!(err.kind(), ErrorKind::MismatchedLengths);
        assert_eq!(err, SimdError::MismatchedLengths { len_a: 3, len_b: 0 });
    }

    #[test]
    fn test_error_display() {
        let err = SimdError::mismatched(4, 2);
        assert_eq!(format!("{}", err), "vector lengths do not match: 4 != 2");

        let err = SimdError::invalid_dimensions("A columns (3) must equal B rows (2)");
        let display = format!("{}", err);
        assert!(display.starts_with("invalid matrix dimensions"));
        assert!(display.contains("(3)"));

        let err = SimdError::unsupported("f16");
        assert!(format!("{}", err).contains("f16"));

        assert!(format!("{}", SimdError::EmptyInput).contains("empty input"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::EmptyInput.to_string(), "EMPTY_INPUT");
        assert_eq!(SimdError::unsupported("u8").kind().to_string(), "UNSUPPORTED_TYPE");
    }

    #[test]
    fn test_check_pair_order() {
        // Length is checked before emptiness.
        let a = [1.0f32, 2.0, 3.0];
        let b: [f32; 0] = [];
        assert_eq!(check_pair(&a, &b), Err(SimdError::mismatched(3, 0)));

        let empty: [f32; 0] = [];
        assert_eq!(check_pair(&empty, &empty), Err(SimdError::EmptyInput));
        assert!(check_pair(&a, &a).is_ok());
    }
}
