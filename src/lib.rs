//! # lanekit - Lane-chunked SIMD kernels
//!
//! Portable SIMD kernels for numeric vectors of `f32`, `f64`, `i32` and `i64`.
//!
//! ## Overview
//!
//! Every kernel processes its input in fixed-width lanes and finishes the
//! remainder with scalar code, so inputs of any length are handled:
//!
//! - **Element-wise**: add, multiply and scale
//! - **Reductions**: sum and dot product
//! - **Bitwise**: AND, OR and XOR over integer vectors
//! - **Matrix multiply**: dense row-major `A (m x p) * B (p x n)`
//! - **Adaptive width**: f32 kernels that step 16, 8, 4 lanes wide
//! - **Runtime dispatch**: [`DynVector`] for kinds known only at runtime
//!
//! Integer arithmetic wraps on overflow in both the lane and scalar paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use lanekit::prelude::*;
//!
//! let kernel = VectorKernel::new();
//!
//! let a = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
//! let b = vec![5.0f32, 4.0, 3.0, 2.0, 1.0];
//!
//! assert_eq!(kernel.add(&a, &b).unwrap(), vec![6.0; 5]);
//! assert_eq!(kernel.dot_product(&a, &b).unwrap(), 35.0);
//! assert_eq!(kernel.sum(&[1i64, 2, 3]).unwrap(), 6);
//!
//! // Length is checked before emptiness.
//! let err = kernel.add(&a, &[]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MismatchedLengths);
//! ```
//!
//! ## Matrix Multiply
//!
//! ```rust
//! use lanekit::prelude::*;
//!
//! let kernel = VectorKernel::new();
//! let a = vec![vec![1.0f32, 2.0], vec![3.0, 4.0]];
//! let b = vec![vec![5.0f32, 6.0], vec![7.0, 8.0]];
//! assert_eq!(kernel.matrix_multiply(&a, &b).unwrap(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//! ```
//!
//! ## Runtime Kinds
//!
//! ```rust
//! use lanekit::prelude::*;
//!
//! let kind: ScalarKind = "int32".parse().unwrap();
//! assert_eq!(kind, ScalarKind::I32);
//!
//! let kernel = VectorKernel::new();
//! let a = DynVector::from(vec![1i32, 2, 3]);
//! let b = DynVector::from(vec![1.0f32, 2.0, 3.0]);
//! let err = kernel.add_dyn(&a, &b).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedType);
//! ```
//!
//! ## Lane Widths
//!
//! | Kind | Fixed-width lane | Adaptive lanes |
//! |------|------------------|----------------|
//! | `f32` | 4 | 16, 8, 4 |
//! | `f64` | 4 | - |
//! | `i32` | 4 | - |
//! | `i64` | 2 | - |
//!
//! ## Module Overview
//!
//! - [`kernel`]: The [`VectorKernel`] operations
//! - [`dynamic`]: Runtime-typed vectors and dispatch
//! - [`simd`]: Low-level lanes, width planning and chunking

#![allow(clippy::needless_range_loop)]

pub mod dynamic;
pub mod kernel;
pub mod simd;

mod config;
mod error;
mod types;

pub use config::KernelConfig;
pub use dynamic::{DynScalar, DynVector};
pub use error::{ErrorKind, Result, SimdError};
pub use kernel::{BitOp, Matrix, VectorKernel};
pub use types::{AdaptiveScalar, BitwiseScalar, Scalar, ScalarKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::KernelConfig;
    pub use crate::dynamic::{DynScalar, DynVector};
    pub use crate::error::{ErrorKind, Result, SimdError};
    pub use crate::kernel::{BitOp, Matrix, VectorKernel};
    pub use crate::types::{AdaptiveScalar, BitwiseScalar, Scalar, ScalarKind};
}
