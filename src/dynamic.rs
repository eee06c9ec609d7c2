//! Runtime dispatch over scalar kinds.
//!
//! Callers that only learn the element kind at runtime (from a config file,
//! a wire header, a column type) wrap their data in [`DynVector`]. Mixing
//! kinds, or asking for an operation a kind does not implement, yields
//! `UnsupportedType` instead of panicking.

use crate::error::{Result, SimdError};
use crate::kernel::{BitOp, VectorKernel};
use crate::types::ScalarKind;

/// A vector whose element kind is known only at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum DynVector {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I32(Vec<i32>),
    I64(Vec<i64>),
}

/// A scalar whose kind is known only at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DynScalar {
    F32(f32),
    F64(f64),
    I32(i32),
    I64(i64),
}

impl DynVector {
    /// Element kind.
    pub fn kind(&self) -> ScalarKind {
        match self {
            DynVector::F32(_) => ScalarKind::F32,
            DynVector::F64(_) => ScalarKind::F64,
            DynVector::I32(_) => ScalarKind::I32,
            DynVector::I64(_) => ScalarKind::I64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            DynVector::F32(v) => v.len(),
            DynVector::F64(v) => v.len(),
            DynVector::I32(v) => v.len(),
            DynVector::I64(v) => v.len(),
        }
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DynScalar {
    /// Scalar kind.
    pub fn kind(&self) -> ScalarKind {
        match self {
            DynScalar::F32(_) => ScalarKind::F32,
            DynScalar::F64(_) => ScalarKind::F64,
            DynScalar::I32(_) => ScalarKind::I32,
            DynScalar::I64(_) => ScalarKind::I64,
        }
    }
}

macro_rules! impl_from_vec {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$t>> for DynVector {
                fn from(v: Vec<$t>) -> Self {
                    DynVector::$variant(v)
                }
            }

            impl From<$t> for DynScalar {
                fn from(x: $t) -> Self {
                    DynScalar::$variant(x)
                }
            }
        )*
    };
}

impl_from_vec!(f32 => F32, f64 => F64, i32 => I32, i64 => I64);

fn mixed(a: ScalarKind, b: ScalarKind) -> SimdError {
    SimdError::unsupported(format!("mixed kinds {} and {}", a, b))
}

impl VectorKernel {
    /// [`VectorKernel::add`] on runtime-typed operands.
    pub fn add_dyn(&self, a: &DynVector, b: &DynVector) -> Result<DynVector> {
        match (a, b) {
            (DynVector::F32(a), DynVector::F32(b)) if self.config().prefer_optimized => {
                log::trace!("add_dyn: f32 routed to adaptive kernel");
                self.add_optimized(a, b).map(DynVector::F32)
            }
            (DynVector::F32(a), DynVector::F32(b)) => self.add(a, b).map(DynVector::F32),
            (DynVector::F64(a), DynVector::F64(b)) => self.add(a, b).map(DynVector::F64),
            (DynVector::I32(a), DynVector::I32(b)) => self.add(a, b).map(DynVector::I32),
            (DynVector::I64(a), DynVector::I64(b)) => self.add(a, b).map(DynVector::I64),
            _ => Err(mixed(a.kind(), b.kind())),
        }
    }

    /// [`VectorKernel::multiply`] on runtime-typed operands.
    pub fn multiply_dyn(&self, a: &DynVector, b: &DynVector) -> Result<DynVector> {
        match (a, b) {
            (DynVector::F32(a), DynVector::F32(b)) if self.config().prefer_optimized => {
                log::trace!("multiply_dyn: f32 routed to adaptive kernel");
                self.multiply_optimized(a, b).map(DynVector::F32)
            }
            (DynVector::F32(a), DynVector::F32(b)) => self.multiply(a, b).map(DynVector::F32),
            (DynVector::F64(a), DynVector::F64(b)) => self.multiply(a, b).map(DynVector::F64),
            (DynVector::I32(a), DynVector::I32(b)) => self.multiply(a, b).map(DynVector::I32),
            (DynVector::I64(a), DynVector::I64(b)) => self.multiply(a, b).map(DynVector::I64),
            _ => Err(mixed(a.kind(), b.kind())),
        }
    }

    /// [`VectorKernel::scale`] on runtime-typed operands.
    pub fn scale_dyn(&self, vector: &DynVector, scalar: DynScalar) -> Result<DynVector> {
        match (vector, scalar) {
            (DynVector::F32(v), DynScalar::F32(k)) if self.config().prefer_optimized => {
                log::trace!("scale_dyn: f32 routed to adaptive kernel");
                self.scale_optimized(v, k).map(DynVector::F32)
            }
            (DynVector::F32(v), DynScalar::F32(k)) => self.scale(v, k).map(DynVector::F32),
            (DynVector::F64(v), DynScalar::F64(k)) => self.scale(v, k).map(DynVector::F64),
            (DynVector::I32(v), DynScalar::I32(k)) => self.scale(v, k).map(DynVector::I32),
            (DynVector::I64(v), DynScalar::I64(k)) => self.scale(v, k).map(DynVector::I64),
            _ => Err(mixed(vector.kind(), scalar.kind())),
        }
    }

    /// [`VectorKernel::sum`] on a runtime-typed operand.
    pub fn sum_dyn(&self, vector: &DynVector) -> Result<DynScalar> {
        match vector {
            DynVector::F32(v) if self.config().prefer_optimized => {
                log::trace!("sum_dyn: f32 routed to adaptive kernel");
                self.sum_optimized(v).map(DynScalar::F32)
            }
            DynVector::F32(v) => self.sum(v).map(DynScalar::F32),
            DynVector::F64(v) => self.sum(v).map(DynScalar::F64),
            DynVector::I32(v) => self.sum(v).map(DynScalar::I32),
            DynVector::I64(v) => self.sum(v).map(DynScalar::I64),
        }
    }

    /// [`VectorKernel::dot_product`] on runtime-typed operands.
    pub fn dot_product_dyn(&self, a: &DynVector, b: &DynVector) -> Result<DynScalar> {
        match (a, b) {
            (DynVector::F32(a), DynVector::F32(b)) => self.dot_product(a, b).map(DynScalar::F32),
            (DynVector::F64(a), DynVector::F64(b)) => self.dot_product(a, b).map(DynScalar::F64),
            (DynVector::I32(a), DynVector::I32(b)) => self.dot_product(a, b).map(DynScalar::I32),
            (DynVector::I64(a), DynVector::I64(b)) => self.dot_product(a, b).map(DynScalar::I64),
            _ => Err(mixed(a.kind(), b.kind())),
        }
    }

    /// [`VectorKernel::bitwise`] on runtime-typed operands.
    ///
    /// Float kinds have no bitwise kernel and fail with `UnsupportedType`.
    pub fn bitwise_dyn(&self, op: BitOp, a: &DynVector, b: &DynVector) -> Result<DynVector> {
        match (a, b) {
            (DynVector::I32(a), DynVector::I32(b)) => self.bitwise(op, a, b).map(DynVector::I32),
            (DynVector::I64(a), DynVector::I64(b)) => self.bitwise(op, a, b).map(DynVector::I64),
            _ if a.kind() != b.kind() => Err(mixed(a.kind(), b.kind())),
            _ => Err(SimdError::unsupported(format!("{:?} on {}", op, a.kind()))),
        }
    }
}
