//! Kernel configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::VectorKernel`].
///
/// Configuration only steers routing in the type-erased entry points. It
/// never changes the numeric result of add, multiply or scale; `sum` may
/// differ within floating-point reassociation tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Route f32 add/multiply/scale/sum through the adaptive-width kernels
    /// when dispatching on a runtime kind.
    pub prefer_optimized: bool,
}

impl KernelConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the adaptive-width kernels are preferred.
    pub fn with_prefer_optimized(mut self, prefer: bool) -> Self {
        self.prefer_optimized = prefer;
        self
    }
}
