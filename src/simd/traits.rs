//! Core lane traits defining the interface for vectorized operations.
//!
//! A lane is a fixed-width value holding a copy of `LANES` contiguous scalars.
//! Kernels are written once against these traits and instantiated with the
//! concrete lanes from [`crate::simd::portable`].

use std::fmt;

/// Base trait for all lane types.
pub trait LaneVector: Sized + Copy + Clone + Send + Sync + fmt::Debug {
    /// The scalar element type.
    type Element: Copy + Default;

    /// Number of scalars in the lane.
    const LANES: usize;

    /// Create a lane with every element set to zero.
    fn zero() -> Self;

    /// Create a lane with every element set to the same value.
    fn splat(value: Self::Element) -> Self;

    /// Load a lane from the front of a slice (must have at least LANES elements).
    fn load(slice: &[Self::Element]) -> Self;

    /// Store the lane into the front of a mutable slice.
    fn store(self, slice: &mut [Self::Element]);

    /// Copy the lane out into a Vec.
    fn to_vec(self) -> Vec<Self::Element> {
        let mut out = vec![Self::Element::default(); Self::LANES];
        self.store(&mut out);
        out
    }
}

/// Lanes that support element-wise addition.
pub trait LaneAdd: LaneVector {
    /// Add two lanes element-wise.
    fn add(self, other: Self) -> Self;
}

/// Lanes that support element-wise multiplication.
pub trait LaneMul: LaneVector {
    /// Multiply two lanes element-wise.
    fn mul(self, other: Self) -> Self;

    /// Multiply every element by a broadcast scalar.
    fn scale(self, scalar: Self::Element) -> Self {
        self.mul(Self::splat(scalar))
    }
}

/// Lanes that can collapse to a single scalar.
pub trait LaneHorizontal: LaneVector {
    /// Sum all elements, first to last.
    fn horizontal_sum(self) -> Self::Element;
}

/// Everything the arithmetic kernels need from a lane.
pub trait LaneArith: LaneAdd + LaneMul + LaneHorizontal {
    /// Dot product of two lanes: multiply, then reduce.
    fn dot(self, other: Self) -> Self::Element {
        self.mul(other).horizontal_sum()
    }
}

impl<T: LaneAdd + LaneMul + LaneHorizontal> LaneArith for T {}

/// Integer lanes that support bitwise operations.
pub trait LaneBitwise: LaneVector {
    /// Bitwise AND.
    fn bitand(self, other: Self) -> Self;

    /// Bitwise OR.
    fn bitor(self, other: Self) -> Self;

    /// Bitwise XOR.
    fn bitxor(self, other: Self) -> Self;
}
