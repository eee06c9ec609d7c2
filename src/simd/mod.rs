//! SIMD abstraction layer.
//!
//! Lanes are portable `wide` vectors; the kernels never reach for
//! architecture intrinsics directly.
//!
//! # Architecture
//!
//! The module is organized into layers:
//! - `traits`: Core lane traits that define the interface
//! - `portable`: Lane implementations using the `wide` crate
//! - `width`: Lane width planning for the adaptive kernels
//! - `chunked`: Shared full-lane and scalar-tail loops
//! - `chunks`: Splitting slices into lanes plus a remainder and back
//! - `dispatch`: Runtime CPU feature detection
//!
//! # Usage
//!
//! ```rust
//! use lanekit::simd::{F32x4, LaneArith, LaneVector};
//!
//! let a = F32x4::load(&[1.0, 2.0, 3.0, 4.0]);
//! let b = F32x4::splat(2.0);
//! assert_eq!(a.dot(b), 20.0);
//! ```

pub mod traits;
pub mod portable;
pub mod width;
pub mod chunked;
pub mod chunks;
pub mod dispatch;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use traits::{LaneAdd, LaneArith, LaneBitwise, LaneHorizontal, LaneMul, LaneVector};
pub use portable::{F32x16, F32x4, F32x8, F64x4, I32x4, I64x2};
pub use width::{cascade, Cascade, LaneSegment, LaneWidth};
pub use chunks::{from_lane_chunks, to_lane_chunks};
pub use dispatch::{simd_support_level, SimdSupportLevel};
