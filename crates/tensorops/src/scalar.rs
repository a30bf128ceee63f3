//! Scalar trait for floating-point element types.

use ndarray::ScalarOperand;
use num_traits::Float;
use std::fmt::Debug;

/// Trait for real floating-point element types supported by the activations.
///
/// This wraps `num_traits::Float` with the bounds ndarray needs for scalar
/// broadcasting, plus `Send + Sync` so rows can be processed in parallel.
pub trait Real: Float + ScalarOperand + Debug + Default + Send + Sync + 'static {
    /// Convert a count (e.g. a support size) into this type.
    fn from_usize(n: usize) -> Self;
}

impl Real for f32 {
    fn from_usize(n: usize) -> Self {
        n as f32
    }
}

impl Real for f64 {
    fn from_usize(n: usize) -> Self {
        n as f64
    }
}
