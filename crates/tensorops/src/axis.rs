//! Signed axis resolution.
//!
//! Axis arguments follow the usual array-library convention: non-negative
//! values index from the front, negative values count back from the last
//! dimension (`-1` is the last axis).

use crate::error::TensorError;

/// Resolve a signed axis against a tensor rank.
///
/// # Errors
///
/// Returns `TensorError::AxisOutOfRange` if `axis` is not in `-ndim..ndim`.
///
/// # Examples
///
/// ```
/// use tensorops::axis::resolve_axis;
///
/// assert_eq!(resolve_axis(0, 3).unwrap(), 0);
/// assert_eq!(resolve_axis(-1, 3).unwrap(), 2);
/// assert!(resolve_axis(3, 3).is_err());
/// ```
pub fn resolve_axis(axis: isize, ndim: usize) -> Result<usize, TensorError> {
    let resolved = if axis < 0 {
        ndim.checked_sub(axis.unsigned_abs())
    } else {
        Some(axis as usize).filter(|&a| a < ndim)
    };
    resolved.ok_or(TensorError::AxisOutOfRange { axis, ndim })
}
