//! Concatenation of two tensors.

use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis, concatenate};

use crate::axis::resolve_axis;
use crate::error::TensorError;

/// Concatenate two tensors along `axis`.
///
/// Both tensors must have the same rank. All other dimensions must agree;
/// that check is left to `ndarray::concatenate` and surfaces as
/// `TensorError::Shape`. `axis` may be negative to count from the end.
///
/// # Errors
///
/// - `TensorError::RankMismatch` if the ranks differ
/// - `TensorError::AxisOutOfRange` if `axis` does not name a dimension
/// - `TensorError::Shape` if the off-axis dimensions differ
///
/// # Example
///
/// ```
/// use ndarray::arr2;
/// use tensorops::operations::concat;
///
/// let a = arr2(&[[1, 2], [3, 4]]);
/// let b = arr2(&[[5], [6]]);
/// let c = concat(&a, &b, -1).unwrap();
/// assert_eq!(c, arr2(&[[1, 2, 5], [3, 4, 6]]));
/// ```
pub fn concat<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    axis: isize,
) -> Result<Array<A, D>, TensorError>
where
    A: Clone,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: RemoveAxis,
{
    if a.ndim() != b.ndim() {
        return Err(TensorError::RankMismatch {
            expected: a.ndim(),
            actual: b.ndim(),
        });
    }
    let axis = resolve_axis(axis, a.ndim())?;
    log::trace!(
        "concat {:?} and {:?} along axis {}",
        a.shape(),
        b.shape(),
        axis
    );

    Ok(concatenate(Axis(axis), &[a.view(), b.view()])?)
}
