//! Flatten a tensor to two dimensions around one axis.

use ndarray::{Array2, ArrayBase, Data, Dimension, Order};

use crate::axis::resolve_axis;
use crate::error::TensorError;

/// Flatten a tensor to shape `[shape[axis], -1]`.
///
/// The extent of `axis` is kept as the leading dimension and every element is
/// laid out by a plain row-major reshape. The axis is NOT moved to the front
/// first, so for `axis != 0` the rows of the result are not slices along
/// `axis`; they are consecutive runs of the row-major element order.
///
/// `axis` may be negative to count from the end.
///
/// # Errors
///
/// - `TensorError::RankTooSmall` if the input has fewer than 2 dimensions
/// - `TensorError::AxisOutOfRange` if `axis` does not name a dimension
///
/// # Example
///
/// ```
/// use ndarray::Array;
/// use tensorops::operations::flatten;
///
/// let t = Array::from_iter(0..24).into_shape_with_order((2, 3, 4)).unwrap();
/// let f = flatten(&t, 0).unwrap();
/// assert_eq!(f.shape(), &[2, 12]);
///
/// // axis=2 keeps 4 rows, but they are row-major runs of 6 elements
/// let f = flatten(&t, 2).unwrap();
/// assert_eq!(f.shape(), &[4, 6]);
/// assert_eq!(f.row(1).to_vec(), vec![6, 7, 8, 9, 10, 11]);
/// ```
pub fn flatten<A, S, D>(input: &ArrayBase<S, D>, axis: isize) -> Result<Array2<A>, TensorError>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    let shape = input.shape();
    if shape.len() < 2 {
        return Err(TensorError::RankTooSmall {
            min: 2,
            actual: shape.len(),
        });
    }
    let axis = resolve_axis(axis, shape.len())?;

    let dim = shape[axis];
    let rest: usize = shape
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != axis)
        .map(|(_, &d)| d)
        .product();
    log::trace!("flatten {:?} at axis {} -> [{}, {}]", shape, axis, dim, rest);

    let out = input.to_shape(((dim, rest), Order::RowMajor))?;
    Ok(out.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, Array1, ArrayD, IxDyn, arr2};

    #[test]
    fn test_flatten_2d_is_identity_at_axis_0() {
        let t = arr2(&[[1, 2, 3], [4, 5, 6]]);
        let f = flatten(&t, 0).unwrap();
        assert_eq!(f, t);
    }

    #[test]
    fn test_flatten_2d_axis_1_reshapes_without_transpose() {
        let t = arr2(&[[1, 2, 3], [4, 5, 6]]);
        let f = flatten(&t, 1).unwrap();
        assert_eq!(f, arr2(&[[1, 2], [3, 4], [5, 6]]));
    }

    #[test]
    fn test_flatten_negative_axis() {
        let t = Array::from_iter(0..24).into_shape_with_order((2, 3, 4)).unwrap();
        let a = flatten(&t, -1).unwrap();
        let b = flatten(&t, 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape(), &[4, 6]);
    }

    #[test]
    fn test_flatten_preserves_row_major_order() {
        let t = Array::from_iter(0..60)
            .into_shape_with_order((3, 4, 5))
            .unwrap();
        for axis in 0..3 {
            let f = flatten(&t, axis).unwrap();
            assert_eq!(f.shape()[0], t.shape()[axis as usize]);
            let flat: Vec<i32> = f.iter().copied().collect();
            assert_eq!(flat, (0..60).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_flatten_non_contiguous_input() {
        let t = arr2(&[[1, 2, 3], [4, 5, 6]]);
        let transposed = t.t();
        let f = flatten(&transposed, 0).unwrap();
        assert_eq!(f, arr2(&[[1, 4], [2, 5], [3, 6]]));
    }

    #[test]
    fn test_flatten_dyn() {
        let t = ArrayD::<f64>::zeros(IxDyn(&[2, 3, 4, 5]));
        let f = flatten(&t, 1).unwrap();
        assert_eq!(f.shape(), &[3, 40]);
    }

    #[test]
    fn test_flatten_zero_extent() {
        let t = ArrayD::<f64>::zeros(IxDyn(&[0, 3]));
        let f = flatten(&t, 0).unwrap();
        assert_eq!(f.shape(), &[0, 3]);
    }

    #[test]
    fn test_flatten_rank_too_small() {
        let t = Array1::from(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            flatten(&t, 0),
            Err(TensorError::RankTooSmall { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_flatten_axis_out_of_range() {
        let t = arr2(&[[1, 2], [3, 4]]);
        assert!(matches!(
            flatten(&t, 2),
            Err(TensorError::AxisOutOfRange { axis: 2, ndim: 2 })
        ));
    }
}
