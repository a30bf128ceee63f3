//! Hardmax: one-hot of the arg-max along the last axis.

use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, Dimension, Zip};
use num_traits::{One, Zero};

use crate::error::TensorError;

/// Return batched one-hot vectors marking the maximum along the last axis.
///
/// All leading dimensions are treated as batch dimensions. The output has the
/// input's shape and element type. Ties go to the first occurrence of the
/// maximum.
///
/// # Errors
///
/// Returns `TensorError::RankTooSmall` for a rank-0 input, which has no last
/// axis to take the depth from.
///
/// # Example
///
/// ```
/// use ndarray::arr2;
/// use tensorops::operations::hardmax;
///
/// let h = hardmax(&arr2(&[[3.0, 1.0, 2.0], [0.0, 0.0, 5.0]])).unwrap();
/// assert_eq!(h, arr2(&[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]));
/// ```
pub fn hardmax<A, S, D>(logits: &ArrayBase<S, D>) -> Result<Array<A, D>, TensorError>
where
    A: Clone + PartialOrd + Zero + One,
    S: Data<Elem = A>,
    D: Dimension,
{
    let ndim = logits.ndim();
    if ndim == 0 {
        return Err(TensorError::RankTooSmall { min: 1, actual: 0 });
    }
    let depth_axis = Axis(ndim - 1);
    log::trace!(
        "hardmax over {:?} with depth {}",
        logits.shape(),
        logits.len_of(depth_axis)
    );

    let mut out = Array::zeros(logits.raw_dim());
    Zip::from(out.lanes_mut(depth_axis))
        .and(logits.lanes(depth_axis))
        .for_each(|mut dest, lane| {
            if let Some(i) = first_argmax(lane) {
                dest[i] = A::one();
            }
        });
    Ok(out)
}

fn first_argmax<A: PartialOrd>(lane: ArrayView1<'_, A>) -> Option<usize> {
    let mut iter = lane.iter().enumerate();
    let (mut best, mut best_val) = iter.next()?;
    for (i, v) in iter {
        if v > best_val {
            best = i;
            best_val = v;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, ArrayD, IxDyn, arr0, arr1, arr2, arr3};

    #[test]
    fn test_hardmax_integer_logits() {
        let h = hardmax(&arr2(&[[3, 1, 2], [0, 0, 5]])).unwrap();
        assert_eq!(h, arr2(&[[1, 0, 0], [0, 0, 1]]));
    }

    #[test]
    fn test_hardmax_ties_pick_first() {
        let h = hardmax(&arr2(&[[2.0, 7.0, 7.0], [1.0, 1.0, 1.0]])).unwrap();
        assert_eq!(h, arr2(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]));
    }

    #[test]
    fn test_hardmax_1d() {
        let h = hardmax(&arr1(&[0.1f32, 0.9, 0.3])).unwrap();
        assert_eq!(h, arr1(&[0.0f32, 1.0, 0.0]));
    }

    #[test]
    fn test_hardmax_3d_uses_last_axis() {
        let logits = arr3(&[[[1.0, 4.0], [5.0, 2.0]], [[0.0, -1.0], [-3.0, -2.0]]]);
        let h = hardmax(&logits).unwrap();
        assert_eq!(
            h,
            arr3(&[[[0.0, 1.0], [1.0, 0.0]], [[1.0, 0.0], [0.0, 1.0]]])
        );
    }

    #[test]
    fn test_hardmax_non_contiguous() {
        let logits = arr2(&[[1.0, 9.0], [3.0, 2.0]]);
        let h = hardmax(&logits.t()).unwrap();
        // transposed rows are [1, 3] and [9, 2]
        assert_eq!(h, arr2(&[[0.0, 1.0], [1.0, 0.0]]));
    }

    #[test]
    fn test_hardmax_one_hot_per_row() {
        let logits = ArrayD::from_shape_fn(IxDyn(&[4, 3, 5]), |ix| {
            ((ix[0] * 7 + ix[1] * 3 + ix[2] * 11) % 13) as f64
        });
        let h = hardmax(&logits).unwrap();
        for lane in h.lanes(Axis(2)) {
            assert_eq!(lane.iter().filter(|&&v| v == 1.0).count(), 1);
            assert_eq!(lane.iter().filter(|&&v| v == 0.0).count(), 4);
        }
    }

    #[test]
    fn test_hardmax_zero_depth() {
        let h = hardmax(&Array2::<f64>::zeros((2, 0))).unwrap();
        assert_eq!(h.dim(), (2, 0));
        let h = hardmax(&Array1::<f64>::zeros(0)).unwrap();
        assert!(h.is_empty());
    }

    #[test]
    fn test_hardmax_rank_0() {
        assert!(matches!(
            hardmax(&arr0(1.0)),
            Err(TensorError::RankTooSmall { min: 1, actual: 0 })
        ));
    }
}
