//! Sparsemax activation.
//!
//! Sparsemax (Martins & Astudillo, 2016, <https://arxiv.org/abs/1602.02068>)
//! projects each row of logits onto the probability simplex:
//!
//! ```text
//! sparsemax[i, j] = max(z[i, j] - tau(z[i, :]), 0)
//!
//! z        = logits - mean(logits, axis=1)
//! z_sorted = sort_descending(z)
//! z_cumsum = cumsum(z_sorted)
//! k_z      = #{ k in 1..=K : 1 + k * z_sorted[k-1] > z_cumsum[k-1] }
//! tau      = (z_cumsum[k_z - 1] - 1) / k_z
//! ```

use std::cmp::Ordering;

use ndarray::{Array2, ArrayBase, ArrayD, ArrayView1, ArrayViewMut1, Data, Ix2, IxDyn, Zip};

use crate::error::TensorError;
use crate::scalar::Real;

/// Compute sparsemax activations for a `[observations, classes]` tensor.
///
/// Every output row is non-negative and sums to one (up to roundoff); classes
/// scoring below the row threshold get exact zeros. With the `rayon` feature
/// rows are processed in parallel.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use ndarray::arr2;
/// use tensorops::operations::sparsemax;
///
/// let p = sparsemax(&arr2(&[[0.0, 0.5, 3.0], [1.0, 1.0, 1.0]]));
/// assert_eq!(p.row(0).to_vec(), vec![0.0, 0.0, 1.0]);
/// for &v in p.row(1) {
///     assert_relative_eq!(v, 1.0 / 3.0, epsilon = 1e-12);
/// }
/// ```
pub fn sparsemax<T, S>(logits: &ArrayBase<S, Ix2>) -> Array2<T>
where
    T: Real,
    S: Data<Elem = T>,
{
    let (obs, classes) = logits.dim();
    log::trace!("sparsemax over [{}, {}]", obs, classes);

    let mut out = Array2::zeros((obs, classes));
    if classes == 0 {
        return out;
    }

    let rows = Zip::from(out.rows_mut()).and(logits.rows());
    #[cfg(feature = "rayon")]
    rows.par_for_each(|dest, row| sparsemax_row(row, dest));
    #[cfg(not(feature = "rayon"))]
    rows.for_each(|dest, row| sparsemax_row(row, dest));

    out
}

/// Sparsemax for dynamically-shaped input.
///
/// # Errors
///
/// Returns `TensorError::RankMismatch` unless `logits` has rank 2.
pub fn sparsemax_dyn<T, S>(logits: &ArrayBase<S, IxDyn>) -> Result<ArrayD<T>, TensorError>
where
    T: Real,
    S: Data<Elem = T>,
{
    if logits.ndim() != 2 {
        return Err(TensorError::RankMismatch {
            expected: 2,
            actual: logits.ndim(),
        });
    }
    let logits = logits.view().into_dimensionality::<Ix2>()?;
    Ok(sparsemax(&logits).into_dyn())
}

fn sparsemax_row<T: Real>(logits: ArrayView1<'_, T>, mut dest: ArrayViewMut1<'_, T>) {
    let n = logits.len();
    let mean = logits.sum() / T::from_usize(n);
    let z = logits.mapv(|x| x - mean);

    let mut z_sorted = z.to_vec();
    z_sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    // k_z counts the true entries of the support test rather than locating the
    // last one; the test is monotone so both agree.
    let mut z_cumsum = Vec::with_capacity(n);
    let mut running = T::zero();
    let mut k_z = 0usize;
    for (k, &zk) in z_sorted.iter().enumerate() {
        running = running + zk;
        z_cumsum.push(running);
        if T::one() + T::from_usize(k + 1) * zk > running {
            k_z += 1;
        }
    }

    // Only NaN input can empty the support.
    if k_z == 0 {
        dest.fill(T::nan());
        return;
    }

    let tau = (z_cumsum[k_z - 1] - T::one()) / T::from_usize(k_z);
    Zip::from(&mut dest)
        .and(&z)
        .for_each(|d, &zj| *d = (zj - tau).max(T::zero()));
}
