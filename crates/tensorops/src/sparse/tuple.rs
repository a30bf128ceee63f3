//! Sparse triple encoding of ragged integer rows.
//!
//! A list of rows such as `[[1, 2], [1], [1, 2, 3, 4, 5], [2, 5, 2, 6]]` is
//! stored as `(indices, values, shape)`:
//!
//! ```text
//! indices = [[0,0],[0,1],[1,0],[2,0],[2,1],[2,2],[2,3],[2,4],[3,0],[3,1],[3,2],[3,3]]
//! values  = [1,2,1,1,2,3,4,5,2,5,2,6]
//! shape   = [4, 5]            // number of rows, longest row
//! ```

use ndarray::{Array1, Array2};

use crate::error::TensorError;

/// A 2-D sparse triple of `(indices, values, shape)`.
///
/// Invariants, checked by [`SparseTuple::new`]:
/// - `indices.len() == values.len()`
/// - row ids are non-decreasing and below `shape[0]`
/// - within a row the columns run `0, 1, 2, ...` and stay below `shape[1]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseTuple<T> {
    indices: Vec<[usize; 2]>,
    values: Vec<T>,
    shape: [usize; 2],
}

impl<T> SparseTuple<T> {
    /// Build a sparse triple from raw parts.
    ///
    /// # Errors
    ///
    /// - `TensorError::LengthMismatch` if indices and values differ in length
    /// - `TensorError::RowOutOfRange` if a row id is `>= shape[0]`
    /// - `TensorError::UnorderedRows` if row ids decrease
    /// - `TensorError::NonContiguousColumn` if a row's columns skip or repeat
    /// - `TensorError::ColumnOutOfRange` if a column is `>= shape[1]`
    ///
    /// # Example
    ///
    /// ```
    /// use tensorops::sparse::SparseTuple;
    ///
    /// let st = SparseTuple::new(vec![[0, 0], [0, 1], [2, 0]], vec![7, 8, 9], [3, 2]).unwrap();
    /// assert_eq!(st.nnz(), 3);
    ///
    /// // second entry of row 0 must sit in column 1
    /// assert!(SparseTuple::new(vec![[0, 0], [0, 2]], vec![7, 8], [1, 3]).is_err());
    /// ```
    pub fn new(
        indices: Vec<[usize; 2]>,
        values: Vec<T>,
        shape: [usize; 2],
    ) -> Result<Self, TensorError> {
        validate(&indices, values.len(), shape)?;
        Ok(Self {
            indices,
            values,
            shape,
        })
    }

    /// `(row, column)` pairs in storage order.
    #[inline]
    pub fn indices(&self) -> &[[usize; 2]] {
        &self.indices
    }

    /// Values parallel to [`indices`](Self::indices).
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Dense shape `[num_rows, max_row_len]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.shape[0]
    }

    #[inline]
    pub fn max_row_len(&self) -> usize {
        self.shape[1]
    }

    /// Indices as an `[nnz, 2]` array.
    pub fn indices_array(&self) -> Array2<usize> {
        Array2::from_shape_fn((self.indices.len(), 2), |(i, j)| self.indices[i][j])
    }

    /// Values as a 1-D array.
    pub fn values_array(&self) -> Array1<T>
    where
        T: Clone,
    {
        Array1::from(self.values.clone())
    }

    /// Consume the triple, returning `(indices, values, shape)`.
    pub fn into_parts(self) -> (Vec<[usize; 2]>, Vec<T>, [usize; 2]) {
        (self.indices, self.values, self.shape)
    }
}

fn validate(indices: &[[usize; 2]], values: usize, shape: [usize; 2]) -> Result<(), TensorError> {
    if indices.len() != values {
        return Err(TensorError::LengthMismatch {
            indices: indices.len(),
            values,
        });
    }

    // (row, next expected column) of the previous entry
    let mut prev: Option<(usize, usize)> = None;
    for &[row, col] in indices {
        if row >= shape[0] {
            return Err(TensorError::RowOutOfRange {
                row,
                rows: shape[0],
            });
        }
        let expected = match prev {
            Some((prev_row, next)) if prev_row == row => next,
            Some((prev_row, _)) if prev_row > row => {
                return Err(TensorError::UnorderedRows {
                    row,
                    previous: prev_row,
                });
            }
            _ => 0,
        };
        if col != expected {
            return Err(TensorError::NonContiguousColumn {
                row,
                expected,
                actual: col,
            });
        }
        if col >= shape[1] {
            return Err(TensorError::ColumnOutOfRange {
                column: col,
                columns: shape[1],
            });
        }
        prev = Some((row, col + 1));
    }
    Ok(())
}

/// Encode ragged rows as a sparse triple.
///
/// Row `n` gets indices `(n, 0), (n, 1), ...` and `values` is the row-major
/// concatenation of all rows. `shape` is `[rows.len(), longest row]`. Empty
/// rows are allowed as long as one row is non-empty.
///
/// # Errors
///
/// Returns `TensorError::EmptySequences` if there are no entries at all.
///
/// # Example
///
/// ```
/// use tensorops::sparse::sparse_tuple_from;
///
/// let st = sparse_tuple_from(&[vec![1, 2], vec![1], vec![1, 2, 3, 4, 5], vec![2, 5, 2, 6]]).unwrap();
/// assert_eq!(st.shape(), [4, 5]);
/// assert_eq!(&st.indices()[..3], &[[0, 0], [0, 1], [1, 0]]);
/// assert_eq!(st.values(), &[1, 2, 1, 1, 2, 3, 4, 5, 2, 5, 2, 6]);
/// ```
pub fn sparse_tuple_from<T, R>(sequences: &[R]) -> Result<SparseTuple<T>, TensorError>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let nnz: usize = sequences.iter().map(|s| s.as_ref().len()).sum();
    let mut indices = Vec::with_capacity(nnz);
    let mut values = Vec::with_capacity(nnz);
    let mut max_len = 0;

    for (n, seq) in sequences.iter().enumerate() {
        let seq = seq.as_ref();
        indices.extend((0..seq.len()).map(|col| [n, col]));
        values.extend_from_slice(seq);
        max_len = max_len.max(seq.len());
    }

    if indices.is_empty() {
        return Err(TensorError::EmptySequences {
            rows: sequences.len(),
        });
    }
    log::debug!(
        "encoded {} sequences into sparse tuple with {} entries, shape [{}, {}]",
        sequences.len(),
        nnz,
        sequences.len(),
        max_len
    );

    Ok(SparseTuple {
        indices,
        values,
        shape: [sequences.len(), max_len],
    })
}

/// Decode a sparse triple back into ragged rows.
///
/// Entries are counted per row id over `0..shape[0]` and `values` is cut into
/// consecutive runs of those lengths. Rows without entries, wherever they sit,
/// decode as empty rows.
///
/// # Example
///
/// ```
/// use tensorops::sparse::{SparseTuple, decode_sparse_tuple};
///
/// let st = SparseTuple::new(vec![[0, 0], [0, 1], [2, 0]], vec![1, 2, 3], [4, 2]).unwrap();
/// let rows = decode_sparse_tuple(&st);
/// assert_eq!(rows, vec![vec![1, 2], vec![], vec![3], vec![]]);
/// ```
pub fn decode_sparse_tuple<T: Clone>(sparse: &SparseTuple<T>) -> Vec<Vec<T>> {
    let mut counts = vec![0usize; sparse.num_rows()];
    for &[row, _] in &sparse.indices {
        counts[row] += 1;
    }

    let mut rest = sparse.values.as_slice();
    counts
        .into_iter()
        .map(|count| {
            let (row, tail) = rest.split_at(count);
            rest = tail;
            row.to_vec()
        })
        .collect()
}
