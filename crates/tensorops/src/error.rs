//! Error types for tensorops.

use ndarray::ShapeError;
use thiserror::Error;

/// Errors that can occur in tensor helper operations.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Operation requires a minimum tensor rank.
    #[error("expected tensor of rank at least {min}, got rank {actual}")]
    RankTooSmall { min: usize, actual: usize },

    /// Operation requires specific tensor rank.
    #[error("expected tensor of rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// Axis argument does not name a dimension of the tensor.
    #[error("axis {axis} is out of range for tensor with {ndim} dimensions")]
    AxisOutOfRange { axis: isize, ndim: usize },

    /// Shape error reported by ndarray (reshape, concatenate).
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Sparse tuple encoding needs at least one non-empty row.
    #[error("cannot build a sparse tuple: all {rows} sequences are empty")]
    EmptySequences { rows: usize },

    /// Indices and values of a sparse tuple differ in length.
    #[error("sparse tuple has {indices} indices but {values} values")]
    LengthMismatch { indices: usize, values: usize },

    /// Row id of a sparse index lies outside the dense shape.
    #[error("row index {row} is out of range for {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// Row ids of a sparse tuple must be non-decreasing.
    #[error("row index {row} follows row index {previous}; rows must be non-decreasing")]
    UnorderedRows { row: usize, previous: usize },

    /// Columns of a row must run 0, 1, 2, ... without gaps.
    #[error("row {row}: expected column {expected}, got {actual}")]
    NonContiguousColumn {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Column of a sparse index lies outside the dense shape.
    #[error("column index {column} is out of range for {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
}
