//! C API for tensorops
//!
//! This crate provides a C-compatible interface to the tensorops helpers,
//! allowing them to be called from Python, Julia, C, and other languages.
//!
//! All buffers are row-major and caller-allocated; every function returns a
//! status code. All extern "C" functions are inherently unsafe as they work
//! with raw pointers from foreign code.

#![allow(clippy::not_unsafe_ptr_arg_deref)]

use libc::{c_double, c_int, c_long, size_t};
use ndarray::{ArrayD, ArrayView2, ArrayViewD, IxDyn};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::slice;
use tensorops::{
    SparseTuple, TensorError, decode_sparse_tuple, flatten, hardmax, sparse_tuple_from, sparsemax,
};

// Status codes
pub type StatusCode = c_int;

pub const TOPS_SUCCESS: StatusCode = 0;
pub const TOPS_INVALID_ARGUMENT: StatusCode = -1;
pub const TOPS_SHAPE_MISMATCH: StatusCode = -2;
pub const TOPS_INDEX_OUT_OF_BOUNDS: StatusCode = -3;
pub const TOPS_INTERNAL_ERROR: StatusCode = -4;
pub const TOPS_RANK_MISMATCH: StatusCode = -5;
pub const TOPS_EMPTY_INPUT: StatusCode = -6;

fn status_of(err: &TensorError) -> StatusCode {
    match err {
        TensorError::RankTooSmall { .. } | TensorError::RankMismatch { .. } => TOPS_RANK_MISMATCH,
        TensorError::AxisOutOfRange { .. }
        | TensorError::RowOutOfRange { .. }
        | TensorError::ColumnOutOfRange { .. } => TOPS_INDEX_OUT_OF_BOUNDS,
        TensorError::Shape(_)
        | TensorError::LengthMismatch { .. }
        | TensorError::UnorderedRows { .. }
        | TensorError::NonContiguousColumn { .. } => TOPS_SHAPE_MISMATCH,
        TensorError::EmptySequences { .. } => TOPS_EMPTY_INPUT,
    }
}

/// Run `body`, turning errors and panics into status codes.
fn guard(body: impl FnOnce() -> Result<(), StatusCode>) -> StatusCode {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => TOPS_SUCCESS,
        Ok(Err(code)) => code,
        Err(_) => TOPS_INTERNAL_ERROR,
    }
}

/// Borrow `len` elements at `ptr`; a null pointer is only accepted for `len == 0`.
unsafe fn input<'a, T>(ptr: *const T, len: usize) -> Result<&'a [T], StatusCode> {
    if len == 0 {
        Ok(&[])
    } else if ptr.is_null() {
        Err(TOPS_INVALID_ARGUMENT)
    } else {
        Ok(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

unsafe fn output<'a, T>(ptr: *mut T, len: usize) -> Result<&'a mut [T], StatusCode> {
    if len == 0 {
        Ok(&mut [])
    } else if ptr.is_null() {
        Err(TOPS_INVALID_ARGUMENT)
    } else {
        Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
    }
}

fn element_count(shape: &[usize]) -> Result<usize, StatusCode> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(TOPS_INVALID_ARGUMENT)
}

// ============================================================================
// Activations
// ============================================================================

/// Sparsemax over a row-major `[rows, cols]` buffer.
///
/// # Arguments
/// * `logits` - Input buffer of `rows * cols` values
/// * `rows` - Number of observations
/// * `cols` - Number of classes
/// * `out` - Output buffer of `rows * cols` values
///
/// # Returns
/// Status code
#[unsafe(no_mangle)]
pub extern "C" fn tops_sparsemax_f64(
    logits: *const c_double,
    rows: size_t,
    cols: size_t,
    out: *mut c_double,
) -> StatusCode {
    guard(|| {
        let len = element_count(&[rows, cols])?;
        let logits = unsafe { input(logits, len)? };
        let out = unsafe { output(out, len)? };

        let view =
            ArrayView2::from_shape((rows, cols), logits).map_err(|_| TOPS_SHAPE_MISMATCH)?;
        let result = sparsemax(&view);
        for (dest, &v) in out.iter_mut().zip(result.iter()) {
            *dest = v;
        }
        Ok(())
    })
}

/// Hardmax along the last axis of a row-major buffer.
///
/// # Arguments
/// * `logits` - Input buffer
/// * `shape` - Pointer to array of dimensions
/// * `ndim` - Number of dimensions (at least 1)
/// * `out` - Output buffer with as many elements as `logits`
///
/// # Returns
/// Status code
#[unsafe(no_mangle)]
pub extern "C" fn tops_hardmax_f64(
    logits: *const c_double,
    shape: *const size_t,
    ndim: size_t,
    out: *mut c_double,
) -> StatusCode {
    guard(|| {
        let shape = unsafe { input(shape, ndim)? };
        let len = element_count(shape)?;
        let logits = unsafe { input(logits, len)? };
        let out = unsafe { output(out, len)? };

        let view =
            ArrayViewD::from_shape(IxDyn(shape), logits).map_err(|_| TOPS_SHAPE_MISMATCH)?;
        let result = hardmax(&view).map_err(|e| status_of(&e))?;
        for (dest, &v) in out.iter_mut().zip(result.iter()) {
            *dest = v;
        }
        Ok(())
    })
}

// ============================================================================
// Shape functions
// ============================================================================

/// Compute the 2-D shape a row-major buffer takes after `flatten`.
///
/// Flattening never reorders a row-major buffer, so only the shape changes.
///
/// # Arguments
/// * `shape` - Pointer to array of dimensions
/// * `ndim` - Number of dimensions (at least 2)
/// * `axis` - Axis to keep; negative counts from the end
/// * `out_shape` - Output array of 2 elements
///
/// # Returns
/// Status code
#[unsafe(no_mangle)]
pub extern "C" fn tops_flatten_shape(
    shape: *const size_t,
    ndim: size_t,
    axis: c_long,
    out_shape: *mut size_t,
) -> StatusCode {
    guard(|| {
        let shape = unsafe { input(shape, ndim)? };
        let out_shape = unsafe { output(out_shape, 2)? };

        // zero-sized elements: only the shape is computed
        let placeholder = ArrayD::from_elem(IxDyn(shape), ());
        let flat = flatten(&placeholder, axis as isize).map_err(|e| status_of(&e))?;
        out_shape.copy_from_slice(flat.shape());
        Ok(())
    })
}

// ============================================================================
// Sparse tuples
// ============================================================================

/// Total number of entries for the given row lengths.
#[unsafe(no_mangle)]
pub extern "C" fn tops_sparse_tuple_nnz(lengths: *const size_t, nrows: size_t) -> size_t {
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe { input(lengths, nrows) }.map_or(0, |l| l.iter().sum())
    }));
    result.unwrap_or(0)
}

/// Encode ragged `i64` rows as a sparse triple.
///
/// # Arguments
/// * `values` - Concatenated row values (`nnz` elements)
/// * `lengths` - Length of each row (`nrows` elements)
/// * `nrows` - Number of rows
/// * `out_indices` - Output of `2 * nnz` elements, `(row, column)` pairs
/// * `out_values` - Output of `nnz` elements
/// * `out_shape` - Output of 2 elements, `[nrows, max_row_len]`
///
/// # Returns
/// Status code; `TOPS_EMPTY_INPUT` when every row is empty
#[unsafe(no_mangle)]
pub extern "C" fn tops_sparse_tuple_from_i64(
    values: *const i64,
    lengths: *const size_t,
    nrows: size_t,
    out_indices: *mut size_t,
    out_values: *mut i64,
    out_shape: *mut size_t,
) -> StatusCode {
    guard(|| {
        let lengths = unsafe { input(lengths, nrows)? };
        let nnz = lengths
            .iter()
            .try_fold(0usize, |acc, &l| acc.checked_add(l))
            .ok_or(TOPS_INVALID_ARGUMENT)?;
        let values = unsafe { input(values, nnz)? };

        let mut rows = Vec::with_capacity(nrows);
        let mut rest = values;
        for &len in lengths {
            let (row, tail) = rest.split_at(len);
            rows.push(row);
            rest = tail;
        }

        let st = sparse_tuple_from(&rows).map_err(|e| status_of(&e))?;
        let out_indices = unsafe { output(out_indices, 2 * nnz)? };
        let out_values = unsafe { output(out_values, nnz)? };
        let out_shape = unsafe { output(out_shape, 2)? };

        for (dest, pair) in out_indices.chunks_exact_mut(2).zip(st.indices()) {
            dest.copy_from_slice(pair);
        }
        out_values.copy_from_slice(st.values());
        out_shape.copy_from_slice(&st.shape());
        Ok(())
    })
}

/// Decode a sparse triple of `i64` values into ragged rows.
///
/// # Arguments
/// * `indices` - `2 * nnz` elements, `(row, column)` pairs
/// * `values` - `nnz` elements
/// * `nnz` - Number of entries
/// * `shape` - 2 elements, `[nrows, max_row_len]`
/// * `out_lengths` - Output of `nrows` elements, length of each row
/// * `out_values` - Output of `nnz` elements, concatenated rows
///
/// # Returns
/// Status code
#[unsafe(no_mangle)]
pub extern "C" fn tops_decode_sparse_tuple_i64(
    indices: *const size_t,
    values: *const i64,
    nnz: size_t,
    shape: *const size_t,
    out_lengths: *mut size_t,
    out_values: *mut i64,
) -> StatusCode {
    guard(|| {
        let index_len = nnz.checked_mul(2).ok_or(TOPS_INVALID_ARGUMENT)?;
        let indices = unsafe { input(indices, index_len)? };
        let values = unsafe { input(values, nnz)? };
        let shape = unsafe { input(shape, 2)? };

        let pairs = indices.chunks_exact(2).map(|p| [p[0], p[1]]).collect();
        let st = SparseTuple::new(pairs, values.to_vec(), [shape[0], shape[1]])
            .map_err(|e| status_of(&e))?;
        let rows = decode_sparse_tuple(&st);

        let out_lengths = unsafe { output(out_lengths, rows.len())? };
        let out_values = unsafe { output(out_values, nnz)? };
        let mut offset = 0;
        for (len, row) in out_lengths.iter_mut().zip(&rows) {
            *len = row.len();
            out_values[offset..offset + row.len()].copy_from_slice(row);
            offset += row.len();
        }
        Ok(())
    })
}
