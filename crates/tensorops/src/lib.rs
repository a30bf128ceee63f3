//! tensorops - small tensor helpers on top of ndarray
//!
//! This crate provides stateless helpers for model-definition code: reshaping
//! and concatenation with rank checks, a sparse triple encoding for ragged
//! label sequences, and the sparsemax and hardmax activations.
//!
//! # Architecture
//!
//! ```text
//! operations  (tensor-valued, over ndarray::ArrayBase)
//!     → flatten, concat, sparsemax, hardmax
//!
//! sparse      (host-side, over Vec/slices)
//!     → SparseTuple, sparse_tuple_from, decode_sparse_tuple
//! ```
//!
//! # Example
//!
//! ```
//! use ndarray::arr2;
//! use tensorops::{decode_sparse_tuple, hardmax, sparse_tuple_from, sparsemax};
//!
//! let logits = arr2(&[[3.0, 1.0, 2.0], [0.0, 0.0, 5.0]]);
//! assert_eq!(hardmax(&logits).unwrap(), arr2(&[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]));
//!
//! let p = sparsemax(&logits);
//! assert_eq!(p.row(1).to_vec(), vec![0.0, 0.0, 1.0]);
//!
//! let rows = vec![vec![1, 2], vec![1], vec![1, 2, 3, 4, 5], vec![2, 5, 2, 6]];
//! let st = sparse_tuple_from(&rows).unwrap();
//! assert_eq!(st.shape(), [4, 5]);
//! assert_eq!(decode_sparse_tuple(&st), rows);
//! ```

pub mod axis;
pub mod error;
pub mod operations;
pub mod scalar;
pub mod sparse;

pub use error::TensorError;
pub use operations::{concat, flatten, hardmax, sparsemax, sparsemax_dyn};
pub use scalar::Real;
pub use sparse::{SparseTuple, decode_sparse_tuple, sparse_tuple_from};
