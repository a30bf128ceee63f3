//! Host-side sparse encodings.

mod tuple;

pub use tuple::{SparseTuple, decode_sparse_tuple, sparse_tuple_from};
