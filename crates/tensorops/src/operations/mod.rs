//! Tensor operations.
//!
//! Each operation is a free function over `ndarray` arrays that allocates and
//! returns a new array:
//!
//! ```text
//! Shape:       flatten, concat
//! Activation:  sparsemax, hardmax
//! ```

mod concat;
mod flatten;
mod hardmax;
mod sparsemax;

pub use concat::concat;
pub use flatten::flatten;
pub use hardmax::hardmax;
pub use sparsemax::{sparsemax, sparsemax_dyn};
