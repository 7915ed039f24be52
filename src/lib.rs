mod error;
mod index;
mod iter;
mod sparse_vector;
mod value;

pub use error::{Result, SparseVectorError};
pub use index::IndexType;
pub use iter::{Iter, IterMut};
pub use sparse_vector::{SparseVector, INITIAL_GROWTH_CAPACITY};
pub use value::Value;
