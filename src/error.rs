use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SparseVectorError {
    #[error("Out of memory: cannot grow buffers to {requested} entries")]
    OutOfMemory {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, SparseVectorError>;
