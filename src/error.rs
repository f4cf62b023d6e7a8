use thiserror::Error;

// Unified error type for vecmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cannot split {n} column(s) off a matrix with {columns} column(s)")]
    InvalidSplit { n: usize, columns: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl LinalgError {
    /// Mismatch raised by elementwise vector operations, e.g. `"add"`.
    pub(crate) fn vector_op(op: &str) -> Self {
        LinalgError::DimensionMismatch(format!(
            "cannot {op} vectors that are not of the same dimension"
        ))
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfBounds { index, len })
        }
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
