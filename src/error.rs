//! Error types for opnorm

use thiserror::Error;

/// All possible errors in opnorm
#[derive(Error, Debug)]
pub enum NormError {
    /// Input array rank is neither 1 (vector) nor 2 (matrix)
    #[error("Invalid rank {rank}: input must be a vector or matrix")]
    InvalidRank {
        /// Rank (number of dimensions) of the rejected array
        rank: usize,
    },

    /// Matrix and vector shapes do not conform for multiplication
    #[error("Dimension mismatch: matrix has {cols} columns, vector has length {len}")]
    DimensionMismatch {
        /// Number of matrix columns
        cols: usize,
        /// Vector length
        len: usize,
    },

    /// Array shape mismatch
    #[error("Array shape error: {0}")]
    ShapeError(String),
}

impl From<ndarray::ShapeError> for NormError {
    fn from(e: ndarray::ShapeError) -> Self {
        NormError::ShapeError(e.to_string())
    }
}
