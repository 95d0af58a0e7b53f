use thiserror::Error;

use crate::mat::{MatDims, MatIndex};

/// Index fell outside of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index ({}, {}) out of bounds for {}x{} matrix", .index.row, .index.col, .dims.rows, .dims.cols)]
pub struct OutOfBoundsError {
    pub dims: MatDims,
    pub index: MatIndex,
}

/// Error generated by matrix operations
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum MatError {
    #[error("Matrix dimensions must be positive (rows: {rows}, cols: {cols})")]
    InvalidShape {
        rows: usize,
        cols: usize,
    },
    #[error("Data length mismatch (expected: {expected}, actual: {actual})")]
    DataLength {
        expected: usize,
        actual: usize,
    },
    #[error("Dimension mismatch (expected: {}x{}, actual: {}x{})", .expected.rows, .expected.cols, .actual.rows, .actual.cols)]
    ShapeMismatch {
        expected: MatDims,
        actual: MatDims,
    },
    #[error("Operation requires a square matrix (actual: {}x{})", .0.rows, .0.cols)]
    NotSquare(MatDims),
    #[error(transparent)]
    IndexOutOfRange(#[from] OutOfBoundsError),
    #[error("Matrix is singular")]
    SingularMatrix,
    #[error("Operation not supported for {}x{} matrix", .0.rows, .0.cols)]
    UnsupportedShape(MatDims),
    #[error("Matrix storage was already released")]
    UseAfterDestroy,
}

impl MatError {
    /// Helper for operations that need `actual` to equal `expected`
    pub(crate) fn check_dims(expected: MatDims, actual: MatDims) -> Result<(), MatError> {
        if expected == actual {
            Ok(())
        } else {
            Err(MatError::ShapeMismatch { expected, actual })
        }
    }
}
