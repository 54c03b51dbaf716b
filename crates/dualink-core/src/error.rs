//! Unified error types for dualink
//!
//! This module provides a common error type [`MatrixError`] for all matrix
//! operations. Every fallible operation in the crate returns
//! [`MatrixResult`], so callers can handle validation failures uniformly
//! with `?`.
//!
//! # Example
//!
//! ```
//! use dualink_core::{MatrixResult, SparseMatrix};
//!
//! fn build() -> MatrixResult<SparseMatrix> {
//!     let mut matrix = SparseMatrix::new(4, 5);
//!     matrix.insert(0, 2, 3)?;
//!     matrix.insert(3, 1, 2)?;
//!     Ok(matrix)
//! }
//! # build().unwrap();
//! ```

use thiserror::Error;

/// Unified error type for all matrix operations.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Row or column index outside the matrix dimensions
    #[error("coordinate ({row}, {col}) is outside a {rows}x{cols} matrix")]
    CoordinateOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// An entry already exists at the given coordinate
    #[error("an entry is already stored at ({row}, {col})")]
    DuplicateEntry { row: usize, col: usize },

    /// Parsing/deserialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using MatrixError.
pub type MatrixResult<T> = Result<T, MatrixError>;

// Conversion from string-like types for convenience
impl From<String> for MatrixError {
    fn from(s: String) -> Self {
        MatrixError::Other(s)
    }
}

impl From<&str> for MatrixError {
    fn from(s: &str) -> Self {
        MatrixError::Other(s.to_string())
    }
}

// JSON parsing errors
impl From<serde_json::Error> for MatrixError {
    fn from(err: serde_json::Error) -> Self {
        MatrixError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrixError::CoordinateOutOfBounds {
            row: 7,
            col: 1,
            rows: 4,
            cols: 5,
        };
        assert!(err.to_string().contains("(7, 1)"));
        assert!(err.to_string().contains("4x5"));

        let err = MatrixError::DuplicateEntry { row: 2, col: 3 };
        assert!(err.to_string().contains("(2, 3)"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<i64>("not a number").unwrap_err();
        let err: MatrixError = json_err.into();
        assert!(matches!(err, MatrixError::Parse(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> MatrixResult<()> {
            Err("boom".into())
        }

        fn outer() -> MatrixResult<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(outer(), Err(MatrixError::Other(_))));
    }
}
