//! # dualink-core: Dual-Ordered Sparse Matrix Storage
//!
//! Stores a large, mostly-zero integer matrix as its non-zero entries
//! only, while keeping those entries simultaneously sorted in two total
//! orders:
//!
//! - **Row-major**: ascending row, then column — for row traversal,
//!   row sums, and dense reconstruction.
//! - **Column-major**: ascending column, then row — for column-grouped
//!   traversal and column sums.
//!
//! Classic linked-list sparse matrices thread two `next` pointers through
//! each node to get both orders without duplicating data. Here the same
//! idea is expressed safely: every [`Entry`] lives exactly once in an
//! owned arena, and two ordered indices over that arena realize the two
//! orderings. No aliasing, no unsafe, identical traversal semantics.
//!
//! ## Quick Start
//!
//! ```
//! use dualink_core::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::new(4, 5);
//! matrix.insert(0, 2, 3)?;
//! matrix.insert(3, 1, 2)?;
//! matrix.insert(1, 3, 7)?;
//! matrix.insert(2, 2, 0)?; // zero values are discarded, not stored
//!
//! // Row-major traversal: (0,2), (1,3), (3,1)
//! let first = matrix.row_major().next().unwrap();
//! assert_eq!((first.row, first.col, first.value), (0, 2, 3));
//!
//! // Column-grouped traversal: col 1 -> [(3, 2)], col 2 -> [(0, 3)], ...
//! let (col, rows) = matrix.column_groups().next().unwrap();
//! assert_eq!((col, rows), (1, vec![(3, 2)]));
//!
//! assert_eq!(matrix.row_sum(1)?, 7);
//! assert_eq!(matrix.nnz(), 3);
//! assert_eq!(matrix.to_dense()[3][1], 2);
//! # Ok::<(), dualink_core::MatrixError>(())
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] - The [`SparseMatrix`] store: insertion and queries
//! - [`iter`] - Row-major and column-grouped traversals
//! - [`error`] - [`MatrixError`] and the [`MatrixResult`] alias
//!
//! ## Contract
//!
//! Coordinates are validated at insert time; out-of-range rows or columns
//! fail with [`MatrixError::CoordinateOutOfBounds`] and duplicates with
//! [`MatrixError::DuplicateEntry`]. Entries are immutable once stored and
//! there is no removal. Serde support round-trips a matrix through its
//! row-major triplet form and re-validates every triplet on the way back
//! in.

mod convert;
pub mod entry;
pub mod error;
pub mod iter;
pub mod matrix;

pub use entry::Entry;
pub use error::{MatrixError, MatrixResult};
pub use iter::{ColumnGroups, RowMajor};
pub use matrix::SparseMatrix;
