//! Non-zero matrix entries and their ordering keys.

use serde::{Deserialize, Serialize};

/// One stored non-zero cell: a (row, col, value) triplet.
///
/// Entries are created by [`SparseMatrix::insert`] and never mutated
/// afterwards. The store guarantees `value != 0` and in-bounds coordinates
/// for every entry it holds.
///
/// [`SparseMatrix::insert`]: crate::SparseMatrix::insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    /// Key realizing row-major order: ascending row, then column.
    pub(crate) fn row_key(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Key realizing column-major order: ascending column, then row.
    pub(crate) fn col_key(&self) -> (usize, usize) {
        (self.col, self.row)
    }
}
