//! Dual-ordered sparse matrix storage.
//!
//! [`SparseMatrix`] stores only non-zero cells. All entries live in a
//! single owned arena; two ordered indices over that arena realize the
//! row-major and column-major traversal orders simultaneously:
//!
//! ```text
//! entries:    [ e0, e1, e2, ... ]          (insertion order, owns the data)
//! row_index:  (row, col) -> arena slot     (row-major total order)
//! col_index:  (col, row) -> arena slot     (column-major total order)
//! ```
//!
//! Both indices always cover exactly the arena's entry set, so every entry
//! reachable through one ordering is reachable through the other.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entry::Entry;
use crate::error::{MatrixError, MatrixResult};
use crate::iter::{ColumnGroups, RowMajor};

/// Sparse integer matrix with simultaneous row-major and column-major
/// ordering over its non-zero entries.
///
/// Dimensions are fixed at construction. Entries are inserted once and
/// never removed or updated; zero values are silently discarded.
///
/// Not designed for concurrent mutation: wrap it in a lock if shared
/// mutable access is needed.
#[derive(Debug, Clone)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    /// Arena owning every entry exactly once, in insertion order.
    entries: Vec<Entry>,
    /// (row, col) -> arena slot
    row_index: BTreeMap<(usize, usize), usize>,
    /// (col, row) -> arena slot
    col_index: BTreeMap<(usize, usize), usize>,
}

impl SparseMatrix {
    /// Create an empty matrix with fixed dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
            row_index: BTreeMap::new(),
            col_index: BTreeMap::new(),
        }
    }

    /// Insert a non-zero value at (row, col), linking it into both
    /// orderings in one logical step.
    ///
    /// Inserting `0` is a defined no-op: bounds are still validated, but
    /// nothing is stored.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::CoordinateOutOfBounds`] if `row >= rows` or
    ///   `col >= cols`; the matrix is unchanged.
    /// - [`MatrixError::DuplicateEntry`] if an entry already exists at
    ///   (row, col); the matrix is unchanged.
    pub fn insert(&mut self, row: usize, col: usize, value: i64) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::CoordinateOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if value == 0 {
            return Ok(());
        }
        if self.row_index.contains_key(&(row, col)) {
            return Err(MatrixError::DuplicateEntry { row, col });
        }

        let entry = Entry { row, col, value };
        let slot = self.entries.len();
        self.entries.push(entry);
        self.row_index.insert(entry.row_key(), slot);
        self.col_index.insert(entry.col_key(), slot);
        Ok(())
    }

    /// Stored value at (row, col), or 0 if no entry exists there.
    ///
    /// Out-of-range coordinates also read as 0.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.row_index
            .get(&(row, col))
            .map(|&slot| self.entries[slot].value)
            .unwrap_or(0)
    }

    /// Number of rows (fixed at construction).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (fixed at construction).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matrix density (nnz / (rows × cols)), 0.0 for degenerate dimensions.
    pub fn density(&self) -> f64 {
        if self.rows == 0 || self.cols == 0 {
            return 0.0;
        }
        self.nnz() as f64 / (self.rows * self.cols) as f64
    }

    /// Memory usage in bytes (approximate).
    pub fn memory_bytes(&self) -> usize {
        use std::mem::size_of;
        // Arena entries, plus a (key, slot) pair in each of the two indices
        // per stored entry.
        self.nnz() * size_of::<Entry>()
            + 2 * self.nnz() * (size_of::<(usize, usize)>() + size_of::<usize>())
    }

    /// Iterate over entries in row-major order: ascending row, then column.
    ///
    /// Restartable: each call starts a fresh traversal over the current
    /// entry set.
    pub fn row_major(&self) -> RowMajor<'_> {
        RowMajor::new(&self.row_index, &self.entries)
    }

    /// Iterate over entries grouped by column: groups in ascending column
    /// order, rows ascending within each group.
    ///
    /// Derived purely from the column-major index; restartable like
    /// [`row_major`](Self::row_major).
    pub fn column_groups(&self) -> ColumnGroups<'_> {
        ColumnGroups::new(&self.col_index, &self.entries)
    }

    /// Reconstruct the dense rows × cols view, zeros filled in for absent
    /// coordinates.
    pub fn to_dense(&self) -> Vec<Vec<i64>> {
        let mut dense = vec![vec![0i64; self.cols]; self.rows];
        // Entries are in-bounds by the insert contract, so a single
        // row-major scatter pass fills every stored cell.
        for entry in self.row_major() {
            dense[entry.row][entry.col] = entry.value;
        }
        dense
    }

    /// Sum of values over all entries in `row`; 0 for an empty row.
    ///
    /// # Errors
    ///
    /// [`MatrixError::CoordinateOutOfBounds`] if `row >= rows`, consistent
    /// with the insert boundary.
    pub fn row_sum(&self, row: usize) -> MatrixResult<i64> {
        if row >= self.rows {
            return Err(MatrixError::CoordinateOutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        // Row-major keys for this row form the contiguous range
        // (row, 0)..=(row, max), so the scan never visits another row.
        Ok(self
            .row_index
            .range((row, 0)..=(row, usize::MAX))
            .map(|(_, &slot)| self.entries[slot].value)
            .sum())
    }

    /// Sum of values over all entries in `col`; 0 for an empty column.
    ///
    /// # Errors
    ///
    /// [`MatrixError::CoordinateOutOfBounds`] if `col >= cols`.
    pub fn col_sum(&self, col: usize) -> MatrixResult<i64> {
        if col >= self.cols {
            return Err(MatrixError::CoordinateOutOfBounds {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self
            .col_index
            .range((col, 0)..=(col, usize::MAX))
            .map(|(_, &slot)| self.entries[slot].value)
            .sum())
    }
}

impl PartialEq for SparseMatrix {
    /// Matrices are equal when dimensions match and both hold the same
    /// entry set (arena insertion order is irrelevant).
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.row_major().eq(other.row_major())
    }
}

impl Eq for SparseMatrix {}

/// Serialized form: dimensions plus the triplets in row-major order.
#[derive(Serialize, Deserialize)]
#[serde(rename = "SparseMatrix")]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
}

impl Serialize for SparseMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = MatrixRepr {
            rows: self.rows,
            cols: self.cols,
            entries: self.row_major().copied().collect(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SparseMatrix {
    /// Every triplet is re-validated through [`SparseMatrix::insert`], so
    /// crafted payloads (zero values, duplicates, out-of-range
    /// coordinates) fail to deserialize instead of corrupting the store.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::deserialize(deserializer)?;
        let mut matrix = SparseMatrix::new(repr.rows, repr.cols);
        for entry in repr.entries {
            if entry.value == 0 {
                return Err(D::Error::custom(format!(
                    "zero-valued entry at ({}, {}) in serialized matrix",
                    entry.row, entry.col
                )));
            }
            matrix
                .insert(entry.row, entry.col, entry.value)
                .map_err(D::Error::custom)?;
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_4x5_matrix() -> SparseMatrix {
        let mut matrix = SparseMatrix::new(4, 5);
        // Inserted out of order on purpose; both orderings must not care.
        matrix.insert(3, 1, 2).unwrap();
        matrix.insert(0, 2, 3).unwrap();
        matrix.insert(1, 3, 7).unwrap();
        matrix.insert(0, 4, 4).unwrap();
        matrix.insert(3, 2, 6).unwrap();
        matrix.insert(1, 2, 5).unwrap();
        matrix
    }

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = SparseMatrix::new(4, 5);
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 5);
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.density(), 0.0);
    }

    #[test]
    fn test_insert_and_get() {
        let matrix = create_4x5_matrix();
        assert_eq!(matrix.nnz(), 6);
        assert_eq!(matrix.get(1, 3), 7);
        assert_eq!(matrix.get(3, 1), 2);
        assert_eq!(matrix.get(2, 2), 0); // absent cell reads as zero
        assert_eq!(matrix.get(9, 9), 0); // out of range reads as zero
    }

    #[test]
    fn test_insert_zero_is_noop() {
        let mut matrix = create_4x5_matrix();
        matrix.insert(2, 2, 0).unwrap();
        assert_eq!(matrix.nnz(), 6);
        assert_eq!(matrix.get(2, 2), 0);
    }

    #[test]
    fn test_insert_zero_still_validates_bounds() {
        let mut matrix = SparseMatrix::new(4, 5);
        let err = matrix.insert(4, 0, 0).unwrap_err();
        assert!(matches!(err, MatrixError::CoordinateOutOfBounds { .. }));
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut matrix = SparseMatrix::new(4, 5);
        assert!(matches!(
            matrix.insert(4, 0, 1),
            Err(MatrixError::CoordinateOutOfBounds { .. })
        ));
        assert!(matches!(
            matrix.insert(0, 5, 1),
            Err(MatrixError::CoordinateOutOfBounds { .. })
        ));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut matrix = create_4x5_matrix();
        let err = matrix.insert(1, 3, 99).unwrap_err();
        assert!(matches!(err, MatrixError::DuplicateEntry { row: 1, col: 3 }));
        // Both orderings untouched
        assert_eq!(matrix.nnz(), 6);
        assert_eq!(matrix.get(1, 3), 7);
        assert_eq!(matrix.column_groups().count(), 4);
    }

    #[test]
    fn test_negative_values_stored() {
        let mut matrix = SparseMatrix::new(2, 2);
        matrix.insert(0, 0, -5).unwrap();
        assert_eq!(matrix.get(0, 0), -5);
        assert_eq!(matrix.row_sum(0).unwrap(), -5);
    }

    #[test]
    fn test_density() {
        let matrix = create_4x5_matrix();
        assert!((matrix.density() - 6.0 / 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_dense() {
        let matrix = create_4x5_matrix();
        let expected = vec![
            vec![0, 0, 3, 0, 4],
            vec![0, 0, 5, 7, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 2, 6, 0, 0],
        ];
        assert_eq!(matrix.to_dense(), expected);
    }

    #[test]
    fn test_to_dense_empty() {
        let matrix = SparseMatrix::new(2, 3);
        assert_eq!(matrix.to_dense(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_row_sum() {
        let matrix = create_4x5_matrix();
        assert_eq!(matrix.row_sum(0).unwrap(), 7);
        assert_eq!(matrix.row_sum(1).unwrap(), 12);
        assert_eq!(matrix.row_sum(2).unwrap(), 0);
        assert_eq!(matrix.row_sum(3).unwrap(), 8);
        assert!(matches!(
            matrix.row_sum(4),
            Err(MatrixError::CoordinateOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_col_sum() {
        let matrix = create_4x5_matrix();
        assert_eq!(matrix.col_sum(0).unwrap(), 0);
        assert_eq!(matrix.col_sum(1).unwrap(), 2);
        assert_eq!(matrix.col_sum(2).unwrap(), 14);
        assert_eq!(matrix.col_sum(4).unwrap(), 4);
        assert!(matches!(
            matrix.col_sum(5),
            Err(MatrixError::CoordinateOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_query_idempotence() {
        let matrix = create_4x5_matrix();
        let first: Vec<_> = matrix.row_major().copied().collect();
        let second: Vec<_> = matrix.row_major().copied().collect();
        assert_eq!(first, second);
        assert_eq!(matrix.to_dense(), matrix.to_dense());
        assert_eq!(matrix.row_sum(1).unwrap(), matrix.row_sum(1).unwrap());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = create_4x5_matrix();
        let mut b = SparseMatrix::new(4, 5);
        for entry in a.row_major() {
            b.insert(entry.row, entry.col, entry.value).unwrap();
        }
        assert_eq!(a, b);

        let c = SparseMatrix::new(4, 5);
        assert_ne!(a, c);
        let d = SparseMatrix::new(5, 4);
        assert_ne!(c, d); // same (empty) entry set, different dimensions
    }

    #[test]
    fn test_serde_roundtrip() {
        let matrix = create_4x5_matrix();
        let json = serde_json::to_string(&matrix).unwrap();
        let back: SparseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(matrix, back);
    }

    #[test]
    fn test_deserialize_rejects_invalid_payloads() {
        // Zero value
        let json = r#"{"rows":2,"cols":2,"entries":[{"row":0,"col":0,"value":0}]}"#;
        assert!(serde_json::from_str::<SparseMatrix>(json).is_err());

        // Duplicate coordinate
        let json = r#"{"rows":2,"cols":2,"entries":[
            {"row":0,"col":0,"value":1},
            {"row":0,"col":0,"value":2}
        ]}"#;
        assert!(serde_json::from_str::<SparseMatrix>(json).is_err());

        // Out-of-range coordinate
        let json = r#"{"rows":2,"cols":2,"entries":[{"row":5,"col":0,"value":1}]}"#;
        assert!(serde_json::from_str::<SparseMatrix>(json).is_err());
    }

    #[test]
    fn test_memory_bytes_scales_with_nnz() {
        let empty = SparseMatrix::new(4, 5);
        let full = create_4x5_matrix();
        assert_eq!(empty.memory_bytes(), 0);
        assert!(full.memory_bytes() > 0);
    }
}
