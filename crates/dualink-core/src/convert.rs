//! Export into the `sprs` compressed sparse formats.
//!
//! The row-major ordering feeds CSR directly and the column-major ordering
//! feeds CSC, so both conversions hand `sprs` triplets that are already in
//! the target format's native order.

use sprs::{CsMat, TriMat};

use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Export as a compressed sparse row matrix.
    pub fn to_csr(&self) -> CsMat<i64> {
        let mut triplets = TriMat::new((self.rows(), self.cols()));
        for entry in self.row_major() {
            triplets.add_triplet(entry.row, entry.col, entry.value);
        }
        triplets.to_csr()
    }

    /// Export as a compressed sparse column matrix.
    pub fn to_csc(&self) -> CsMat<i64> {
        let mut triplets = TriMat::new((self.rows(), self.cols()));
        for (col, group) in self.column_groups() {
            for (row, value) in group {
                triplets.add_triplet(row, col, value);
            }
        }
        triplets.to_csc()
    }
}
