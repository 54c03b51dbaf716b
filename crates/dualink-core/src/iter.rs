//! Lazy traversals over the two entry orderings.
//!
//! Both iterators borrow the matrix, so they are snapshots of the entry
//! set at creation time; a fresh iterator picks up later inserts.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::Peekable;

use crate::entry::Entry;

/// Row-major traversal: entries in ascending (row, col) order.
///
/// Created by [`SparseMatrix::row_major`](crate::SparseMatrix::row_major).
#[derive(Debug, Clone)]
pub struct RowMajor<'a> {
    slots: btree_map::Values<'a, (usize, usize), usize>,
    entries: &'a [Entry],
}

impl<'a> RowMajor<'a> {
    pub(crate) fn new(index: &'a BTreeMap<(usize, usize), usize>, entries: &'a [Entry]) -> Self {
        Self {
            slots: index.values(),
            entries,
        }
    }
}

impl<'a> Iterator for RowMajor<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|&slot| &self.entries[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for RowMajor<'_> {}

/// Column-grouped traversal: yields `(col, rows)` with groups in ascending
/// column order and `(row, value)` pairs ascending by row inside each
/// group.
///
/// Derived purely from the column-major index; the row-major ordering is
/// never consulted. Created by
/// [`SparseMatrix::column_groups`](crate::SparseMatrix::column_groups).
#[derive(Debug, Clone)]
pub struct ColumnGroups<'a> {
    slots: Peekable<btree_map::Iter<'a, (usize, usize), usize>>,
    entries: &'a [Entry],
}

impl<'a> ColumnGroups<'a> {
    pub(crate) fn new(index: &'a BTreeMap<(usize, usize), usize>, entries: &'a [Entry]) -> Self {
        Self {
            slots: index.iter().peekable(),
            entries,
        }
    }
}

impl Iterator for ColumnGroups<'_> {
    type Item = (usize, Vec<(usize, i64)>);

    fn next(&mut self) -> Option<Self::Item> {
        let (&(col, row), &slot) = self.slots.next()?;
        let mut group = vec![(row, self.entries[slot].value)];
        // Column-major keys are (col, row), so one column's entries are
        // contiguous and already row-ascending.
        while let Some(&(&(next_col, next_row), &next_slot)) = self.slots.peek() {
            if next_col != col {
                break;
            }
            group.push((next_row, self.entries[next_slot].value));
            self.slots.next();
        }
        Some((col, group))
    }
}
