//! The LCS backpointer table.
//!
//! Rows follow `seq1`, columns follow `seq2`. Cells live in one flat,
//! row-major `Vec<Cell>` reserved up front; predecessors are flat indices into
//! that vector, so a cell can only point to a strictly smaller index (up,
//! left or up-left).
//!
//! Fill order and tie-break:
//! - a match in the first row or column starts a chain of length 1;
//! - any other match extends the diagonal cell by one;
//! - a non-match carries down from `(i-1, j)` when there is a row above, and
//!   only switches to carrying across from `(i, j-1)` when that length is
//!   strictly larger.
//!
//! When several longest subsequences exist, the vertical preference decides
//! which one is returned. That choice is deterministic but arbitrary; other
//! LCS implementations may legitimately return a different subsequence of the
//! same length.

use crate::cell::Cell;
use crate::error::LcsError;
use crate::utils::cell_count;

/// Fully populated DP table for one pair of sequences.
#[derive(Debug, Clone)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl DpTable {
    /// Build the table for `seq1` x `seq2`.
    ///
    /// Returns `Ok(None)` when either sequence is empty; no table is built in
    /// that case. `limit` caps the number of cells.
    pub fn build<T: PartialEq>(
        seq1: &[T],
        seq2: &[T],
        limit: Option<usize>,
    ) -> Result<Option<Self>, LcsError> {
        let rows = seq1.len();
        let cols = seq2.len();
        if rows == 0 || cols == 0 {
            return Ok(None);
        }

        let n_cells = cell_count(rows, cols, limit)?;
        let mut cells: Vec<Cell> = Vec::new();
        cells
            .try_reserve_exact(n_cells)
            .map_err(|_| LcsError::TableAllocation { cells: n_cells })?;

        for (i, a) in seq1.iter().enumerate() {
            for (j, b) in seq2.iter().enumerate() {
                let cell = if a == b {
                    if i == 0 || j == 0 {
                        Cell::chain_start(j)
                    } else {
                        let diag = (i - 1) * cols + (j - 1);
                        Cell::extend(diag, cells[diag].length, j)
                    }
                } else {
                    let mut cell = Cell::default();
                    if i > 0 {
                        let up = (i - 1) * cols + j;
                        cell = Cell::carry(up, cells[up].length);
                    }
                    if j > 0 {
                        let left = i * cols + (j - 1);
                        if cells[left].length > cell.length {
                            cell = Cell::carry(left, cells[left].length);
                        }
                    }
                    cell
                };
                cells.push(cell);
            }
        }

        Ok(Some(Self { rows, cols, cells }))
    }

    /// Number of rows (`seq1.len()`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`seq2.len()`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` of a flat index.
    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// The bottom-right cell, where reconstruction starts.
    pub fn end(&self) -> &Cell {
        // build() never produces an empty table
        &self.cells[self.cells.len() - 1]
    }

    /// Length of the longest common subsequence.
    pub fn lcs_len(&self) -> usize {
        self.end().length
    }

    /// Flat indices of the predecessor chain, from the end cell back to the
    /// chain start.
    fn chain(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.cells.len() - 1), move |&idx| {
            self.cells[idx].predecessor
        })
    }

    /// `(row, col)` states of the predecessor chain in forward order, from the
    /// chain start to the bottom-right cell.
    pub fn predecessor_path(&self) -> Vec<(usize, usize)> {
        let mut path: Vec<(usize, usize)> = self.chain().map(|idx| self.coords(idx)).collect();
        path.reverse();
        path
    }

    /// Walk the predecessor chain and collect one longest common subsequence,
    /// cloning tokens out of `seq2`.
    ///
    /// `seq2` must be the second sequence the table was built from; any other
    /// length is rejected with [`LcsError::ColumnMismatch`].
    pub fn backtrack<T: Clone>(&self, seq2: &[T]) -> Result<Vec<T>, LcsError> {
        if seq2.len() != self.cols {
            return Err(LcsError::ColumnMismatch {
                expected: self.cols,
                got: seq2.len(),
            });
        }

        let len = self.lcs_len();
        let mut slots: Vec<Option<T>> = vec![None; len];
        let mut remaining = len;

        for idx in self.chain() {
            if let Some(col) = self.cells[idx].matched {
                remaining -= 1;
                slots[remaining] = Some(seq2[col].clone());
            }
        }

        debug_assert_eq!(remaining, 0, "chain must contribute exactly lcs_len tokens");
        Ok(slots.into_iter().flatten().collect())
    }
}
