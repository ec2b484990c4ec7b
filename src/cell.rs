//! Cell-level data structures used by the DP table.
//!
//! Each `Cell` records the best subsequence length known for a prefix pair
//! `(seq1[0..=row], seq2[0..=col])` and how that length was derived.

/// One entry of the LCS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Length of the longest common subsequence of the two prefixes.
    pub length: usize,
    /// Index into `seq2` of the token this cell contributes, if it is a
    /// match point.
    pub matched: Option<usize>,
    /// Flat index of the cell this one extends; `None` at a chain start.
    pub predecessor: Option<usize>,
}

impl Cell {
    /// A cell that starts a new chain at a match in the first row or column.
    #[inline]
    pub fn chain_start(col: usize) -> Self {
        Self {
            length: 1,
            matched: Some(col),
            predecessor: None,
        }
    }

    /// A match point extending the diagonal predecessor at `diag`.
    #[inline]
    pub fn extend(diag: usize, diag_len: usize, col: usize) -> Self {
        Self {
            length: diag_len + 1,
            matched: Some(col),
            predecessor: Some(diag),
        }
    }

    /// A non-match cell carrying `length` over from `from`.
    #[inline]
    pub fn carry(from: usize, length: usize) -> Self {
        Self {
            length,
            matched: None,
            predecessor: Some(from),
        }
    }

    /// Returns true if the cell contributes a token to the result.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn default_cell_is_empty_chain_start() {
        let c = Cell::default();
        assert_eq!(c.length, 0);
        assert!(!c.is_match());
        assert_eq!(c.predecessor, None);
    }

    #[test]
    fn extend_adds_one_to_diagonal() {
        let c = Cell::extend(4, 2, 7);
        assert_eq!(c.length, 3);
        assert_eq!(c.matched, Some(7));
        assert_eq!(c.predecessor, Some(4));
    }

    #[test]
    fn carry_is_never_a_match() {
        let c = Cell::carry(1, 5);
        assert!(!c.is_match());
        assert_eq!(c.length, 5);
    }
}
