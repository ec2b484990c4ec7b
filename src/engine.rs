//! LCS engine.
//!
//! Runs the two phases for one pair of sequences:
//! 1. Build the backpointer table ([`DpTable::build`]).
//! 2. Backtrack from the bottom-right cell to recover one longest common
//!    subsequence ([`DpTable::backtrack`]).
//!
//! The engine holds only borrowed inputs and configuration; every run builds
//! a fresh table and drops it before returning.

use crate::error::LcsError;
use crate::table::DpTable;

/// LCS engine for a given pair of sequences.
///
/// Typical usage:
/// ```
/// use token_lcs::LcsEngine;
///
/// let a = ["the", "cat", "sat", "down"];
/// let b = ["a", "cat", "sat", "up"];
/// let engine = LcsEngine::new(&a, &b);
/// let common = engine.run().unwrap();
/// assert_eq!(common, vec!["cat", "sat"]);
/// ```
///
/// When several longest subsequences exist, the result is the one selected by
/// preferring "carry down" over "carry across" on equal lengths. Treat the
/// exact choice as an implementation detail.
#[derive(Debug, Clone)]
pub struct LcsEngine<'a, T> {
    seq1: &'a [T],
    seq2: &'a [T],
    max_cells: Option<usize>,
}

impl<'a, T: PartialEq + Clone> LcsEngine<'a, T> {
    /// Create a new engine with no cell limit.
    pub fn new(seq1: &'a [T], seq2: &'a [T]) -> Self {
        Self {
            seq1,
            seq2,
            max_cells: None,
        }
    }

    /// Create a new engine that refuses to build tables larger than
    /// `max_cells`.
    pub fn with_max_cells(seq1: &'a [T], seq2: &'a [T], max_cells: usize) -> Self {
        Self {
            seq1,
            seq2,
            max_cells: Some(max_cells),
        }
    }

    /// First input sequence (table rows).
    pub fn seq1(&self) -> &'a [T] {
        self.seq1
    }

    /// Second input sequence (table columns); result tokens are taken from it.
    pub fn seq2(&self) -> &'a [T] {
        self.seq2
    }

    /// Return the configured cell limit.
    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Build the table without backtracking. `Ok(None)` for empty inputs.
    pub fn table(&self) -> Result<Option<DpTable>, LcsError> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "build_table",
            rows = self.seq1.len(),
            cols = self.seq2.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        DpTable::build(self.seq1, self.seq2, self.max_cells)
    }

    /// Compute one longest common subsequence.
    ///
    /// Fails only if the table cannot be sized or allocated.
    pub fn run(&self) -> Result<Vec<T>, LcsError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_run");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = match self.table() {
            Ok(Some(table)) => table,
            Ok(None) => return Ok(Vec::new()),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "lcs table not built");
                return Err(err);
            }
        };

        let common = {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("backtrack", len = table.lcs_len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            table.backtrack(self.seq2)?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(len = common.len(), "lcs computed");

        Ok(common)
    }
}

/// Compute one longest common subsequence of `seq1` and `seq2`.
///
/// Shorthand for `LcsEngine::new(seq1, seq2).run()`.
pub fn compute_lcs<T: PartialEq + Clone>(seq1: &[T], seq2: &[T]) -> Result<Vec<T>, LcsError> {
    LcsEngine::new(seq1, seq2).run()
}
