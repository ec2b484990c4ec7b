//! Assorted utilities and helpers.
//!
//! These do not build a backpointer table; they are cheap companions to
//! [`crate::engine::LcsEngine`] for scoring and checking results.

use crate::error::LcsError;

/// Number of cells a `rows x cols` table needs, checked against overflow and
/// an optional limit.
#[inline]
pub fn cell_count(rows: usize, cols: usize, limit: Option<usize>) -> Result<usize, LcsError> {
    let cells = rows
        .checked_mul(cols)
        .ok_or(LcsError::CellCountOverflow { rows, cols })?;
    match limit {
        Some(limit) if cells > limit => Err(LcsError::CellLimitExceeded { cells, limit }),
        _ => Ok(cells),
    }
}

/// Length of the longest common subsequence of `a` and `b`.
///
/// Keeps only two DP rows of `b.len() + 1` entries, so it is usable on inputs
/// far too large for a full table.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = b.len();
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];

    for x in a {
        for j in 1..=m {
            curr[j] = if *x == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Returns true if `needle` appears in `haystack` in order, not necessarily
/// contiguously.
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}
