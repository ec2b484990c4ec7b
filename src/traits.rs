//! Core trait definitions for weighting tokens.
//!
//! Plain LCS counts every matched token as 1. Weighted scoring instead sums a
//! per-token weight over the common subsequence, so that rare words (high
//! inverse document frequency) count for more than function words. Implement
//! [`TokenWeight`] to plug a weighting scheme into
//! [`crate::similarity::similarity`]; plain closures `Fn(&T) -> f64` already
//! implement it.

/// Weight of a single token for similarity scoring.
///
/// Semantics:
/// - weights should be finite and non-negative;
/// - the same token must always get the same weight during one scoring call.
pub trait TokenWeight<T> {
    /// Weight contributed by `token`.
    fn weight(&self, token: &T) -> f64;

    /// Sum of weights over a sequence.
    fn total(&self, tokens: &[T]) -> f64 {
        tokens.iter().map(|t| self.weight(t)).sum()
    }
}

impl<T, F> TokenWeight<T> for F
where
    F: Fn(&T) -> f64,
{
    fn weight(&self, token: &T) -> f64 {
        self(token)
    }
}
