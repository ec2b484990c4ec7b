//! Evaluate many independent sequence pairs.
//!
//! Each pair gets its own table, so pairs can run on separate threads with no
//! shared state. With the `parallel` feature the pairs are spread over the
//! rayon pool; otherwise they run in order on the calling thread. Output order
//! always matches input order.

use crate::engine::LcsEngine;
use crate::error::LcsError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One result per input pair, in input order.
#[cfg(feature = "parallel")]
pub fn lcs_batch<T>(pairs: &[(Vec<T>, Vec<T>)]) -> Vec<Result<Vec<T>, LcsError>>
where
    T: PartialEq + Clone + Send + Sync,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("lcs_batch", pairs = pairs.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .par_iter()
        .map(|(a, b)| LcsEngine::new(a, b).run())
        .collect()
}

/// One result per input pair, in input order.
#[cfg(not(feature = "parallel"))]
pub fn lcs_batch<T>(pairs: &[(Vec<T>, Vec<T>)]) -> Vec<Result<Vec<T>, LcsError>>
where
    T: PartialEq + Clone,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("lcs_batch", pairs = pairs.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .iter()
        .map(|(a, b)| LcsEngine::new(a, b).run())
        .collect()
}
