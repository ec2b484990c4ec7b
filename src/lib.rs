//! Token Longest Common Subsequence
//!
//! This crate computes one longest common subsequence (LCS) of two token
//! sequences, typically the words of two versions of a sentence.
//!
//! ## Core idea
//! 1. Fill a `len(a) × len(b)` table in row-major order. Each cell stores the
//!    best length for the two prefixes, the matched column if the cell is a
//!    match point, and the flat index of the cell it was derived from.
//! 2. Follow those predecessor indices back from the bottom-right cell and
//!    collect the matched tokens.
//!
//! Ties between "carry down" and "carry across" go to carry down. The
//! returned subsequence is therefore deterministic, but when several LCSs of
//! the same length exist, which one you get is an implementation detail.
//!
//! ## Quick start
//! ```
//! use token_lcs::compute_lcs;
//!
//! let a = ["a", "b", "c"];
//! let b = ["a", "c"];
//! assert_eq!(compute_lcs(&a, &b).unwrap(), vec!["a", "c"]);
//!
//! let empty: [&str; 0] = [];
//! assert!(compute_lcs(&empty, &b).unwrap().is_empty());
//! ```
//!
//! ## Beyond the core
//! - [`utils::lcs_len`] computes only the length in linear memory.
//! - [`similarity`] scores sequence pairs by weighted LCS (uniform or idf).
//! - [`batch::lcs_batch`] evaluates many pairs, on rayon with the `parallel`
//!   feature.
//! - [`cli`] holds the argument grammar and output format of the `lcs` binary.

pub mod batch;
pub mod builder;
pub mod cell;
pub mod cli;
pub mod engine;
pub mod error;
pub mod similarity;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::LcsEngineBuilder;
pub use crate::engine::{compute_lcs, LcsEngine};
pub use crate::error::{CliError, LcsError};
pub use crate::table::DpTable;
pub use crate::traits::TokenWeight;
