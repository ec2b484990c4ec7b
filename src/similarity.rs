//! Weighted LCS similarity between two token sequences.
//!
//! ```text
//! similarity(a, b) = Σ w(t) for t in lcs(a, b)  /  max(Σ w(a), Σ w(b))
//! ```
//!
//! With [`Uniform`] weights this is `|lcs| / max(|a|, |b|)`. With
//! [`IdfWeights`] each token weighs `ln((1 + N) / (1 + df))`, where `N` is the
//! number of documents and `df` the number of documents containing the token.

use std::collections::HashMap;

use thiserror::Error;

use crate::engine::LcsEngine;
use crate::error::LcsError;
use crate::traits::TokenWeight;

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    /// Both sequences weigh nothing, so the ratio is undefined.
    #[error("both sequences have zero total weight")]
    ZeroWeight,

    #[error(transparent)]
    Lcs(#[from] LcsError),
}

/// Every token weighs 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uniform;

impl<T> TokenWeight<T> for Uniform {
    fn weight(&self, _token: &T) -> f64 {
        1.0
    }
}

/// Inverse document frequency weights.
#[derive(Debug, Clone, Default)]
pub struct IdfWeights {
    total_docs: usize,
    doc_freq: HashMap<String, usize>,
}

impl IdfWeights {
    /// Weights for a corpus of `total_docs` documents with the given
    /// per-token document frequencies.
    pub fn new(total_docs: usize, doc_freq: HashMap<String, usize>) -> Self {
        Self {
            total_docs,
            doc_freq,
        }
    }

    /// Count document frequencies from tokenized documents.
    pub fn from_documents<D, S>(docs: D) -> Self
    where
        D: IntoIterator,
        D::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_docs = 0usize;
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in docs {
            total_docs += 1;
            let mut seen: Vec<String> = doc.into_iter().map(|s| s.as_ref().to_owned()).collect();
            seen.sort_unstable();
            seen.dedup();
            for token in seen {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }
        Self::new(total_docs, doc_freq)
    }

    /// Number of documents the weights were built from.
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Inverse document frequency of `token`; `None` if it never occurred.
    pub fn idf(&self, token: &str) -> Option<f64> {
        let df = *self.doc_freq.get(token)?;
        let numerator = 1.0 + self.total_docs as f64;
        let denominator = 1.0 + df as f64;
        Some((numerator / denominator).ln())
    }
}

impl<T: AsRef<str>> TokenWeight<T> for IdfWeights {
    /// Unknown tokens weigh 0.0.
    fn weight(&self, token: &T) -> f64 {
        self.idf(token.as_ref()).unwrap_or(0.0)
    }
}

/// Weighted similarity of `a` and `b` in `[0, 1]` for non-negative weights.
///
/// Returns [`SimilarityError::ZeroWeight`] when neither side has any weight,
/// including when both are empty.
pub fn similarity<T, W>(a: &[T], b: &[T], weights: &W) -> Result<f64, SimilarityError>
where
    T: PartialEq + Clone,
    W: TokenWeight<T> + ?Sized,
{
    let denominator = weights.total(a).max(weights.total(b));
    if denominator <= 0.0 {
        return Err(SimilarityError::ZeroWeight);
    }

    let common = LcsEngine::new(a, b).run()?;
    let numerator = weights.total(&common);

    #[cfg(feature = "tracing")]
    tracing::trace!(numerator, denominator, common = common.len(), "similarity");

    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn uniform_is_length_ratio() {
        let a = words("the cat sat on the mat");
        let b = words("the cat lay on a mat");
        // the cat on mat
        let s = similarity(&a, &b, &Uniform).unwrap();
        assert!((s - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn identical_is_one_and_disjoint_is_zero() {
        let a = words("alpha beta");
        assert_eq!(similarity(&a, &a, &Uniform).unwrap(), 1.0);
        assert_eq!(similarity(&a, &words("gamma"), &Uniform).unwrap(), 0.0);
    }

    #[test]
    fn empty_pair_has_zero_weight() {
        let empty = words("");
        assert_eq!(
            similarity(&empty, &empty, &Uniform),
            Err(SimilarityError::ZeroWeight)
        );
    }

    #[test]
    fn idf_counts_each_document_once() {
        let idf = IdfWeights::from_documents(vec![
            words("the higgs boson the"),
            words("the large hadron collider"),
            words("a boson"),
        ]);
        assert_eq!(idf.total_docs(), 3);
        let the = idf.idf("the").unwrap();
        let higgs = idf.idf("higgs").unwrap();
        assert!((the - (4.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!((higgs - 2.0f64.ln()).abs() < 1e-12);
        assert!(higgs > the);
        assert_eq!(idf.idf("quark"), None);
    }

    #[test]
    fn idf_similarity_favours_rare_words() {
        let idf = IdfWeights::from_documents(vec![
            words("the boson"),
            words("the collider"),
            words("the detector"),
            words("the higgs boson"),
        ]);
        let a = words("the higgs boson");
        let shares_rare = words("a higgs boson");
        let shares_common = words("the neutrino");
        let high = similarity(&a, &shares_rare, &idf).unwrap();
        let low = similarity(&a, &shares_common, &idf).unwrap();
        assert!(high > low);
    }

    #[test]
    fn closures_are_weights() {
        let a = words("x yy zzz");
        let b = words("yy zzz");
        let by_len = |t: &String| t.len() as f64;
        let s = similarity(&a, &b, &by_len).unwrap();
        assert!((s - 5.0 / 6.0).abs() < 1e-12);
    }
}
