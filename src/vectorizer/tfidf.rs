use num::Float;

use crate::{
    utils::math::sparse::SparseVec,
    vectorizer::{token::TermFrequency, vocabulary::Vocabulary},
};

/// Pluggable TF-IDF weighting strategy.
pub trait TfidfEngine<N>
where
    N: Float,
{
    /// IDF weight per vocabulary column
    /// # Arguments
    /// * `vocab` - vocabulary with document frequencies
    fn idf_vec(vocab: &Vocabulary) -> Vec<N>;

    /// TF vector of one document over the vocabulary columns
    /// # Arguments
    /// * `freq` - term counts of the document
    /// * `vocab` - vocabulary with document frequencies
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> SparseVec<N>;
}

/// Default engine
///
/// - tf: raw term count
/// - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
///
/// Works for any `num::Float` (`f32`, `f64`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfidfEngine;

#[inline]
fn cast<N: Float>(v: f64) -> N {
    N::from(v).unwrap_or_else(N::zero)
}

impl<N> TfidfEngine<N> for DefaultTfidfEngine
where
    N: Float,
{
    fn idf_vec(vocab: &Vocabulary) -> Vec<N> {
        let doc_num = vocab.doc_num() as f64;
        vocab
            .iter()
            .map(|(_, df)| cast(((1.0 + doc_num) / (1.0 + df as f64)).ln() + 1.0))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> SparseVec<N> {
        let pairs = freq
            .iter()
            .filter_map(|(term, count)| vocab.column_of(term).map(|col| (col, cast(count as f64))));
        SparseVec::from_pairs(vocab.len(), pairs)
    }
}
