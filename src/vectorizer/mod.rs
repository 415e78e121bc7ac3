pub mod corpus;
pub mod stop_words;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use num::Float;
use tracing::debug;

use crate::{
    error::{RecommendError, Result},
    utils::math::sparse::SparseVec,
    vectorizer::{
        corpus::Corpus,
        tfidf::{DefaultTfidfEngine, TfidfEngine},
        token::{TermFrequency, Tokenizer},
        vocabulary::Vocabulary,
    },
};

/// TF-IDF matrix of one document set.
/// Row `i` is the L2-normalized weight vector of document `i`,
/// columns follow `vocabulary` order.
#[derive(Debug, Clone)]
pub struct TermWeightMatrix<N = f64>
where
    N: Float,
{
    pub rows: Vec<SparseVec<N>>,
    pub vocabulary: Vocabulary,
}

impl<N> TermWeightMatrix<N>
where
    N: Float,
{
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn row(&self, i: usize) -> Option<&SparseVec<N>> {
        self.rows.get(i)
    }
}

/// Fits a vocabulary on a document set and weights it with TF-IDF.
///
/// Nothing is kept between calls: every `fit_transform` derives the
/// vocabulary from the documents it is given.
///
/// - `N`: weight type (`f32`, `f64`)
/// - `E`: weighting engine
#[derive(Debug, Clone)]
pub struct TfidfVectorizer<N = f64, E = DefaultTfidfEngine>
where
    N: Float,
    E: TfidfEngine<N>,
{
    tokenizer: Tokenizer,
    _marker: PhantomData<(N, E)>,
}

impl<N, E> Default for TfidfVectorizer<N, E>
where
    N: Float,
    E: TfidfEngine<N>,
{
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}

impl<N, E> TfidfVectorizer<N, E>
where
    N: Float,
    E: TfidfEngine<N>,
{
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            _marker: PhantomData,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Build the vocabulary from `corpus` and return its weight matrix.
    ///
    /// Fails with `EmptyVocabulary` when no document has a term left after
    /// stop word removal.
    pub fn fit_transform(&self, corpus: &Corpus) -> Result<TermWeightMatrix<N>> {
        let freqs: Vec<TermFrequency> = corpus
            .documents()
            .iter()
            .map(|doc| self.tokenizer.term_frequency(&doc.text))
            .collect();

        let vocabulary = Vocabulary::from_term_frequencies(&freqs);
        if vocabulary.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }

        let idf = E::idf_vec(&vocabulary);
        let rows: Vec<SparseVec<N>> = freqs
            .iter()
            .map(|freq| {
                let mut row = E::tf_vec(freq, &vocabulary);
                row.hadamard_dense(&idf);
                // zero rows stay zero
                row.l2_normalize();
                row
            })
            .collect();

        debug!(
            documents = rows.len(),
            terms = vocabulary.len(),
            "vectorized corpus"
        );
        Ok(TermWeightMatrix { rows, vocabulary })
    }
}
