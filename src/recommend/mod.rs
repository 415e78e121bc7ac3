pub mod aggregate;
pub mod rank;
pub mod similarity;

use std::collections::BTreeSet;

use num::Float;
use tracing::{debug, info};

use crate::{
    config::RecommenderConfig,
    error::Result,
    model::{Item, ItemId},
    recommend::{aggregate::ScoreVector, similarity::SimilarityMatrix},
    vectorizer::{
        corpus::Corpus,
        tfidf::{DefaultTfidfEngine, TfidfEngine},
        token::Tokenizer,
        TfidfVectorizer,
    },
};

/// Content-based recommendation engine.
///
/// A pure function of (catalog snapshot, favorite ids): documents, TF-IDF
/// weights and similarities are rebuilt on every call and nothing is cached.
#[derive(Debug, Clone)]
pub struct Recommender<N = f64, E = DefaultTfidfEngine>
where
    N: Float,
    E: TfidfEngine<N>,
{
    config: RecommenderConfig,
    vectorizer: TfidfVectorizer<N, E>,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommenderConfig::default())
    }
}

impl<N, E> Recommender<N, E>
where
    N: Float + Send + Sync,
    E: TfidfEngine<N>,
{
    pub fn new(config: RecommenderConfig) -> Self {
        let vectorizer = TfidfVectorizer::new(Tokenizer::new(config.min_token_len));
        Self { config, vectorizer }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Rank `items` for a user who favorited `favorites`.
    ///
    /// An empty favorite set takes the popularity path and never fails.
    /// Otherwise fails with `EmptyCatalog` or `EmptyVocabulary`.
    pub fn recommend_for(&self, items: &[Item], favorites: &BTreeSet<ItemId>) -> Result<Vec<Item>> {
        let limit = self.config.result_limit;
        if favorites.is_empty() {
            let result = rank::rank_by_popularity(items, limit);
            info!(
                path = "cold_start",
                catalog = items.len(),
                results = result.len(),
                "recommended"
            );
            return Ok(result);
        }

        let scores = self.score(items, favorites)?;
        let result = rank::rank_by_score(items, &scores.scores, favorites, limit);
        info!(
            path = "personalized",
            catalog = items.len(),
            favorites = favorites.len(),
            results = result.len(),
            "recommended"
        );
        Ok(result)
    }

    /// Aggregate scores of every item in `items` against `favorites`
    pub fn score(&self, items: &[Item], favorites: &BTreeSet<ItemId>) -> Result<ScoreVector> {
        let (similarity, corpus) = self.similarity(items)?;
        let scores = ScoreVector::aggregate(&similarity, corpus.index(), favorites);
        debug!(favorites = favorites.len(), "aggregated scores");
        Ok(scores)
    }

    /// Pairwise similarity of `items` with the corpus it was built from
    pub fn similarity(&self, items: &[Item]) -> Result<(SimilarityMatrix, Corpus)> {
        let corpus = Corpus::build(items)?;
        let weights = self.vectorizer.fit_transform(&corpus)?;
        let similarity = SimilarityMatrix::compute(&weights, self.config.parallel_threshold);
        Ok((similarity, corpus))
    }
}
