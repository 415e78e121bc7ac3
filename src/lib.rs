/// This crate is a content-based book recommendation engine using TF-IDF and cosine similarity.
pub mod config;
pub mod error;
pub mod model;
pub mod recommend;
pub mod service;
pub mod store;
pub mod utils;
pub mod vectorizer;

/// Recommendation Engine
/// The top-level struct of this crate.
/// It turns a catalog snapshot and a user's favorite item ids into a ranked
/// list of items.
///
/// Every call rebuilds, from scratch:
/// - one text document per item (title, category, description)
/// - the TF-IDF weight matrix with its vocabulary
/// - the full pairwise cosine-similarity matrix
///
/// Users without favorites get the most popular items instead.
///
/// `Recommender<N, E>` has the following generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF engine type (e.g., DefaultTfidfEngine)
pub use recommend::Recommender;

/// Recommendation Service
/// Binds a `Recommender` to a catalog source and an interaction source and
/// exposes `recommend(user_id)`.
pub use service::RecommendationService;

/// Configuration
/// Result size, parallel threshold and tokenizer settings.
pub use config::RecommenderConfig;

/// Error and Result types
pub use error::{RecommendError, Result};

/// Catalog item and interaction types
pub use model::{
    Category, InteractionKind, InteractionRecord, Item, ItemId, ToggleAction, UserId,
};

/// Collaborator traits and their in-memory implementations
pub use store::{
    CatalogSource, InteractionSink, InteractionSource, MemoryCatalog, MemoryInteractions, Snapshot,
};

/// TF-IDF Vectorizer
/// Fits a vocabulary on a document set, drops English stop words and weights
/// each document with smoothed TF-IDF, rows L2-normalized.
pub use vectorizer::{TermWeightMatrix, TfidfVectorizer};

/// TF IDF Calculation Engine Trait
/// Plug a different weighting into `TfidfVectorizer<N, E>`.
/// `DefaultTfidfEngine` uses raw counts and `ln((1 + n) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{DefaultTfidfEngine, TfidfEngine};

/// Term Frequency structure
/// Term occurrence counts of one document.
pub use vectorizer::token::{TermFrequency, Tokenizer};

/// Corpus of one catalog snapshot and its item id -> row index
pub use vectorizer::corpus::{Corpus, Document, ItemIndex};

/// Pairwise cosine similarity and per-user aggregate scores
pub use recommend::{aggregate::ScoreVector, similarity::SimilarityMatrix};
