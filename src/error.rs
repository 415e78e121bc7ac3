//! Error types for the recommendation engine and its stores.

use thiserror::Error;

use crate::model::ItemId;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The catalog snapshot had no items to build documents from.
    #[error("catalog is empty: no documents to vectorize")]
    EmptyCatalog,

    /// Every document was empty or consisted only of stop words.
    #[error("vocabulary is empty: no terms remain after stop word removal")]
    EmptyVocabulary,

    /// Interaction kind string was neither `favorite` nor `read`.
    #[error("unknown interaction kind: {0:?}")]
    UnknownInteractionKind(String),

    /// The referenced item is not in the catalog.
    #[error("item {0} not found in catalog")]
    ItemNotFound(ItemId),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR serialization/deserialization error.
    #[error("cbor error: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

/// Result type for recommendation operations.
pub type Result<T> = std::result::Result<T, RecommendError>;
