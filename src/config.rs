//! Tunables for the recommendation pipeline.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// Configuration for vectorization, similarity and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Maximum number of items returned by one recommendation.
    pub result_limit: usize,
    /// Catalog size from which similarity rows are computed on the rayon pool.
    pub parallel_threshold: usize,
    /// Shortest token (in chars) kept by the tokenizer.
    pub min_token_len: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            result_limit: 10,
            parallel_threshold: 256,
            min_token_len: 2,
        }
    }
}

impl RecommenderConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(RecommendError::Config("result_limit must be at least 1".into()));
        }
        if self.min_token_len == 0 {
            return Err(RecommendError::Config("min_token_len must be at least 1".into()));
        }
        Ok(())
    }
}
