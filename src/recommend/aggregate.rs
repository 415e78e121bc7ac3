use std::collections::BTreeSet;

use tracing::debug;

use crate::{model::ItemId, recommend::similarity::SimilarityMatrix, vectorizer::corpus::ItemIndex};

/// Per-item sum of similarities to every favorited item
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    pub scores: Vec<f64>,
}

impl ScoreVector {
    /// Sum the similarity rows of `favorites` into one vector of length N.
    ///
    /// Favorites missing from `index` are skipped. `BTreeSet` keeps the
    /// summation order, and therefore the float result, stable.
    pub fn aggregate(
        matrix: &SimilarityMatrix,
        index: &ItemIndex,
        favorites: &BTreeSet<ItemId>,
    ) -> Self {
        let mut scores = vec![0.0; matrix.len()];
        for id in favorites {
            match index.row_of(*id) {
                Some(row) => {
                    for (acc, sim) in scores.iter_mut().zip(matrix.row(row)) {
                        *acc += *sim;
                    }
                }
                None => debug!(item_id = id, "favorite not in catalog, skipped"),
            }
        }
        Self { scores }
    }

    #[inline]
    pub fn get(&self, row: usize) -> f64 {
        self.scores.get(row).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
