use num::Float;
use tracing::debug;

use crate::{
    config::RecommenderConfig,
    error::{RecommendError, Result},
    model::{InteractionKind, Item, ItemId, ToggleAction, UserId},
    recommend::Recommender,
    store::{CatalogSource, InteractionSink, InteractionSource},
    vectorizer::tfidf::{DefaultTfidfEngine, TfidfEngine},
};

/// Wires the engine to its catalog and interaction collaborators.
///
/// The two reads of one request are not transactional: a catalog change in
/// between is tolerated, unknown favorites are skipped by the engine.
#[derive(Debug)]
pub struct RecommendationService<C, I, N = f64, E = DefaultTfidfEngine>
where
    N: Float,
    E: TfidfEngine<N>,
{
    catalog: C,
    interactions: I,
    recommender: Recommender<N, E>,
}

impl<C, I> RecommendationService<C, I>
where
    C: CatalogSource,
    I: InteractionSource,
{
    pub fn new(catalog: C, interactions: I, config: RecommenderConfig) -> Self {
        Self::with_recommender(catalog, interactions, Recommender::new(config))
    }
}

impl<C, I, N, E> RecommendationService<C, I, N, E>
where
    C: CatalogSource,
    I: InteractionSource,
    N: Float + Send + Sync,
    E: TfidfEngine<N>,
{
    pub fn with_recommender(catalog: C, interactions: I, recommender: Recommender<N, E>) -> Self {
        Self {
            catalog,
            interactions,
            recommender,
        }
    }

    /// Up to `result_limit` items for `user_id`.
    /// A user without favorites gets the most popular items.
    pub fn recommend(&self, user_id: UserId) -> Result<Vec<Item>> {
        let items = self.catalog.list_all_items()?;
        let favorites = self.interactions.favorited_item_ids(user_id)?;
        debug!(
            user_id,
            catalog = items.len(),
            favorites = favorites.len(),
            "loaded recommendation inputs"
        );
        self.recommender.recommend_for(&items, &favorites)
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn interactions(&self) -> &I {
        &self.interactions
    }

    pub fn into_parts(self) -> (C, I) {
        (self.catalog, self.interactions)
    }
}

impl<C, I, N, E> RecommendationService<C, I, N, E>
where
    C: CatalogSource,
    I: InteractionSource + InteractionSink,
    N: Float + Send + Sync,
    E: TfidfEngine<N>,
{
    /// Toggle an interaction on an item that exists in the catalog
    pub fn interact(
        &mut self,
        user_id: UserId,
        item_id: ItemId,
        kind: InteractionKind,
    ) -> Result<ToggleAction> {
        let known = self
            .catalog
            .list_all_items()?
            .iter()
            .any(|item| item.id == item_id);
        if !known {
            return Err(RecommendError::ItemNotFound(item_id));
        }
        self.interactions.toggle(user_id, item_id, kind)
    }
}
