//! Collaborator interfaces the engine reads from, with in-memory backings.

pub mod catalog;
pub mod interactions;
pub mod snapshot;

use std::collections::BTreeSet;

use crate::{
    error::Result,
    model::{InteractionKind, Item, ItemId, ToggleAction, UserId},
};

pub use catalog::MemoryCatalog;
pub use interactions::MemoryInteractions;
pub use snapshot::Snapshot;

/// Catalog read side
pub trait CatalogSource {
    /// Every item, in the store's stable order
    fn list_all_items(&self) -> Result<Vec<Item>>;
}

/// Interaction read side
pub trait InteractionSource {
    /// Items `user_id` has marked `favorite`, deduplicated
    fn favorited_item_ids(&self, user_id: UserId) -> Result<BTreeSet<ItemId>>;
}

/// Interaction write side
pub trait InteractionSink {
    /// Remove the (user, item, kind) record if present, add it otherwise
    fn toggle(
        &mut self,
        user_id: UserId,
        item_id: ItemId,
        kind: InteractionKind,
    ) -> Result<ToggleAction>;
}
