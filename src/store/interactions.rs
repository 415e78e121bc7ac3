use std::collections::BTreeSet;

use indexmap::IndexSet;
use tracing::debug;

use crate::{
    error::Result,
    model::{InteractionKind, InteractionRecord, ItemId, ToggleAction, UserId},
    store::{InteractionSink, InteractionSource},
};

/// Interaction records held in memory.
/// Set semantics keep at most one record per (user, item, kind).
#[derive(Debug, Clone, Default)]
pub struct MemoryInteractions {
    records: IndexSet<InteractionRecord>,
}

impl MemoryInteractions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicate records collapse into one
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = InteractionRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn contains(&self, record: &InteractionRecord) -> bool {
        self.records.contains(record)
    }

    /// All records of `user_id` in insertion order
    pub fn records_for(&self, user_id: UserId) -> Vec<InteractionRecord> {
        self.records
            .iter()
            .filter(|r| r.user_id == user_id)
            .copied()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl InteractionSource for MemoryInteractions {
    fn favorited_item_ids(&self, user_id: UserId) -> Result<BTreeSet<ItemId>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.user_id == user_id && r.kind == InteractionKind::Favorite)
            .map(|r| r.item_id)
            .collect())
    }
}

impl InteractionSink for MemoryInteractions {
    fn toggle(
        &mut self,
        user_id: UserId,
        item_id: ItemId,
        kind: InteractionKind,
    ) -> Result<ToggleAction> {
        let record = InteractionRecord::new(user_id, item_id, kind);
        let action = if self.records.shift_remove(&record) {
            ToggleAction::Removed
        } else {
            self.records.insert(record);
            ToggleAction::Added
        };
        debug!(user_id, item_id, %kind, %action, "toggled interaction");
        Ok(action)
    }
}
