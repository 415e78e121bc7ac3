use indexmap::{IndexMap, IndexSet};

use crate::{
    error::Result,
    model::{Category, Item, ItemId},
    store::CatalogSource,
};

/// Catalog held in memory, keyed by item id in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: IndexMap<ItemId, Item>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later items replace earlier ones with the same id, keeping the
    /// earlier position.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item);
        }
        catalog
    }

    /// Insert or replace; returns the replaced item
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id, item)
    }

    /// Remove keeping the order of the remaining items
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.shift_remove(&id)
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Items whose category equals `name` exactly
    pub fn items_by_category(&self, name: &str) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.category == name)
            .cloned()
            .collect()
    }

    /// Distinct categories in first-seen order, numbered from 1
    pub fn categories(&self) -> Vec<Category> {
        let names: IndexSet<&str> = self
            .items
            .values()
            .map(|item| item.category.as_str())
            .collect();
        names
            .into_iter()
            .enumerate()
            .map(|(pos, name)| Category {
                id: pos as u64 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

impl CatalogSource for MemoryCatalog {
    fn list_all_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.values().cloned().collect())
    }
}
