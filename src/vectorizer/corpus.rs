use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::{RecommendError, Result},
    model::{Item, ItemId},
};

/// Immutable item id -> matrix row mapping for one catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemIndex {
    id_to_row: IndexMap<ItemId, usize>,
}

impl ItemIndex {
    /// Map each item to its position in `items`.
    /// A repeated id maps to its last position.
    pub fn from_items(items: &[Item]) -> Self {
        let mut id_to_row = IndexMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            id_to_row.insert(item.id, row);
        }
        Self { id_to_row }
    }

    #[inline]
    pub fn row_of(&self, id: ItemId) -> Option<usize> {
        self.id_to_row.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.id_to_row.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.id_to_row.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id_to_row.is_empty()
    }
}

/// One text document per catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub item_id: ItemId,
    pub text: String,
}

/// Ordered documents of a catalog snapshot plus their id index.
/// Document `i` belongs to item `i` of the snapshot.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    index: ItemIndex,
}

impl Corpus {
    /// Build one document per item, preserving item order.
    pub fn build(items: &[Item]) -> Result<Self> {
        if items.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }
        let documents: Vec<Document> = items
            .iter()
            .map(|item| Document {
                item_id: item.id,
                text: item.document_text(),
            })
            .collect();
        let index = ItemIndex::from_items(items);
        debug!(documents = documents.len(), "built corpus");
        Ok(Self { documents, index })
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn index(&self) -> &ItemIndex {
        &self.index
    }

    /// number of documents
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }
}
