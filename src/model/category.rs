use serde::{Deserialize, Serialize};

/// Catalog category as listed to clients.
/// `id` is the 1-based ordinal of the category in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
