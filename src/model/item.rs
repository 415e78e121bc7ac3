use serde::{Deserialize, Serialize};

use super::ItemId;

/// A catalog book.
/// Field names are the wire shape of the item JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub cover_image_url: String,
    pub category: String,
    /// 0.0 - 5.0
    pub rating: f64,
    /// fallback ranking signal for users without favorites
    pub popularity: u64,
    /// dominant similarity signal
    pub description: String,
}

impl Item {
    /// Text used to represent this item in the similarity model
    /// `title category description`, single-space joined
    pub fn document_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.category.len() + self.description.len() + 2,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.category);
        text.push(' ');
        text.push_str(&self.description);
        text
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn book(
        id: ItemId,
        title: &str,
        category: &str,
        popularity: u64,
        description: &str,
    ) -> Item {
        Item {
            id,
            title: title.to_string(),
            author: "Anonymous".to_string(),
            cover_image_url: format!("https://covers.example/{id}.jpg"),
            category: category.to_string(),
            rating: 4.0,
            popularity,
            description: description.to_string(),
        }
    }
}
