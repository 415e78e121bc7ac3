pub mod category;
pub mod interaction;
pub mod item;

pub use category::Category;
pub use interaction::{InteractionKind, InteractionRecord, ToggleAction};
pub use item::Item;

/// Catalog item identifier
pub type ItemId = u64;
/// User identifier
pub type UserId = u64;
