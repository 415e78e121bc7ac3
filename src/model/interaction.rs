use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{ItemId, UserId};
use crate::error::RecommendError;

/// What a user did with an item.
/// Only `Favorite` feeds the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Favorite,
    Read,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "favorite",
            InteractionKind::Read => "read",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorite" => Ok(InteractionKind::Favorite),
            "read" => Ok(InteractionKind::Read),
            other => Err(RecommendError::UnknownInteractionKind(other.to_string())),
        }
    }
}

/// One (user, item, kind) presence record.
/// Stores keep at most one record per triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub kind: InteractionKind,
}

impl InteractionRecord {
    pub fn new(user_id: UserId, item_id: ItemId, kind: InteractionKind) -> Self {
        Self { user_id, item_id, kind }
    }
}

/// Outcome of a toggle on an interaction store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleAction::Added => f.write_str("added"),
            ToggleAction::Removed => f.write_str("removed"),
        }
    }
}
