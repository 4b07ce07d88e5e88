use thiserror::Error;

use crate::item::ItemId;

/// Errors surfaced by wardrobe commands.
///
/// None of these are fatal: the engine state is left untouched and the caller
/// may retry with different input (for example after adding more items).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WardrobeError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not enough clothing items to generate suggestions")]
    InsufficientItems,

    #[error("generate outfit suggestions first")]
    EmptySuggestionQueue,

    #[error("unknown clothing item: {0}")]
    UnknownItem(ItemId),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown season: {0}")]
    UnknownSeason(String),

    #[error("degrees per tick must divide 360, got {0}")]
    InvalidStep(u16),

    #[error("wardrobe engine has shut down")]
    EngineStopped,
}

/// A required field was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, WardrobeError>;
