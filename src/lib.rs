//! Outfit composition and rotation engine for a personal wardrobe.
//!
//! A [`Catalog`] of clothing items is projected into [`SeasonalPools`], from
//! which the composer builds outfits. Suggestions fill a [`SuggestionQueue`]
//! that a timed [`Rotation`] cycles through, one outfit per full sweep of the
//! display. [`Wardrobe`] owns all of it; [`runtime`] shares it between a
//! presentation layer and the rotation timer.

pub mod advice;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod engine;
pub mod error;
pub mod item;
pub mod logging;
pub mod outfit;
pub mod rotation;
pub mod runtime;
pub mod seasonal;
mod shutdown;
pub mod suggestions;
mod ticker;

pub use advice::{daily_outfit_banner, seasonal_advice, suggestions_banner};
pub use catalog::Catalog;
pub use composer::{compose_daily, compose_suggestion};
pub use config::WardrobeConfig;
pub use engine::{RotationStart, StopReason, Wardrobe, WardrobeEvent, WardrobeSnapshot};
pub use error::{Result, ValidationError, WardrobeError};
pub use item::{Category, ClothingItem, ImageHandle, ItemEdit, ItemId, NewItem, Season};
pub use outfit::Outfit;
pub use rotation::{Rotation, RotationState};
pub use runtime::WardrobeHandle;
pub use seasonal::SeasonalPools;
pub use shutdown::{ShutdownSignal, shutdown_signal};
pub use suggestions::SuggestionQueue;
