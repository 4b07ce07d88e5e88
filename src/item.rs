use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WardrobeError;

/// Identity of a [`ClothingItem`].
///
/// Every item gets a fresh id when it enters the catalog, so two items with
/// identical fields are still different garments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Garment category. Each outfit holds at most one item per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| WardrobeError::UnknownCategory(s.to_string()))
    }
}

/// Season tag carried by an item.
///
/// [`Season::AllSeasons`] matches every seasonal query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    #[default]
    Fall,
    Winter,
    #[serde(rename = "All Seasons", alias = "AllSeasons")]
    AllSeasons,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::AllSeasons,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::AllSeasons => "All Seasons",
        }
    }

    /// Whether an item tagged with `self` is wearable in `target`.
    pub fn matches(self, target: Season) -> bool {
        self == target || self == Season::AllSeasons
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("AllSeasons") {
            return Ok(Season::AllSeasons);
        }
        Season::ALL
            .into_iter()
            .find(|season| season.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| WardrobeError::UnknownSeason(s.to_string()))
    }
}

/// Opaque picture reference owned by an item. The engine never looks inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageHandle {
    /// Blank stand-in used when no picture was chosen.
    #[default]
    Placeholder,
    File(PathBuf),
}

/// A garment in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub size: String,
    pub color: String,
    pub season: Season,
    pub image: ImageHandle,
}

impl ClothingItem {
    /// Label used in outfit listings, e.g. `Linen shirt (Tops, white)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClothingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.category, self.color)
    }
}

/// Fields for a new catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    pub season: Season,
    #[serde(default)]
    pub image: Option<ImageHandle>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: Category, season: Season) -> Self {
        Self {
            name: name.into(),
            category,
            size: String::new(),
            color: String::new(),
            season,
            image: None,
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }
}

/// Replacement values for an existing item. `None` keeps the current value.
///
/// The category is fixed once an item exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEdit {
    pub name: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub season: Option<Season>,
    pub image: Option<ImageHandle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>().unwrap(), c);
        }
        for s in Season::ALL {
            assert_eq!(s.label().parse::<Season>().unwrap(), s);
        }
        assert_eq!("allseasons".parse::<Season>().unwrap(), Season::AllSeasons);
        assert_eq!(
            "Hats".parse::<Category>(),
            Err(WardrobeError::UnknownCategory("Hats".into()))
        );
    }

    #[test]
    fn all_seasons_matches_every_target() {
        for target in Season::ALL {
            assert!(Season::AllSeasons.matches(target));
        }
        assert!(Season::Fall.matches(Season::Fall));
        assert!(!Season::Fall.matches(Season::Winter));
    }

    #[test]
    fn display_label_lists_category_and_color() {
        let item = ClothingItem {
            id: ItemId::new(),
            name: "Linen shirt".into(),
            category: Category::Tops,
            size: "M".into(),
            color: "white".into(),
            season: Season::Summer,
            image: ImageHandle::Placeholder,
        };
        assert_eq!(item.label(), "Linen shirt (Tops, white)");
    }

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(ItemId::new(), ItemId::new());
    }
}
