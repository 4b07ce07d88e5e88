use tracing::debug;

use crate::error::{Result, ValidationError, WardrobeError};
use crate::item::{ClothingItem, ItemEdit, ItemId, NewItem};

/// Ordered collection owning every [`ClothingItem`].
///
/// Insertion order is preserved; seasonal pools and listings follow it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new item, trimming its text fields.
    ///
    /// Fails with [`ValidationError::EmptyName`] when the trimmed name is
    /// empty; the catalog is left unchanged in that case.
    pub fn add(&mut self, new: NewItem) -> Result<&ClothingItem> {
        let name = required_name(&new.name)?;
        let item = ClothingItem {
            id: ItemId::new(),
            name,
            category: new.category,
            size: new.size.trim().to_string(),
            color: new.color.trim().to_string(),
            season: new.season,
            image: new.image.unwrap_or_default(),
        };
        debug!(id = %item.id, item = %item, "catalog item added");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove an item, returning it.
    pub fn remove(&mut self, id: ItemId) -> Result<ClothingItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(WardrobeError::UnknownItem(id))?;
        let item = self.items.remove(pos);
        debug!(%id, item = %item, "catalog item removed");
        Ok(item)
    }

    /// Apply `edit` in place. The item keeps its identity and position.
    pub fn edit(&mut self, id: ItemId, edit: ItemEdit) -> Result<&ClothingItem> {
        let name = edit.name.as_deref().map(required_name).transpose()?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(WardrobeError::UnknownItem(id))?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(size) = edit.size {
            item.size = size.trim().to_string();
        }
        if let Some(color) = edit.color {
            item.color = color.trim().to_string();
        }
        if let Some(season) = edit.season {
            item.season = season;
        }
        if let Some(image) = edit.image {
            item.image = image;
        }
        debug!(%id, item = %item, "catalog item edited");
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&ClothingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClothingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn required_name(raw: &str) -> std::result::Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, ImageHandle, Season};

    #[test]
    fn add_trims_fields_and_defaults_image() {
        let mut catalog = Catalog::new();
        let item = catalog
            .add(
                NewItem::new("  Wool coat ", Category::Tops, Season::Winter)
                    .size(" L ")
                    .color(" navy"),
            )
            .unwrap();
        assert_eq!(item.name, "Wool coat");
        assert_eq!(item.size, "L");
        assert_eq!(item.color, "navy");
        assert_eq!(item.image, ImageHandle::Placeholder);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn blank_name_is_rejected_without_side_effects() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add(NewItem::new("   ", Category::Shoes, Season::Fall))
            .unwrap_err();
        assert_eq!(err, WardrobeError::Validation(ValidationError::EmptyName));
        assert!(catalog.is_empty());
    }

    #[test]
    fn identical_fields_still_yield_distinct_items() {
        let mut catalog = Catalog::new();
        let a = catalog
            .add(NewItem::new("Tee", Category::Tops, Season::Summer))
            .unwrap()
            .id;
        let b = catalog
            .add(NewItem::new("Tee", Category::Tops, Season::Summer))
            .unwrap()
            .id;
        assert_ne!(a, b);
        catalog.remove(a).unwrap();
        assert!(catalog.contains(b));
        assert!(!catalog.contains(a));
    }

    #[test]
    fn edit_keeps_identity_and_order() {
        let mut catalog = Catalog::new();
        let first = catalog
            .add(NewItem::new("Skirt", Category::Bottoms, Season::Spring))
            .unwrap()
            .id;
        let second = catalog
            .add(NewItem::new("Boots", Category::Shoes, Season::Winter))
            .unwrap()
            .id;
        let edit = ItemEdit {
            name: Some("Pleated skirt".into()),
            season: Some(Season::AllSeasons),
            ..ItemEdit::default()
        };
        catalog.edit(first, edit).unwrap();
        let ids: Vec<_> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first, second]);
        let edited = catalog.get(first).unwrap();
        assert_eq!(edited.name, "Pleated skirt");
        assert_eq!(edited.season, Season::AllSeasons);
        assert_eq!(edited.category, Category::Bottoms);
    }

    #[test]
    fn edit_rejects_blank_name_and_unknown_ids() {
        let mut catalog = Catalog::new();
        let id = catalog
            .add(NewItem::new("Scarf", Category::Accessories, Season::Fall))
            .unwrap()
            .id;
        let blank = ItemEdit {
            name: Some(" ".into()),
            color: Some("red".into()),
            ..ItemEdit::default()
        };
        assert!(catalog.edit(id, blank).is_err());
        assert_eq!(catalog.get(id).unwrap().color, "");

        let missing = ItemId::new();
        assert_eq!(
            catalog.edit(missing, ItemEdit::default()).unwrap_err(),
            WardrobeError::UnknownItem(missing)
        );
        assert_eq!(
            catalog.remove(missing).unwrap_err(),
            WardrobeError::UnknownItem(missing)
        );
    }
}
