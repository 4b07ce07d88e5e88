use serde::Serialize;

use crate::catalog::Catalog;
use crate::item::{ClothingItem, ItemId};

/// Ordered selection of catalog items worn together.
///
/// An outfit only references items by [`ItemId`]; the [`Catalog`] owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outfit {
    items: Vec<ItemId>,
}

impl Outfit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` unless it is already part of the outfit.
    ///
    /// Returns `true` when the item was added.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Drop `id` from the outfit, returning whether it was present.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| *i != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keep only the items that still exist in `catalog`.
    pub fn retain_known(&mut self, catalog: &Catalog) {
        self.items.retain(|id| catalog.contains(*id));
    }

    /// Look every reference up in `catalog`, skipping missing ones.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ClothingItem> {
        self.items.iter().filter_map(|id| catalog.get(*id)).collect()
    }
}

impl FromIterator<ItemId> for Outfit {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        let mut outfit = Outfit::new();
        for id in iter {
            outfit.insert(id);
        }
        outfit
    }
}
