use crate::catalog::Catalog;
use crate::item::{Category, ClothingItem, Season};

/// Catalog items wearable in one season, split by category.
///
/// Each pool keeps catalog order.
#[derive(Debug, Clone, Default)]
pub struct SeasonalPools<'a> {
    pools: [Vec<&'a ClothingItem>; 5],
}

impl<'a> SeasonalPools<'a> {
    /// Collect every item tagged with `season` or [`Season::AllSeasons`].
    pub fn for_season(catalog: &'a Catalog, season: Season) -> Self {
        let mut pools: [Vec<&'a ClothingItem>; 5] = Default::default();
        for item in catalog.iter().filter(|i| i.season.matches(season)) {
            pools[item.category.index()].push(item);
        }
        Self { pools }
    }

    pub fn pool(&self, category: Category) -> &[&'a ClothingItem] {
        &self.pools[category.index()]
    }

    /// True when no category has anything to offer.
    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }
}
