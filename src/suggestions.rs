use std::collections::VecDeque;

use rand::Rng;

use crate::composer::compose_suggestion;
use crate::outfit::Outfit;
use crate::seasonal::SeasonalPools;

/// Number of outfits attempted per suggestion batch.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// FIFO of suggested outfits waiting to be shown.
///
/// Outfits are copied in at generation time; later catalog changes do not
/// touch the queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionQueue {
    outfits: VecDeque<Outfit>,
}

impl SuggestionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose `batch_size` suggestions from `pools`, dropping empty ones.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wardrobe_rs::{Catalog, Season, SeasonalPools, SuggestionQueue};
    ///
    /// let catalog = Catalog::new();
    /// let pools = SeasonalPools::for_season(&catalog, Season::Fall);
    /// let queue = SuggestionQueue::generate(&pools, 5, &mut StdRng::seed_from_u64(1));
    /// assert!(queue.is_empty());
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        pools: &SeasonalPools<'_>,
        batch_size: usize,
        rng: &mut R,
    ) -> Self {
        let outfits = (0..batch_size)
            .map(|_| compose_suggestion(pools, rng))
            .filter(|outfit| !outfit.is_empty())
            .collect();
        Self { outfits }
    }

    pub fn pop_front(&mut self) -> Option<Outfit> {
        self.outfits.pop_front()
    }

    pub fn front(&self) -> Option<&Outfit> {
        self.outfits.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outfit> {
        self.outfits.iter()
    }

    pub fn clear(&mut self) {
        self.outfits.clear();
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::item::{Category, NewItem, Season};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn batch_is_bounded_and_non_empty() {
        let mut catalog = Catalog::new();
        catalog
            .add(NewItem::new("Sundress", Category::Dresses, Season::Summer))
            .unwrap();
        catalog
            .add(NewItem::new("Hat", Category::Accessories, Season::Summer))
            .unwrap();
        let pools = SeasonalPools::for_season(&catalog, Season::Summer);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let queue = SuggestionQueue::generate(&pools, DEFAULT_BATCH_SIZE, &mut rng);
            assert!(queue.len() <= DEFAULT_BATCH_SIZE);
            assert!(queue.iter().all(|o| !o.is_empty()));
        }
    }

    #[test]
    fn shoes_guarantee_a_full_batch() {
        let mut catalog = Catalog::new();
        catalog
            .add(NewItem::new("Sneakers", Category::Shoes, Season::AllSeasons))
            .unwrap();
        let pools = SeasonalPools::for_season(&catalog, Season::Winter);
        let mut rng = StdRng::seed_from_u64(3);
        let mut queue = SuggestionQueue::generate(&pools, DEFAULT_BATCH_SIZE, &mut rng);
        assert_eq!(queue.len(), DEFAULT_BATCH_SIZE);
        let first = queue.front().cloned();
        assert_eq!(queue.pop_front(), first);
        assert_eq!(queue.len(), DEFAULT_BATCH_SIZE - 1);
    }

    #[test]
    fn out_of_season_catalog_yields_nothing() {
        let mut catalog = Catalog::new();
        catalog
            .add(NewItem::new("Parka", Category::Tops, Season::Winter))
            .unwrap();
        let pools = SeasonalPools::for_season(&catalog, Season::Summer);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(SuggestionQueue::generate(&pools, DEFAULT_BATCH_SIZE, &mut rng).is_empty());
    }
}
