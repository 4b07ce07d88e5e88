//! Outfit composition from seasonal pools.
//!
//! Two entry points exist and they differ in how a dress is
//! chosen:
//!
//! - [`compose_suggestion`] flips a fair coin between a dress and separates
//!   whenever dresses are available.
//! - [`compose_daily`] always wears a dress when one is available.
//!
//! Both then add a pair of shoes when possible and flip a coin for an
//! accessory. Every pick is uniform within its pool.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::item::Category;
use crate::outfit::Outfit;
use crate::seasonal::SeasonalPools;

/// Compose one outfit for a suggestion batch.
pub fn compose_suggestion<R: Rng + ?Sized>(pools: &SeasonalPools<'_>, rng: &mut R) -> Outfit {
    let mut outfit = Outfit::new();
    let dress_mode = !pools.pool(Category::Dresses).is_empty() && rng.gen_bool(0.5);
    if dress_mode {
        pick(pools, Category::Dresses, rng, &mut outfit);
    } else {
        pick_separates(pools, rng, &mut outfit);
    }
    finish(pools, rng, &mut outfit);
    outfit
}

/// Compose the outfit of the day, preferring a dress whenever one exists.
pub fn compose_daily<R: Rng + ?Sized>(pools: &SeasonalPools<'_>, rng: &mut R) -> Outfit {
    let mut outfit = Outfit::new();
    if !pools.pool(Category::Dresses).is_empty() {
        pick(pools, Category::Dresses, rng, &mut outfit);
    } else {
        pick_separates(pools, rng, &mut outfit);
    }
    finish(pools, rng, &mut outfit);
    outfit
}

fn pick_separates<R: Rng + ?Sized>(pools: &SeasonalPools<'_>, rng: &mut R, outfit: &mut Outfit) {
    pick(pools, Category::Tops, rng, outfit);
    pick(pools, Category::Bottoms, rng, outfit);
}

// shoes always, accessory on a coin flip
fn finish<R: Rng + ?Sized>(pools: &SeasonalPools<'_>, rng: &mut R, outfit: &mut Outfit) {
    pick(pools, Category::Shoes, rng, outfit);
    if !pools.pool(Category::Accessories).is_empty() && rng.gen_bool(0.5) {
        pick(pools, Category::Accessories, rng, outfit);
    }
}

fn pick<R: Rng + ?Sized>(
    pools: &SeasonalPools<'_>,
    category: Category,
    rng: &mut R,
    outfit: &mut Outfit,
) {
    if let Some(item) = pools.pool(category).choose(rng) {
        outfit.insert(item.id);
    }
}
