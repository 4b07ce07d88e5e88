use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::catalog::Catalog;
use crate::composer::compose_daily;
use crate::error::{Result, WardrobeError};
use crate::item::{ClothingItem, ItemEdit, ItemId, NewItem, Season};
use crate::outfit::Outfit;
use crate::rotation::{Rotation, RotationState};
use crate::seasonal::SeasonalPools;
use crate::suggestions::{DEFAULT_BATCH_SIZE, SuggestionQueue};

/// Notification for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WardrobeEvent {
    /// The display turned; redraw at `angle`.
    Tick { angle: u16, outfit_changed: bool },
    /// The rotation went idle.
    RotationStopped { reason: StopReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Requested through [`Wardrobe::stop_rotation`].
    Manual,
    /// A sweep finished with no suggestion left to show.
    Exhausted,
}

/// Result of [`Wardrobe::start_rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStart {
    Started,
    AlreadyRunning,
}

/// Read model handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WardrobeSnapshot {
    pub catalog: Vec<ClothingItem>,
    pub current_outfit: Vec<ClothingItem>,
    pub rotation: RotationState,
    pub queued_suggestions: usize,
}

/// Owner of all wardrobe state: the catalog, the current outfit, the
/// suggestion queue and the rotating display.
///
/// Every mutation goes through `&mut self`, so a single owner serialises
/// them. [`crate::runtime`] wraps a `Wardrobe` in a task to share it.
///
/// ```
/// use wardrobe_rs::{Category, NewItem, Season, Wardrobe};
///
/// let mut wardrobe = Wardrobe::seeded(7);
/// let shoes = wardrobe
///     .add_item(NewItem::new("Loafers", Category::Shoes, Season::AllSeasons))
///     .unwrap();
/// let outfit = wardrobe.generate_daily_outfit(Season::Fall);
/// assert_eq!(outfit.ids(), &[shoes]);
/// ```
#[derive(Debug)]
pub struct Wardrobe<R = StdRng> {
    catalog: Catalog,
    current: Outfit,
    suggestions: SuggestionQueue,
    rotation: Rotation,
    batch_size: usize,
    rng: R,
}

impl Wardrobe<StdRng> {
    /// Wardrobe drawing randomness from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Wardrobe with a reproducible random sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Wardrobe<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Wardrobe<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            catalog: Catalog::new(),
            current: Outfit::new(),
            suggestions: SuggestionQueue::new(),
            rotation: Rotation::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            rng,
        }
    }

    /// Number of outfits attempted per suggestion batch.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Degrees turned per tick. Fails unless `step` divides 360.
    pub fn degrees_per_tick(mut self, step: u16) -> Result<Self> {
        self.rotation = Rotation::new(step)?;
        Ok(self)
    }

    pub fn add_item(&mut self, item: NewItem) -> Result<ItemId> {
        self.catalog.add(item).map(|i| i.id)
    }

    /// Remove an item from the catalog and from the current outfit.
    pub fn delete_item(&mut self, id: ItemId) -> Result<ClothingItem> {
        let item = self.catalog.remove(id)?;
        if self.current.remove(id) {
            debug!(%id, "removed deleted item from current outfit");
        }
        Ok(item)
    }

    pub fn edit_item(&mut self, id: ItemId, edit: ItemEdit) -> Result<()> {
        self.catalog.edit(id, edit).map(|_| ())
    }

    /// Put an item on. Returns `false` if it was already worn.
    pub fn toggle_in_outfit(&mut self, id: ItemId) -> Result<bool> {
        if !self.catalog.contains(id) {
            return Err(WardrobeError::UnknownItem(id));
        }
        Ok(self.current.insert(id))
    }

    /// Replace the current outfit with the outfit of the day.
    pub fn generate_daily_outfit(&mut self, season: Season) -> Outfit {
        let pools = SeasonalPools::for_season(&self.catalog, season);
        let outfit = compose_daily(&pools, &mut self.rng);
        info!(%season, items = outfit.len(), "daily outfit generated");
        self.current = outfit.clone();
        outfit
    }

    /// Refill the suggestion queue and preview its first outfit.
    ///
    /// The previous queue is discarded first. When nothing could be composed
    /// the queue stays empty, the current outfit is untouched and
    /// [`WardrobeError::InsufficientItems`] is returned.
    pub fn generate_suggestions(&mut self, season: Season) -> Result<Outfit> {
        self.suggestions.clear();
        let pools = SeasonalPools::for_season(&self.catalog, season);
        let queue = SuggestionQueue::generate(&pools, self.batch_size, &mut self.rng);
        let preview = queue.front().cloned().ok_or_else(|| {
            info!(%season, "not enough clothing items for suggestions");
            WardrobeError::InsufficientItems
        })?;
        info!(%season, count = queue.len(), "suggestions generated");
        self.suggestions = queue;
        self.current = preview.clone();
        Ok(preview)
    }

    /// Start cycling through the suggestion queue.
    ///
    /// A running rotation answers [`RotationStart::AlreadyRunning`] even on
    /// its last sweep, after the queue has drained. Only an idle rotation
    /// with nothing queued is rejected.
    pub fn start_rotation(&mut self) -> Result<RotationStart> {
        if self.rotation.is_running() {
            return Ok(RotationStart::AlreadyRunning);
        }
        if self.suggestions.is_empty() {
            return Err(WardrobeError::EmptySuggestionQueue);
        }
        self.rotation.begin();
        info!(
            angle = self.rotation.state().angle,
            queued = self.suggestions.len(),
            "rotation started"
        );
        Ok(RotationStart::Started)
    }

    /// Stop the rotation. Returns `None` when it was already idle.
    pub fn stop_rotation(&mut self) -> Option<WardrobeEvent> {
        if !self.rotation.halt() {
            return None;
        }
        info!(angle = self.rotation.state().angle, "rotation stopped");
        Some(WardrobeEvent::RotationStopped {
            reason: StopReason::Manual,
        })
    }

    /// Advance a running rotation by one tick.
    ///
    /// After a full sweep the next suggestion becomes the current outfit; if
    /// none is left the rotation stops instead. Idle rotations yield nothing.
    pub fn tick(&mut self) -> Vec<WardrobeEvent> {
        let Some(advance) = self.rotation.advance() else {
            return Vec::new();
        };
        trace!(angle = advance.angle, "rotation tick");
        if !advance.sweep_completed {
            return vec![WardrobeEvent::Tick {
                angle: advance.angle,
                outfit_changed: false,
            }];
        }
        match self.suggestions.pop_front() {
            Some(mut next) => {
                next.retain_known(&self.catalog);
                debug!(
                    items = next.len(),
                    remaining = self.suggestions.len(),
                    "showing next suggestion"
                );
                self.current = next;
                vec![WardrobeEvent::Tick {
                    angle: advance.angle,
                    outfit_changed: true,
                }]
            }
            None => {
                self.rotation.halt();
                info!("suggestions exhausted, rotation stopped");
                vec![
                    WardrobeEvent::Tick {
                        angle: advance.angle,
                        outfit_changed: false,
                    },
                    WardrobeEvent::RotationStopped {
                        reason: StopReason::Exhausted,
                    },
                ]
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_outfit(&self) -> &Outfit {
        &self.current
    }

    /// Items of the current outfit, in wearing order.
    pub fn current_items(&self) -> Vec<&ClothingItem> {
        self.current.resolve(&self.catalog)
    }

    /// Display labels of the current outfit.
    pub fn outfit_labels(&self) -> Vec<String> {
        self.current_items().iter().map(|i| i.label()).collect()
    }

    pub fn suggestions(&self) -> &SuggestionQueue {
        &self.suggestions
    }

    pub fn rotation_state(&self) -> RotationState {
        self.rotation.state()
    }

    pub fn ticks_per_sweep(&self) -> u32 {
        self.rotation.ticks_per_sweep()
    }

    pub fn snapshot(&self) -> WardrobeSnapshot {
        WardrobeSnapshot {
            catalog: self.catalog.iter().cloned().collect(),
            current_outfit: self.current_items().into_iter().cloned().collect(),
            rotation: self.rotation.state(),
            queued_suggestions: self.suggestions.len(),
        }
    }
}
