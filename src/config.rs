use std::path::Path;
use std::time::Duration;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::engine::Wardrobe;
use crate::item::{NewItem, Season};
use crate::rotation::{DEGREES_PER_TICK, Rotation, TICK_INTERVAL};
use crate::suggestions::DEFAULT_BATCH_SIZE;

/// Settings read from the `[wardrobe]` table of a TOML file.
///
/// ```toml
/// [wardrobe]
/// season = "Winter"
/// tick_interval_ms = 50
/// seed = 7
///
/// [[wardrobe.items]]
/// name = "Parka"
/// category = "Tops"
/// season = "Winter"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WardrobeConfig {
    pub season: Season,
    pub batch_size: usize,
    pub tick_interval_ms: u64,
    pub degrees_per_tick: u16,
    pub seed: Option<u64>,
    /// Starter items loaded into the catalog at startup.
    pub items: Vec<NewItem>,
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            season: Season::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            tick_interval_ms: TICK_INTERVAL.as_millis() as u64,
            degrees_per_tick: DEGREES_PER_TICK,
            seed: None,
            items: Vec::new(),
        }
    }
}

impl WardrobeConfig {
    /// Load and validate configuration from a TOML file.
    pub async fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&text)
    }

    /// Parse configuration text. A missing `[wardrobe]` table means defaults.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct Root {
            #[serde(default)]
            wardrobe: WardrobeConfig,
        }
        let root: Root = toml::from_str(text)?;
        root.wardrobe.validate()?;
        Ok(root.wardrobe)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size must be greater than zero");
        }
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be greater than zero");
        }
        Rotation::new(self.degrees_per_tick).context("invalid degrees_per_tick")?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Build an empty wardrobe with these settings.
    pub fn build(&self) -> crate::error::Result<Wardrobe> {
        let wardrobe = match self.seed {
            Some(seed) => Wardrobe::seeded(seed),
            None => Wardrobe::new(),
        };
        wardrobe
            .batch_size(self.batch_size)
            .degrees_per_tick(self.degrees_per_tick)
    }
}
