use std::path::PathBuf;

use clap::Parser;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use wardrobe_rs::logging::{self, LogLevel};
use wardrobe_rs::{
    Season, StopReason, WardrobeConfig, WardrobeError, WardrobeEvent, runtime, shutdown_signal,
    suggestions_banner,
};

#[derive(Parser, Debug)]
#[command(name = "wardrobe", about = "Rotate seasonal outfit suggestions")]
struct Cli {
    /// Path to a config TOML with a [wardrobe] table
    #[arg(long, env = "WARDROBE_CONFIG")]
    config: Option<PathBuf>,

    /// Season to dress for, overriding the config
    #[arg(long)]
    season: Option<Season>,

    /// Seed for reproducible outfits, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Logging verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Print the final wardrobe snapshot as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let mut cfg = match &cli.config {
        Some(path) => WardrobeConfig::load(path).await?,
        None => WardrobeConfig::default(),
    };
    if let Some(season) = cli.season {
        cfg.season = season;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }

    let mut wardrobe = cfg.build()?;
    for item in cfg.items.iter().cloned() {
        let name = item.name.clone();
        if let Err(e) = wardrobe.add_item(item) {
            warn!(%name, error = %e, "skipping starter item");
        }
    }
    info!(items = wardrobe.catalog().len(), season = %cfg.season, "catalog loaded");

    let (handle, join) = runtime::spawn(wardrobe, cfg.tick_interval());
    let mut events = handle.subscribe();

    match handle.generate_suggestions(cfg.season).await {
        Ok(_) => {
            let queued = handle.snapshot().await?.queued_suggestions;
            println!("{}", suggestions_banner(queued, cfg.season));
            handle.start_rotation().await?;
            tokio::select! {
                _ = watch_rotation(&mut events) => {}
                signal = shutdown_signal() => {
                    info!(%signal, "stopping rotation");
                    handle.stop_rotation().await?;
                }
            }
        }
        Err(WardrobeError::InsufficientItems) => {
            println!("Not enough clothing items to generate suggestions.");
        }
        Err(e) => return Err(e.into()),
    }

    let snapshot = handle.snapshot().await?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for item in &snapshot.current_outfit {
            println!("{item}");
        }
    }
    handle.shutdown().await;
    join.await?;
    Ok(())
}

async fn watch_rotation(events: &mut tokio::sync::broadcast::Receiver<WardrobeEvent>) {
    loop {
        match events.recv().await {
            Ok(WardrobeEvent::Tick {
                angle,
                outfit_changed: true,
            }) => info!(angle, "next outfit on display"),
            Ok(WardrobeEvent::Tick { .. }) => {}
            Ok(WardrobeEvent::RotationStopped { reason }) => {
                if reason == StopReason::Exhausted {
                    info!("all suggestions shown");
                }
                return;
            }
            Err(RecvError::Lagged(n)) => warn!(skipped = n, "display fell behind"),
            Err(RecvError::Closed) => return,
        }
    }
}
