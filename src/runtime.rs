//! Actor wrapper sharing one [`Wardrobe`] between the presentation layer and
//! the rotation timer.
//!
//! Commands from any [`WardrobeHandle`] and ticks from the rotation timer go
//! through the same channel and are applied one at a time, so a sweep
//! finishing can never interleave with a delete, a toggle or a regeneration.

use std::time::Duration;

use rand::Rng;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::engine::{RotationStart, Wardrobe, WardrobeEvent, WardrobeSnapshot};
use crate::error::{Result, WardrobeError};
use crate::item::{ClothingItem, ItemEdit, ItemId, NewItem, Season};
use crate::outfit::Outfit;
use crate::rotation::TICK_INTERVAL;
use crate::ticker::Ticker;

const COMMAND_BUFFER: usize = 64;
const EVENT_BUFFER: usize = 1024;

type Reply<T> = oneshot::Sender<T>;

enum Command {
    AddItem(NewItem, Reply<Result<ItemId>>),
    DeleteItem(ItemId, Reply<Result<ClothingItem>>),
    EditItem(ItemId, ItemEdit, Reply<Result<()>>),
    Toggle(ItemId, Reply<Result<bool>>),
    Daily(Season, Reply<Outfit>),
    Suggest(Season, Reply<Result<Outfit>>),
    Start(Reply<Result<RotationStart>>),
    Stop(Reply<bool>),
    Snapshot(Reply<WardrobeSnapshot>),
    Tick(u64),
    Shutdown,
}

/// Cloneable front door to a running wardrobe actor.
#[derive(Clone)]
pub struct WardrobeHandle {
    tx: mpsc::Sender<Command>,
    events: broadcast::Sender<WardrobeEvent>,
}

/// Spawn the actor owning `wardrobe`, ticking every `tick_interval` while the
/// rotation runs.
///
/// The actor stops once every handle is dropped or
/// [`WardrobeHandle::shutdown`] is called.
pub fn spawn<R>(wardrobe: Wardrobe<R>, tick_interval: Duration) -> (WardrobeHandle, JoinHandle<()>)
where
    R: Rng + Send + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let (events, _) = broadcast::channel(EVENT_BUFFER);
    let actor = Actor {
        wardrobe,
        tick_interval,
        ticker: None,
        generation: 0,
        self_tx: tx.downgrade(),
        events: events.clone(),
    };
    let join = tokio::spawn(actor.run(rx));
    (WardrobeHandle { tx, events }, join)
}

/// [`spawn`] with the default 50 ms tick.
pub fn spawn_default<R>(wardrobe: Wardrobe<R>) -> (WardrobeHandle, JoinHandle<()>)
where
    R: Rng + Send + 'static,
{
    spawn(wardrobe, TICK_INTERVAL)
}

struct Actor<R> {
    wardrobe: Wardrobe<R>,
    tick_interval: Duration,
    ticker: Option<Ticker>,
    /// Bumped whenever a ticker is started so ticks still queued from a
    /// cancelled one are ignored.
    generation: u64,
    self_tx: mpsc::WeakSender<Command>,
    events: broadcast::Sender<WardrobeEvent>,
}

impl<R: Rng> Actor<R> {
    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        debug!("wardrobe actor started");
        while let Some(cmd) = rx.recv().await {
            if !self.handle(cmd) {
                break;
            }
        }
        self.ticker = None;
        debug!("wardrobe actor stopped");
    }

    fn handle(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::AddItem(item, reply) => {
                let _ = reply.send(self.wardrobe.add_item(item));
            }
            Command::DeleteItem(id, reply) => {
                let _ = reply.send(self.wardrobe.delete_item(id));
            }
            Command::EditItem(id, edit, reply) => {
                let _ = reply.send(self.wardrobe.edit_item(id, edit));
            }
            Command::Toggle(id, reply) => {
                let _ = reply.send(self.wardrobe.toggle_in_outfit(id));
            }
            Command::Daily(season, reply) => {
                let _ = reply.send(self.wardrobe.generate_daily_outfit(season));
            }
            Command::Suggest(season, reply) => {
                let _ = reply.send(self.wardrobe.generate_suggestions(season));
            }
            Command::Start(reply) => {
                let res = self.wardrobe.start_rotation();
                if let Ok(RotationStart::Started) = res {
                    self.start_ticker();
                }
                let _ = reply.send(res);
            }
            Command::Stop(reply) => {
                self.ticker = None;
                let event = self.wardrobe.stop_rotation();
                let stopped = event.is_some();
                self.publish(event);
                let _ = reply.send(stopped);
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.wardrobe.snapshot());
            }
            Command::Tick(generation) => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "dropping stale tick");
                    return true;
                }
                let events = self.wardrobe.tick();
                if !self.wardrobe.rotation_state().running {
                    self.ticker = None;
                }
                self.publish(events);
            }
            Command::Shutdown => {
                info!("wardrobe shutting down");
                return false;
            }
        }
        true
    }

    // weak sender: dropping every handle still ends the actor mid-rotation
    fn start_ticker(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.ticker = Some(Ticker::spawn(
            self.self_tx.clone(),
            self.tick_interval,
            move || Command::Tick(generation),
        ));
    }

    fn publish(&self, events: impl IntoIterator<Item = WardrobeEvent>) {
        for event in events {
            // no subscribers is fine
            let _ = self.events.send(event);
        }
    }
}

impl WardrobeHandle {
    /// Receive every [`WardrobeEvent`] published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<WardrobeEvent> {
        self.events.subscribe()
    }

    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| WardrobeError::EngineStopped)?;
        rx.await.map_err(|_| WardrobeError::EngineStopped)
    }

    pub async fn add_item(&self, item: NewItem) -> Result<ItemId> {
        self.request(|r| Command::AddItem(item, r)).await?
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<ClothingItem> {
        self.request(|r| Command::DeleteItem(id, r)).await?
    }

    pub async fn edit_item(&self, id: ItemId, edit: ItemEdit) -> Result<()> {
        self.request(|r| Command::EditItem(id, edit, r)).await?
    }

    pub async fn toggle_in_outfit(&self, id: ItemId) -> Result<bool> {
        self.request(|r| Command::Toggle(id, r)).await?
    }

    pub async fn generate_daily_outfit(&self, season: Season) -> Result<Outfit> {
        self.request(|r| Command::Daily(season, r)).await
    }

    pub async fn generate_suggestions(&self, season: Season) -> Result<Outfit> {
        self.request(|r| Command::Suggest(season, r)).await?
    }

    pub async fn start_rotation(&self) -> Result<RotationStart> {
        self.request(Command::Start).await?
    }

    /// Stop the rotation. `Ok(false)` means it was already idle.
    pub async fn stop_rotation(&self) -> Result<bool> {
        self.request(Command::Stop).await
    }

    pub async fn snapshot(&self) -> Result<WardrobeSnapshot> {
        self.request(Command::Snapshot).await
    }

    /// Ask the actor to exit after the commands already queued.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown).await;
    }
}
