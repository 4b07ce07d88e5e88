use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::trace;

/// Periodic task that sends `make()` into a channel at a fixed interval.
///
/// The task is aborted when the ticker is dropped, so cancelling a rotation
/// is just dropping its ticker. It only holds a weak sender and exits once
/// every strong sender of the channel is gone.
///
/// # Example
/// ```ignore
/// let ticker = Ticker::spawn(tx.downgrade(), Duration::from_millis(50), || Command::Tick(0));
/// drop(ticker); // no more ticks are sent
/// ```
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking. The first message is sent immediately.
    pub fn spawn<T, F>(tx: mpsc::WeakSender<T>, period: Duration, make: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let Some(tx) = tx.upgrade() else {
                    trace!("tick channel has no owners left");
                    break;
                };
                if tx.send(make()).await.is_err() {
                    trace!("tick receiver closed");
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
