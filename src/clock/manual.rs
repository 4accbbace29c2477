//! Manually fired ticker for deterministic tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use tokio::sync::mpsc;

use super::Ticker;
use crate::core::TICK_CHANNEL_CAPACITY;

/// Ticker that only ticks when its [`TickTrigger`] fires.
///
/// Keeps the one-pending-tick behaviour of the wall-clock ticker: firing
/// while a tick is still pending drops the new tick.
#[derive(Debug)]
pub struct ManualTicker {
    rx: mpsc::Receiver<Instant>,
    stops: Arc<AtomicUsize>,
    stopped: bool,
}

/// Handle used to fire a [`ManualTicker`] and inspect its lifecycle.
#[derive(Debug, Clone)]
pub struct TickTrigger {
    tx: mpsc::Sender<Instant>,
    stops: Arc<AtomicUsize>,
}

impl ManualTicker {
    /// Create a ticker and the trigger that drives it.
    pub fn new() -> (Self, TickTrigger) {
        let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let stops = Arc::new(AtomicUsize::new(0));

        let ticker = Self {
            rx,
            stops: Arc::clone(&stops),
            stopped: false,
        };
        (ticker, TickTrigger { tx, stops })
    }
}

impl Ticker for ManualTicker {
    async fn tick(&mut self) -> Option<Instant> {
        if self.stopped {
            return None;
        }
        self.rx.recv().await
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.stopped = true;
        self.rx.close();
    }
}

impl TickTrigger {
    /// Fire a tick without waiting.
    ///
    /// Returns `false` if the tick was dropped, either because another tick
    /// is still pending or because the ticker is stopped or gone.
    pub fn fire(&self) -> bool {
        self.tx.try_send(Instant::now()).is_ok()
    }

    /// Fire a tick, waiting until the pending slot is free.
    ///
    /// Returns `false` if the ticker is stopped or gone.
    pub async fn fire_and_wait(&self) -> bool {
        self.tx.send(Instant::now()).await.is_ok()
    }

    /// Number of times [`Ticker::stop`] was called.
    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    /// Check if the ticker no longer accepts ticks.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fire_and_tick() {
        let (mut ticker, trigger) = ManualTicker::new();

        assert!(trigger.fire());
        assert!(ticker.tick().await.is_some());
    }

    #[tokio::test]
    async fn test_pending_tick_drops_extra() {
        let (mut ticker, trigger) = ManualTicker::new();

        assert!(trigger.fire());
        // Slot taken: second tick is dropped
        assert!(!trigger.fire());

        ticker.tick().await.unwrap();
        assert!(trigger.fire());
    }

    #[tokio::test]
    async fn test_stop_closes_ticker() {
        let (mut ticker, trigger) = ManualTicker::new();
        assert_eq!(trigger.stop_count(), 0);

        trigger.fire();
        ticker.stop();

        assert_eq!(trigger.stop_count(), 1);
        assert!(trigger.is_closed());
        assert!(!trigger.fire());
        assert!(!trigger.fire_and_wait().await);
        // Pending tick is not delivered after stop
        assert!(ticker.tick().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_trigger_ends_ticks() {
        let (mut ticker, trigger) = ManualTicker::new();
        drop(trigger);
        assert!(ticker.tick().await.is_none());
    }
}
