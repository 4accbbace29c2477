//! Clock sources for the polling loop.
//!
//! The poller only sees the [`Ticker`] trait: one method to wait for the
//! next tick, one to stop the clock. Two implementations ship with the
//! crate:
//!
//! - [`IntervalTicker`]: wall-clock periodic timer backed by tokio
//! - [`ManualTicker`]: test double fired through a [`TickTrigger`], with no
//!   real time elapsing

mod interval;
mod manual;

use std::future::Future;
use std::time::Instant;

pub use interval::IntervalTicker;
pub use manual::{ManualTicker, TickTrigger};

/// A recurring tick source.
pub trait Ticker: Send {
    /// Wait for the next tick.
    ///
    /// Returns `None` once the ticker is stopped or its source is gone.
    /// At most one tick is ever pending; ticks missed by a slow consumer
    /// are dropped, not queued.
    fn tick(&mut self) -> impl Future<Output = Option<Instant>> + Send;

    /// Stop emitting ticks and release the underlying timer.
    fn stop(&mut self);
}
