//! Wall-clock periodic ticker.

use std::time::{Duration, Instant};

use tokio::time::{self, Interval, MissedTickBehavior};

use super::Ticker;

/// Periodic ticker firing once per `period`.
///
/// The first tick arrives one full period after the first wait, not
/// immediately. Ticks the consumer is too slow to take are skipped, so a
/// late consumer sees one pending tick and then the schedule resumes.
///
/// The underlying tokio interval is created on the first call to
/// [`Ticker::tick`], so the ticker itself can be built outside a runtime.
///
/// # Panics
///
/// `tick` panics if `period` is zero.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    interval: Option<Interval>,
    stopped: bool,
}

impl IntervalTicker {
    /// Create a ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
            stopped: false,
        }
    }

    /// Get the tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Check if the ticker was stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> Option<Instant> {
        if self.stopped {
            return None;
        }

        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });

        Some(interval.tick().await.into_std())
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.interval = None;
    }
}
