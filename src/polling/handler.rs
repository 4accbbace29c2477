//! Polling handler
//!
//! Runs the fetch / compare / resync loop until a termination signal
//! arrives.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::config::PollingConfig;
use super::detector::{ChangeDetector, Observation};
use crate::clock::{IntervalTicker, Ticker};
use crate::core::{PollError, StateFetcher};
use crate::signal::{OsSignals, ShutdownSignal, TerminationSignal};

/// What a finished run loop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSummary {
    /// Ticks serviced.
    pub ticks: u64,
    /// Failed fetches, including the startup fetch.
    pub fetch_errors: u64,
    /// Resync invocations.
    pub resyncs: u64,
    /// Signal that ended the loop.
    pub signal: TerminationSignal,
}

/// Polling state-change detector.
///
/// Owns the clock, the state key, the fetcher and the baseline snapshot.
/// [`run`](Self::run) and [`run_until`](Self::run_until) consume the
/// handler, so a handler never drives more than one loop.
///
/// # Example
///
/// ```ignore
/// let handler = PollingHandler::new(Duration::from_secs(60), "my-integration", client);
///
/// // Blocks this task until SIGINT / SIGTERM.
/// let summary = handler.run(|| resync_all()).await?;
/// ```
pub struct PollingHandler<F: StateFetcher, T = IntervalTicker> {
    /// Tick source.
    ticker: T,
    /// Key passed to every fetch.
    state_key: String,
    /// Remote state source.
    fetcher: F,
    /// Nominal interval between ticks.
    interval: Duration,
    /// Last observed snapshot.
    detector: ChangeDetector<F::Snapshot>,
}

impl<F: StateFetcher> PollingHandler<F, IntervalTicker> {
    /// Create a handler ticking every `interval` on the wall clock.
    ///
    /// `interval` must be positive and `state_key` non-empty; neither is
    /// checked here. No fetch happens until the handler runs.
    pub fn new(interval: Duration, state_key: impl Into<String>, fetcher: F) -> Self {
        Self::with_ticker(interval, state_key, fetcher, IntervalTicker::new(interval))
    }

    /// Create a handler from a configuration.
    pub fn from_config(config: &PollingConfig, fetcher: F) -> Self {
        Self::new(config.interval, config.state_key.clone(), fetcher)
    }
}

impl<F: StateFetcher, T: Ticker> PollingHandler<F, T> {
    /// Create a handler driven by the given ticker.
    ///
    /// The ticker is used as is; `interval` is only reported in logs.
    pub fn with_ticker(
        interval: Duration,
        state_key: impl Into<String>,
        fetcher: F,
        ticker: T,
    ) -> Self {
        Self {
            ticker,
            state_key: state_key.into(),
            fetcher,
            interval,
            detector: ChangeDetector::new(),
        }
    }

    /// Get the state key.
    pub fn state_key(&self) -> &str {
        &self.state_key
    }

    /// Get the polling interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until the process receives SIGINT or SIGTERM.
    ///
    /// Fails only if the signal handlers cannot be installed, in which case
    /// nothing is fetched and the clock is stopped.
    pub async fn run<R>(mut self, resync: R) -> Result<PollSummary, PollError>
    where
        R: FnMut(),
    {
        let shutdown = match OsSignals::install() {
            Ok(signals) => signals,
            Err(err) => {
                self.ticker.stop();
                return Err(PollError::Signal(err));
            }
        };

        Ok(self.run_until(shutdown, resync).await)
    }

    /// Run until `shutdown` delivers a termination signal.
    ///
    /// One fetch seeds the baseline, then every tick fetches again and calls
    /// `resync` when the snapshot differs from the baseline. Fetch errors
    /// are logged and leave the baseline untouched; they never end the loop.
    ///
    /// `resync` runs inside the loop, so no tick is serviced while it runs
    /// and a missed tick is not caught up. A signal arriving during a fetch
    /// or a resync is seen at the next wait. When a signal and a tick are
    /// both ready, the signal wins and the tick is never serviced.
    pub async fn run_until<D, R>(mut self, mut shutdown: D, mut resync: R) -> PollSummary
    where
        D: ShutdownSignal,
        R: FnMut(),
    {
        info!(state_key = %self.state_key, "starting polling handler");

        let mut ticks = 0;
        let mut fetch_errors = 0;
        let mut resyncs = 0;

        match self.fetcher.fetch(&self.state_key).await {
            Ok(snapshot) => {
                self.detector.seed(snapshot);
            }
            Err(err) => {
                fetch_errors += 1;
                error!(
                    state_key = %self.state_key,
                    error = %err,
                    "error fetching the initial state, starting without a baseline"
                );
            }
        }

        info!(interval = ?self.interval, "polling handler started");

        let mut ticks_open = true;
        let signal = loop {
            tokio::select! {
                biased;

                signal = shutdown.recv() => break signal,

                tick = self.ticker.tick(), if ticks_open => match tick {
                    Some(_) => {
                        ticks += 1;
                        debug!(
                            interval = ?self.interval,
                            "polling iteration, checking for changes"
                        );
                        match self.poll_once().await {
                            Some(Observation::Changed { version }) => {
                                info!(version, "changes detected, resyncing");
                                resync();
                                resyncs += 1;
                            }
                            Some(_) => {}
                            None => fetch_errors += 1,
                        }
                    }
                    None => {
                        warn!("clock stopped ticking, waiting for a termination signal");
                        ticks_open = false;
                    }
                },
            }
        };

        info!(%signal, "received signal, terminating");
        self.ticker.stop();

        PollSummary {
            ticks,
            fetch_errors,
            resyncs,
            signal,
        }
    }

    /// Fetch once and compare against the baseline.
    ///
    /// Returns `None` if the fetch failed.
    async fn poll_once(&mut self) -> Option<Observation> {
        match self.fetcher.fetch(&self.state_key).await {
            Ok(snapshot) => Some(self.detector.observe(snapshot)),
            Err(err) => {
                error!(state_key = %self.state_key, error = %err, "error fetching state");
                None
            }
        }
    }
}
