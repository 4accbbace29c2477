//! # resync-poller
//!
//! Polling state-change detector for resource synchronization tools.
//!
//! A [`PollingHandler`] periodically fetches a remote state snapshot,
//! compares it with the last one it saw and calls a resync callback when it
//! changed. It is the polling alternative to push-based change
//! notification:
//!
//! - **Comparison-gated**: unchanged state never triggers a resync
//! - **Serialized**: fetch and resync for one tick finish before the next
//!   tick is serviced
//! - **Resilient**: fetch errors are logged, never fatal
//! - **Cooperative shutdown**: SIGINT / SIGTERM end the loop at its next
//!   wait point
//!
//! ## Feature Flags
//!
//! - `file` (default): [`fetch::JsonFileFetcher`], JSON documents on disk as state
//!
//! ## Modules
//!
//! - [`core`](crate::core): the [`StateFetcher`] trait, constants, and error types
//! - [`clock`]: tick sources, wall-clock and manual
//! - [`signal`]: termination signal sources, OS and in-process
//! - [`polling`]: change detector, configuration, and the run loop
//! - [`fetch`]: ready-made fetchers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use resync_poller::prelude::*;
//!
//! # async fn example() -> Result<(), PollError> {
//! let fetcher = FnFetcher::new(|key: String| async move {
//!     // Ask the remote side for the current state of `key`.
//!     Ok::<_, std::io::Error>(key.len())
//! });
//!
//! let handler = PollingHandler::new(Duration::from_secs(60), "my-integration", fetcher);
//! let summary = handler.run(|| println!("state changed, resyncing")).await?;
//! println!("stopped by {} after {} ticks", summary.signal, summary.ticks);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

pub mod clock;
pub mod fetch;
pub mod polling;
pub mod signal;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;

    pub use crate::clock::{IntervalTicker, ManualTicker, TickTrigger, Ticker};
    pub use crate::fetch::*;
    pub use crate::polling::{
        ChangeDetector, Observation, PollSummary, PollingConfig, PollingConfigBuilder,
        PollingHandler,
    };
    pub use crate::signal::{
        OsSignals, ShutdownListener, ShutdownSignal, ShutdownTrigger, TerminationSignal,
        shutdown_channel,
    };
}

// Re-export commonly used items at crate root
pub use crate::core::{ConfigError, FetchError, PollError, StateFetcher};
pub use crate::polling::{PollSummary, PollingConfig, PollingHandler};
pub use crate::signal::TerminationSignal;
