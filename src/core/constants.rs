//! Default values for the poller.

use std::time::Duration;

/// Default interval between two state fetches.
pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(60);

/// Default state key when none is configured.
pub const DEFAULT_STATE_KEY: &str = "default";

/// File extension used by the JSON file fetcher.
pub const SNAPSHOT_FILE_EXTENSION: &str = "json";

/// Capacity of the tick channel of the manual clock.
///
/// One, so a tick fired while another is pending is dropped, the same way
/// a periodic timer drops ticks for a slow consumer.
pub const TICK_CHANNEL_CAPACITY: usize = 1;
