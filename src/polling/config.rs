//! Polling configuration.

use std::time::Duration;

use crate::core::{ConfigError, DEFAULT_POLLING_INTERVAL, DEFAULT_STATE_KEY};

/// Poller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingConfig {
    /// Interval between two fetches.
    pub interval: Duration,

    /// Opaque key passed to the fetcher.
    pub state_key: String,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLLING_INTERVAL,
            state_key: DEFAULT_STATE_KEY.to_string(),
        }
    }
}

impl PollingConfig {
    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.state_key.is_empty() {
            return Err(ConfigError::EmptyStateKey);
        }
        Ok(())
    }
}

/// Builder for creating a [`PollingConfig`].
#[derive(Debug)]
pub struct PollingConfigBuilder {
    config: PollingConfig,
}

impl PollingConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: PollingConfig::default(),
        }
    }

    /// Set the polling interval.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    /// Set the polling interval in whole seconds.
    pub fn interval_secs(mut self, secs: u64) -> Self {
        self.config.interval = Duration::from_secs(secs);
        self
    }

    /// Set the state key.
    pub fn state_key(mut self, key: impl Into<String>) -> Self {
        self.config.state_key = key.into();
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<PollingConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for PollingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
