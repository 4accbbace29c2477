//! Error types for the resync poller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the bundled state fetchers.
#[derive(Debug, Error)]
pub enum FetchError {
    /// State key cannot be mapped to a snapshot location.
    #[error("invalid state key: {0:?}")]
    InvalidKey(String),

    /// No snapshot exists for the key.
    #[error("state not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the snapshot failed.
    #[error("i/o error reading {}: {source}", .path.display())]
    Io {
        /// Location that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Snapshot was read but could not be decoded.
    #[error("decode error in {}: {reason}", .path.display())]
    Decode {
        /// Location that was read.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
}

/// Errors in polling configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Polling interval must be positive.
    #[error("polling interval must be greater than zero")]
    ZeroInterval,

    /// State key must not be empty.
    #[error("state key must not be empty")]
    EmptyStateKey,
}

/// Top-level poller errors.
///
/// Fetch failures never show up here: they are logged and the loop keeps
/// going. The run loop can only fail before it starts.
#[derive(Debug, Error)]
pub enum PollError {
    /// Installing the process signal handlers failed.
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::NotFound(PathBuf::from("/state/app.json"));
        assert_eq!(err.to_string(), "state not found: /state/app.json");

        let err = FetchError::InvalidKey("../etc".into());
        assert_eq!(err.to_string(), "invalid state key: \"../etc\"");
    }

    #[test]
    fn test_poll_error_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PollError::Signal(io);
        assert_eq!(err.to_string(), "failed to install signal handlers: denied");
        assert!(err.source().is_some());
    }
}
