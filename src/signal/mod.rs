//! Termination signal sources.
//!
//! The polling loop waits on a [`ShutdownSignal`] next to its clock. In a
//! process this is [`OsSignals`] (SIGINT / SIGTERM); embedders and tests
//! use the in-process [`shutdown_channel`].

mod manual;
mod os;

use std::fmt;
use std::future::Future;

pub use manual::{ShutdownListener, ShutdownTrigger, shutdown_channel};
pub use os::OsSignals;

/// Which termination request stopped the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationSignal {
    /// SIGINT / Ctrl-C.
    Interrupt,
    /// SIGTERM.
    Terminate,
    /// In-process request through a [`ShutdownTrigger`].
    Requested,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => write!(f, "interrupt"),
            TerminationSignal::Terminate => write!(f, "terminate"),
            TerminationSignal::Requested => write!(f, "requested"),
        }
    }
}

/// A source of termination requests.
pub trait ShutdownSignal: Send {
    /// Wait for the next termination request.
    ///
    /// Must be cancel safe: the polling loop drops this future whenever a
    /// tick wins the wait, and a signal must not be lost when that happens.
    fn recv(&mut self) -> impl Future<Output = TerminationSignal> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_display() {
        assert_eq!(TerminationSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(TerminationSignal::Terminate.to_string(), "terminate");
        assert_eq!(TerminationSignal::Requested.to_string(), "requested");
    }
}
