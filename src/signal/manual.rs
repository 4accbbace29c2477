//! In-process shutdown channel.

use tokio::sync::mpsc;

use super::{ShutdownSignal, TerminationSignal};

/// Sending half of a [`shutdown_channel`].
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: mpsc::Sender<TerminationSignal>,
}

/// Receiving half of a [`shutdown_channel`].
///
/// If every trigger is dropped without firing, the listener never
/// completes: losing the handle does not stop the loop.
#[derive(Debug)]
pub struct ShutdownListener {
    rx: mpsc::Receiver<TerminationSignal>,
}

/// Create a shutdown trigger and its listener.
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownListener) {
    let (tx, rx) = mpsc::channel(1);
    (ShutdownTrigger { tx }, ShutdownListener { rx })
}

impl ShutdownTrigger {
    /// Request shutdown.
    ///
    /// Returns `false` if a request is already pending or the listener is
    /// gone. Either way the loop stops or has stopped.
    pub fn trigger(&self) -> bool {
        self.tx.try_send(TerminationSignal::Requested).is_ok()
    }

    /// Request shutdown with a specific signal kind.
    pub fn trigger_with(&self, signal: TerminationSignal) -> bool {
        self.tx.try_send(signal).is_ok()
    }

    /// Check if the listener was dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl ShutdownSignal for ShutdownListener {
    async fn recv(&mut self) -> TerminationSignal {
        match self.rx.recv().await {
            Some(signal) => signal,
            None => std::future::pending().await,
        }
    }
}
