//! Process termination signals.

use std::io;

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

use super::{ShutdownSignal, TerminationSignal};

/// Listener for the process's standard termination signals.
///
/// On unix this is SIGINT and SIGTERM, elsewhere Ctrl-C. Receiving any one
/// of them is enough to shut down. Must be installed inside a tokio
/// runtime.
#[derive(Debug)]
pub struct OsSignals {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl OsSignals {
    /// Register the signal handlers.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Register the signal handlers.
    #[cfg(windows)]
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }
}

impl ShutdownSignal for OsSignals {
    #[cfg(unix)]
    async fn recv(&mut self) -> TerminationSignal {
        tokio::select! {
            Some(()) = self.interrupt.recv() => TerminationSignal::Interrupt,
            Some(()) = self.terminate.recv() => TerminationSignal::Terminate,
            // Signal driver gone: nothing can ever arrive.
            else => std::future::pending().await,
        }
    }

    #[cfg(windows)]
    async fn recv(&mut self) -> TerminationSignal {
        match self.ctrl_c.recv().await {
            Some(()) => TerminationSignal::Interrupt,
            None => std::future::pending().await,
        }
    }
}
