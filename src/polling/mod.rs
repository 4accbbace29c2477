//! Polling layer
//!
//! Implements:
//! - Baseline tracking with structural comparison
//! - The timer-driven fetch / compare / resync loop
//! - Cooperative shutdown on termination signals

mod config;
mod detector;
mod handler;

pub use config::*;
pub use detector::*;
pub use handler::*;
