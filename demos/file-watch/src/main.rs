//! file-watch
//!
//! Polls `<state-dir>/<state-key>.json` and reacts whenever the document
//! changes: logs the change and, if configured, runs a resync command.
//! Stops on SIGINT / SIGTERM.
//!
//! Every flag can also be set through the environment variable named
//! after it, e.g. `--polling-interval` / `POLLING_INTERVAL`.

use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use resync_poller::core::DEFAULT_STATE_KEY;
use resync_poller::fetch::JsonFileFetcher;
use resync_poller::polling::{PollingConfigBuilder, PollingHandler};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "file-watch", version, about = "Resync whenever a JSON state file changes")]
struct Cli {
    /// Directory holding `<state-key>.json` documents.
    #[arg(long, env = "STATE_DIR", default_value = ".")]
    state_dir: PathBuf,

    /// Key of the state document to watch.
    #[arg(long, env = "STATE_KEY", default_value = DEFAULT_STATE_KEY)]
    state_key: String,

    /// Polling interval in seconds.
    #[arg(long, env = "POLLING_INTERVAL", default_value_t = 60)]
    polling_interval: u64,

    /// Shell command run on every detected change.
    #[arg(long, env = "RESYNC_COMMAND")]
    resync_command: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
        .init();

    let cli = Cli::parse();

    let config = PollingConfigBuilder::new()
        .interval_secs(cli.polling_interval)
        .state_key(cli.state_key)
        .build()?;

    info!(state_dir = %cli.state_dir.display(), ?config, "starting file-watch");

    let fetcher = JsonFileFetcher::new(cli.state_dir);
    let handler = PollingHandler::from_config(&config, fetcher);
    let command = cli.resync_command;

    let summary = handler
        .run(|| match &command {
            Some(command) => tokio::task::block_in_place(|| run_resync(command)),
            None => info!("state changed"),
        })
        .await?;

    info!(
        signal = %summary.signal,
        ticks = summary.ticks,
        resyncs = summary.resyncs,
        fetch_errors = summary.fetch_errors,
        "file-watch stopped"
    );
    Ok(())
}

/// Log filter used when `RUST_LOG` is not set.
fn default_filter() -> EnvFilter {
    EnvFilter::new("info")
}

fn run_resync(command: &str) {
    info!(command, "running resync command");
    match Command::new("sh").arg("-c").arg(command).status() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(%status, "resync command failed"),
        Err(err) => error!(error = %err, "failed to spawn resync command"),
    }
}
