//! SEEDMIX harvester
//!
//! Runs the emitter named by `SEEDMIX_EMITTER` every
//! `SEEDMIX_HARVEST_INTERVAL_MS` milliseconds and forwards each 64-byte block
//! to stdout. Stops on Ctrl-C, SIGTERM, after `--count` blocks, or on the first
//! emitter failure.

use std::io;

use anyhow::Context;
use clap::Parser;
use seedmix_cli::harvest::{HarvestConfig, run_harvest, shutdown_signal};
use seedmix_cli::{CommonArgs, LogConfig, init_logging};

/// Collect emitter blocks on an interval and stream them to stdout
#[derive(Parser)]
#[command(name = "seedmix-harvest")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Stop after this many blocks
    #[arg(short = 'n', long)]
    count: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_env().with_verbose(cli.common.verbose));

    let config = HarvestConfig::from_env().context("cannot start harvester")?;
    tracing::info!(
        command = %config.command_line(),
        interval_ms = config.interval.as_millis() as u64,
        "harvester started"
    );

    let mut out = io::stdout().lock();
    let harvested = run_harvest(&config, cli.count, &mut out, shutdown_signal())
        .await
        .context("harvest stopped")?;

    tracing::debug!(harvested, "done");
    Ok(())
}
