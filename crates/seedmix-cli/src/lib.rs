//! Shared plumbing for the `seedmix-raw`, `seedmix-mixed` and
//! `seedmix-harvest` binaries.
//!
//! The emitters take no options that affect their output. Standard output
//! carries only 64-byte blocks; every diagnostic goes to standard error.

pub mod config;
pub mod harvest;

use std::io;

use anyhow::Context;
use clap::Args;
use seedmix_crypto::{Mode, OsEntropy};

pub use config::LogConfig;

/// Options shared by every binary
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Log at debug level on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr `tracing` subscriber.
///
/// A malformed filter falls back to the default level and is reported once
/// the subscriber is up. Calling this twice is harmless.
pub fn init_logging(config: &LogConfig) {
    let (filter, rejected) = match config.filter() {
        Ok(filter) => (filter, None),
        Err(e) => (
            tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_LEVEL),
            Some(e),
        ),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if let Some(e) = rejected {
        tracing::warn!(level = %config.level, error = %e, "invalid log filter, using default");
    }
}

/// Entry point shared by both binaries: emit one block to stdout.
///
/// # Errors
///
/// Returns an error if the OS randomness source fails or stdout cannot be
/// written. Nothing is written to stdout in the first case.
pub fn emit(mode: Mode, args: &CommonArgs) -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env().with_verbose(args.verbose));

    let mut out = io::stdout().lock();
    seedmix_crypto::run(mode, &mut OsEntropy, &mut out)
        .with_context(|| format!("{mode} emitter failed"))?;

    tracing::debug!(%mode, "done");
    Ok(())
}
