//! Periodic harvesting of emitter output.
//!
//! Runs an emitter command on a fixed interval and forwards every block it
//! prints to a sink. The emitter must exit successfully and print exactly one
//! 64-byte block; anything else stops the harvest with an error.

use std::future::Future;
use std::io::Write;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use seedmix_crypto::output::write_block;
use seedmix_crypto::{EntropyError, OUTPUT_SIZE};
use thiserror::Error;
use tokio::process::Command;
use tokio::time::MissedTickBehavior;
use zeroize::Zeroizing;

/// Environment variable holding the emitter command line
pub const EMITTER_ENV: &str = "SEEDMIX_EMITTER";

/// Environment variable holding the harvest interval in milliseconds
pub const INTERVAL_ENV: &str = "SEEDMIX_HARVEST_INTERVAL_MS";

/// Emitter run when `SEEDMIX_EMITTER` is unset
pub const DEFAULT_EMITTER: &str = "seedmix-mixed";

/// Interval used when `SEEDMIX_HARVEST_INTERVAL_MS` is unset
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Harvest errors
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Environment configuration could not be used
    #[error("invalid harvest configuration: {0}")]
    Config(String),

    /// The emitter could not be started
    #[error("failed to run emitter `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The emitter exited unsuccessfully
    #[error("emitter `{command}` exited with {status}: {stderr}")]
    Failed {
        /// Command line that was run
        command: String,
        /// Exit status reported by the OS
        status: ExitStatus,
        /// Emitter stderr, lossily decoded and trimmed
        stderr: String,
    },

    /// The emitter printed something other than one block
    #[error("emitter `{command}` printed {actual} bytes, expected {expected}")]
    BadLength {
        /// Command line that was run
        command: String,
        /// Required output length
        expected: usize,
        /// Bytes actually printed
        actual: usize,
    },

    /// Forwarding the block to the sink failed
    #[error(transparent)]
    Output(#[from] EntropyError),
}

/// Harvester configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// Emitter executable
    pub program: String,
    /// Arguments passed to the emitter
    pub args: Vec<String>,
    /// Time between two emitter runs
    pub interval: Duration,
}

impl HarvestConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Config`] if the interval is not a positive
    /// whole number of milliseconds.
    pub fn from_env() -> Result<Self, HarvestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// The emitter command is split on whitespace; the first word is the
    /// program and the rest are its arguments.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Config`] if the interval is malformed or zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarvestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let command = lookup(EMITTER_ENV)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMITTER.to_string());

        let mut words = command.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| HarvestError::Config(format!("{EMITTER_ENV} is empty")))?;
        let args = words.collect();

        let interval = match lookup(INTERVAL_ENV).filter(|v| !v.trim().is_empty()) {
            None => DEFAULT_INTERVAL,
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|_| {
                    HarvestError::Config(format!(
                        "{INTERVAL_ENV} must be a whole number of milliseconds, got {raw:?}"
                    ))
                })?;
                if millis == 0 {
                    return Err(HarvestError::Config(format!(
                        "{INTERVAL_ENV} must be greater than zero"
                    )));
                }
                Duration::from_millis(millis)
            }
        };

        Ok(Self {
            program,
            args,
            interval,
        })
    }

    /// The emitter command as one string, for logs and errors.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run the emitter once and return the block it printed.
///
/// # Errors
///
/// Returns [`HarvestError::Spawn`] if the emitter cannot be started,
/// [`HarvestError::Failed`] with its stderr if it exits unsuccessfully, and
/// [`HarvestError::BadLength`] if it prints anything but exactly one block.
pub async fn harvest_once(
    config: &HarvestConfig,
) -> Result<Zeroizing<[u8; OUTPUT_SIZE]>, HarvestError> {
    let command = config.command_line();

    let output = Command::new(&config.program)
        .args(&config.args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| HarvestError::Spawn {
            command: command.clone(),
            source,
        })?;

    let stdout = Zeroizing::new(output.stdout);

    if !output.status.success() {
        return Err(HarvestError::Failed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    if stdout.len() != OUTPUT_SIZE {
        return Err(HarvestError::BadLength {
            command,
            expected: OUTPUT_SIZE,
            actual: stdout.len(),
        });
    }

    let mut block = Zeroizing::new([0u8; OUTPUT_SIZE]);
    block.copy_from_slice(&stdout);
    Ok(block)
}

/// Harvest blocks on `config.interval` and write each one to `out`.
///
/// The first run happens immediately. Stops after `limit` blocks when one is
/// given, when `shutdown` completes, or on the first failure.
///
/// Returns the number of blocks forwarded.
///
/// # Errors
///
/// Returns the first [`harvest_once`] failure or sink write failure.
pub async fn run_harvest<W, F>(
    config: &HarvestConfig,
    limit: Option<u64>,
    out: &mut W,
    shutdown: F,
) -> Result<u64, HarvestError>
where
    W: Write + ?Sized,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let command = config.command_line();
    let mut harvested = 0u64;

    while limit.is_none_or(|max| harvested < max) {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!(harvested, "stopping harvest");
                break;
            }
            _ = ticker.tick() => {
                tracing::info!(%command, "fetching randomness");
                let block = harvest_once(config).await.inspect_err(|e| {
                    tracing::error!(%command, error = %e, "harvest failed");
                })?;
                write_block(out, block.as_slice())?;
                harvested += 1;
            }
        }
    }

    Ok(harvested)
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    () = ctrl_c() => {}
                    _ = sigterm.recv() => tracing::info!("received SIGTERM"),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c().await;
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
