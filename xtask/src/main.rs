//! Workspace automation for SEEDMIX.
//!
//! Run with: cargo xtask <command>

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

const CLIPPY: &[&str] = &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"];
const FMT_CHECK: &[&str] = &["fmt", "--all", "--check"];
const TEST: &[&str] = &["test", "--workspace"];

/// Emitter binaries checked by `smoke`
const EMITTERS: &[&str] = &["seedmix-raw", "seedmix-mixed"];

const BLOCK_LEN: usize = 64;

#[derive(Parser)]
#[command(name = "xtask", about = "SEEDMIX workspace automation")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Run the workspace tests
    Test,

    /// Run clippy with warnings denied
    Lint,

    /// Check formatting
    Fmt,

    /// Build release emitters and check each prints one 64-byte block
    Smoke {
        /// Runs per emitter
        #[arg(long, default_value_t = 10)]
        runs: usize,
    },

    /// Formatting, lints, tests and the release smoke check
    Ci,

    /// Run the source-bytes fuzz target (requires cargo-fuzz)
    Fuzz {
        /// Maximum fuzzing time in seconds
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },

    /// Run the SHA3-512 and emit benchmarks
    Bench,
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Task::Test => cargo(TEST),
        Task::Lint => cargo(CLIPPY),
        Task::Fmt => cargo(FMT_CHECK),
        Task::Smoke { runs } => smoke(runs),
        Task::Ci => {
            for step in [FMT_CHECK, CLIPPY, TEST] {
                cargo(step)?;
            }
            smoke(3)
        }
        Task::Fuzz { seconds } => {
            let max_time = format!("-max_total_time={seconds}");
            cargo(&["fuzz", "run", "fuzz_source_bytes", "--", &max_time])
        }
        Task::Bench => cargo(&["bench", "-p", "seedmix-crypto"]),
    }
}

fn cargo(args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new(env!("CARGO"))
        .args(args)
        .status()
        .with_context(|| format!("cannot run cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("cargo {} failed with {status}", args.join(" "));
    }
    Ok(())
}

fn smoke(runs: usize) -> anyhow::Result<()> {
    cargo(&["build", "--release", "-p", "seedmix-cli"])?;

    let target = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace_root().join("target"));

    for name in EMITTERS {
        let bin = target.join("release").join(name);
        let mut previous: Option<Vec<u8>> = None;

        for run in 0..runs {
            let output = Command::new(&bin)
                .output()
                .with_context(|| format!("cannot run {}", bin.display()))?;

            if !output.status.success() {
                bail!(
                    "{name} exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            if output.stdout.len() != BLOCK_LEN {
                bail!("{name} printed {} bytes on run {run}", output.stdout.len());
            }
            if previous.as_ref() == Some(&output.stdout) {
                bail!("{name} repeated its block on run {run}");
            }
            previous = Some(output.stdout);
        }
    }

    Ok(())
}

fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest.parent().map(PathBuf::from).unwrap_or(manifest)
}
