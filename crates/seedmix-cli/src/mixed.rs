//! SEEDMIX mixed emitter
//!
//! Draws three independent 64-byte samples from the OS randomness source,
//! hashes their concatenation with SHA3-512 and writes the digest to stdout.

use clap::Parser;
use seedmix_cli::CommonArgs;
use seedmix_crypto::Mode;

/// Emit SHA3-512 of three OS randomness samples on stdout
#[derive(Parser)]
#[command(name = "seedmix-mixed")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    seedmix_cli::emit(Mode::Mixed, &cli.common)
}
