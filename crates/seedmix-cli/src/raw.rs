//! SEEDMIX raw emitter
//!
//! Writes 64 bytes from the OS randomness source to stdout, unmodified.

use clap::Parser;
use seedmix_cli::CommonArgs;
use seedmix_crypto::Mode;

/// Emit 64 raw bytes of OS randomness on stdout
#[derive(Parser)]
#[command(name = "seedmix-raw")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    seedmix_cli::emit(Mode::Raw, &cli.common)
}
