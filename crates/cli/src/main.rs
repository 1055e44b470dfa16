mod commands;
mod harness;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::CheckCommand;

/// Vitrine CLI - discovery-configuration resolution tool
#[derive(Debug, Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Resolve discovery configurations and check resolution scenarios"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute resolution scenarios
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
