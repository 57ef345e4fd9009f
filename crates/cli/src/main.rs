mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ExpandCommand, LocationsCommand};

/// findref CLI - Reference resolution for findings reports
#[derive(Debug, Parser)]
#[command(
    name = "findref",
    version,
    about = "Reference resolution for findings reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve location references from a location table
    Locations(LocationsCommand),
    /// Expand ${...} references in an expression
    Expand(ExpandCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Locations(cmd) => cmd.execute()?,
        Commands::Expand(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
