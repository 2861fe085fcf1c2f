//! GoCatalog CLI - Command-line interface for building catalogs from game data

pub mod commands;
pub mod loader;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "gocatalog")]
#[command(about = "GoCatalog: collection and field catalogs from items_game data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the GoCatalog CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
