//! Shelf - book service
//!
//! Serves the book HTTP API on the configured host and port.

// Force-link shelf-providers to ensure linkme registrations are included
extern crate shelf_providers;

use clap::Parser;
use shelf_server::run;

/// Command line interface for the Shelf server
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Shelf - book service with swappable repositories")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
