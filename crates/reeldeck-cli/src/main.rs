use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reeldeck_core::{AppConfig, Catalog};

mod commands;

#[derive(Parser)]
#[command(name = "reeldeck")]
#[command(author, version, about = "A movie browsing screen for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load the catalog from a JSON file instead of the built-in sample
    #[arg(short = 'c', long = "catalog")]
    catalog_file: Option<PathBuf>,

    /// Theme to start with (midnight or daylight)
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,

    /// Disable poster downloads and rendering
    #[arg(long = "no-images")]
    no_images: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the active catalog and exit
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then layer command-line overrides on top
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog_file {
        config.general.catalog_file = Some(path);
    }
    if let Some(theme) = cli.theme {
        config.ui.theme.name = theme;
    }
    if cli.no_images {
        config.ui.posters = false;
    }

    // Initialize logging (RUST_LOG wins over the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Arc::new(config);
    let catalog = match &config.general.catalog_file {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::sample(),
    };

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, catalog).await,
        Some(Commands::Catalog) => commands::catalog::run(&catalog),
    }
}
