use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedling_core::{AppConfig, Registry};

mod command;
mod commands;
mod repl;

#[derive(Parser)]
#[command(name = "feedling")]
#[command(author, version, about = "An interactive, categorized RSS feed registry and reader")]
struct Cli {
    /// Override the registry file location
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let links_path = cli.data_file.unwrap_or_else(|| config.links_path());
    let mut registry = Registry::load(&links_path);

    repl::run(&config, &mut registry, &links_path).await
}
