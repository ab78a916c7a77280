mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "eatnear")]
#[command(about = "Find restaurants around the office")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List restaurants around the configured origin
    Nearby,
    /// Pick a random nearby restaurant and show its details
    Suggest,
    /// Fetch and print details for a place id
    Detail {
        /// Provider place id (e.g., ChIJ...)
        place_id: String,
    },
    /// Autocomplete an address or name, optionally selecting a suggestion
    Search {
        /// Free-text query
        text: String,
        /// 1-based index of the suggestion to geocode and show
        #[arg(long)]
        pick: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = eatnear_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, origin = %config.origin, "configuration loaded");

    match cli.command {
        Commands::Nearby => commands::run_nearby(&config).await,
        Commands::Suggest => commands::run_suggest(&config).await,
        Commands::Detail { place_id } => commands::run_detail(&config, &place_id).await,
        Commands::Search { text, pick } => commands::run_search(&config, &text, pick).await,
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
