// src/main.rs - weatherbot entry point

use clap::Parser;

use weatherbot::cli::{Cli, Commands};
use weatherbot::infra::config::Config;
use weatherbot::infra::logger;

#[tokio::main]
async fn main() {
    // Secrets and RUST_LOG may come from a .env file in the working dir
    let dotenv = dotenvy::dotenv();

    // Initialize logging (respects RUST_LOG)
    logger::init_logging("info");

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    if let Err(e) = run().await {
        tracing::error!("Fatal: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        None | Some(Commands::Run) => weatherbot::cli::run::run_bot(&config).await,
        Some(Commands::Check) => weatherbot::cli::check::run_check(&config).await,
        Some(Commands::Now { city }) => {
            weatherbot::cli::lookup::run_now(&config, &city.join(" ")).await
        }
        Some(Commands::Search { query }) => {
            weatherbot::cli::lookup::run_search(&config, &query.join(" ")).await
        }
    }
}
