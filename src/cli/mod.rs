// src/cli/mod.rs - CLI definition (clap derive)

pub mod check;
pub mod lookup;
pub mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weatherbot", about = "Telegram weather bot", version)]
pub struct Cli {
    /// Config file path (defaults to ~/.weatherbot/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the bot via long polling (default)
    Run,
    /// Verify the Telegram token and weather API key, then exit
    Check,
    /// Print current weather for a city
    Now {
        /// City name, optionally with country ("Paris, France")
        #[arg(required = true, trailing_var_arg = true)]
        city: Vec<String>,
    },
    /// Search cities by partial name
    Search {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
}
