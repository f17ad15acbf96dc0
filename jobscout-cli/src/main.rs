//! JobScout CLI
//!
//! Command-line front end for the JobScout job-search aggregator.

mod commands;
mod config;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "Search, sort and browse job postings", long_about = None)]
struct Cli {
    /// JobScout server URL
    #[arg(long, env = "JOBSCOUT_SERVER_URL", default_value = "http://localhost:3000")]
    server_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "JOBSCOUT_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Search the built-in sample catalog without contacting the server
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        offline: cli.offline,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
