//! Demand planning CLI
//!
//! Usage:
//!   plan forecast --file demand.csv            # rank all methods
//!   plan forecast --file demand.csv --model naive
//!   plan eoq --annual-demand 1200 --order-cost 50 --holding-cost 2
//!   plan safety-stock --file demand.csv --lead-time 2

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use demand_planner::config::PlannerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => PlannerConfig::load_from(path)?,
        None => PlannerConfig::default(),
    };

    match &cli.command {
        Commands::Forecast(args) => commands::forecast(args, &config, cli.format),
        Commands::Eoq(args) => commands::eoq(args, &config, cli.format),
        Commands::SafetyStock(args) => commands::safety_stock(args, &config, cli.format),
    }
}
