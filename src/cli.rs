//! Command line structure for the `plan` binary

use clap::{Args, Parser, Subcommand};
use demand_planner::report::OutputFormat;
use std::path::PathBuf;

/// Demand forecasting and inventory planning
#[derive(Parser)]
#[command(name = "plan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast demand with one model, or rank all models
    Forecast(ForecastArgs),

    /// Economic Order Quantity
    Eoq(EoqArgs),

    /// Safety stock and reorder point from a demand table
    SafetyStock(SafetyStockArgs),
}

/// Demand table location and layout
#[derive(Args)]
pub struct TableArgs {
    /// CSV demand table with a header row
    #[arg(long)]
    pub file: PathBuf,

    /// Period column header (defaults to the first column)
    #[arg(long)]
    pub period_column: Option<String>,

    /// Demand column header
    #[arg(long)]
    pub demand_column: Option<String>,
}

#[derive(Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Run a single model (naive, moving_average, exponential_smoothing)
    #[arg(long)]
    pub model: Option<String>,

    /// Moving average window
    #[arg(long)]
    pub window: Option<usize>,

    /// Exponential smoothing factor in (0, 1]
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Error metric used for selection (mad, mse)
    #[arg(long)]
    pub metric: Option<String>,
}

#[derive(Args)]
pub struct EoqArgs {
    /// Units demanded per year
    #[arg(long)]
    pub annual_demand: f64,

    /// Fixed cost per order
    #[arg(long)]
    pub order_cost: Option<f64>,

    /// Annual holding cost per unit
    #[arg(long)]
    pub holding_cost: Option<f64>,
}

#[derive(Args)]
pub struct SafetyStockArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Replenishment lead time in periods
    #[arg(long)]
    pub lead_time: Option<f64>,

    /// Target cycle service level in (0, 1)
    #[arg(long)]
    pub service_level: Option<f64>,
}
