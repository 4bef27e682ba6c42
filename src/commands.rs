//! Subcommand implementations

use crate::cli::{EoqArgs, ForecastArgs, SafetyStockArgs, TableArgs};
use anyhow::{anyhow, Context, Result};
use demand_forecast::{
    run_model, select_best, DemandSeries, ErrorScore, ForecastError, Metric, ModelKind,
    ModelParams,
};
use demand_planner::config::PlannerConfig;
use demand_planner::planning::{OrderPlan, StockPolicy};
use demand_planner::report::{self, OutputFormat};
use tracing::{info, warn};

fn load_demand(table: &TableArgs, config: &PlannerConfig) -> Result<DemandSeries> {
    let mut columns = config.table_columns();
    if let Some(period) = &table.period_column {
        columns.period = Some(period.clone());
    }
    if let Some(demand) = &table.demand_column {
        columns.demand = demand.clone();
    }

    let series = DemandSeries::from_csv(&table.file, &columns)
        .with_context(|| format!("Failed to load demand table {}", table.file.display()))?;
    info!("Loaded {} periods from {}", series.len(), table.file.display());
    Ok(series)
}

pub fn forecast(args: &ForecastArgs, config: &PlannerConfig, format: OutputFormat) -> Result<()> {
    let demand = load_demand(&args.table, config)?;

    let params = ModelParams::new(
        args.window.unwrap_or(config.forecast.window),
        args.alpha.unwrap_or(config.forecast.alpha),
    )?;
    let metric = match &args.metric {
        Some(name) => name.parse::<Metric>()?,
        None => config.forecast.metric,
    };

    let output = match &args.model {
        Some(name) => {
            let kind: ModelKind = name.parse()?;
            let forecast = run_model(kind, &demand, &params)?;
            let score = match ErrorScore::compute(&demand, &forecast) {
                Ok(score) => Some(score),
                Err(ForecastError::UndefinedMetric(msg)) => {
                    warn!("{}", msg);
                    None
                }
                Err(e) => return Err(e.into()),
            };
            report::render_forecast(format, &demand, &forecast, score.as_ref())?
        }
        None => {
            let outcome = select_best(&demand, metric, &params)?;
            report::render_selection(format, &outcome)?
        }
    };

    print!("{}", output);
    Ok(())
}

pub fn eoq(args: &EoqArgs, config: &PlannerConfig, format: OutputFormat) -> Result<()> {
    let order_cost = args
        .order_cost
        .or(config.inventory.order_cost)
        .ok_or_else(|| anyhow!("Order cost is required (--order-cost or [inventory] order_cost)"))?;
    let holding_cost = args
        .holding_cost
        .or(config.inventory.holding_cost)
        .ok_or_else(|| {
            anyhow!("Holding cost is required (--holding-cost or [inventory] holding_cost)")
        })?;

    let plan = OrderPlan::compute(args.annual_demand, order_cost, holding_cost)?;
    print!("{}", report::render_order_plan(format, &plan)?);
    Ok(())
}

pub fn safety_stock(
    args: &SafetyStockArgs,
    config: &PlannerConfig,
    format: OutputFormat,
) -> Result<()> {
    let demand = load_demand(&args.table, config)?;

    let policy = StockPolicy::compute(
        &demand,
        args.lead_time.unwrap_or(config.inventory.lead_time),
        args.service_level.unwrap_or(config.inventory.service_level),
    )?;
    print!("{}", report::render_stock_policy(format, &policy)?);
    Ok(())
}
