//! Rendering of forecasting and inventory results as text or JSON

use crate::planning::{OrderPlan, StockPolicy};
use anyhow::Result;
use demand_forecast::metrics::{error_table, ErrorRow, ErrorScore};
use demand_forecast::{DemandSeries, ForecastSeries, SelectionOutcome};
use serde::Serialize;
use std::fmt::Write;

/// Output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct ForecastReport<'a> {
    forecast: &'a ForecastSeries,
    score: Option<&'a ErrorScore>,
    rows: &'a [ErrorRow],
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

/// Render a single model's forecast with its per-period errors.
///
/// `score` is `None` when the series has no defined forecast to score.
pub fn render_forecast(
    format: OutputFormat,
    demand: &DemandSeries,
    forecast: &ForecastSeries,
    score: Option<&ErrorScore>,
) -> Result<String> {
    let rows = error_table(demand, forecast)?;

    if format == OutputFormat::Json {
        let report = ForecastReport {
            forecast,
            score,
            rows: &rows,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(out, "{} Forecast", forecast.model())?;
    writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10} {:>12}",
        "Period", "Demand", "Forecast", "Abs Error", "Sq Error"
    )?;
    for row in &rows {
        writeln!(
            out,
            "{:<12} {:>10.2} {:>10} {:>10} {:>12}",
            row.period.to_string(),
            row.actual,
            fmt_opt(row.forecast),
            fmt_opt(row.absolute_error),
            fmt_opt(row.squared_error)
        )?;
    }

    match score {
        Some(score) => writeln!(out, "{}", score)?,
        None => writeln!(out, "MAD/MSE undefined: no period has a forecast")?,
    }

    let next = forecast.next_period();
    writeln!(
        out,
        "Forecast for next period ({}) = {:.2}",
        next.period, next.value
    )?;

    Ok(out)
}

/// Render every method's score and the selected method
pub fn render_selection(format: OutputFormat, outcome: &SelectionOutcome) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let metric = outcome.metric();
    let mut out = String::new();
    writeln!(out, "{:<4} {:<24} {:>12} {:>12}", "Rank", "Method", "MAD", "MSE")?;
    for (rank, result) in outcome.ranking().iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<24} {:>12.4} {:>12.4}",
            rank + 1,
            result.model().to_string(),
            result.score.mad,
            result.score.mse
        )?;
    }

    let best = outcome.best();
    let next = best.forecast.next_period();
    writeln!(
        out,
        "Best method by {}: {} ({:.4})",
        metric,
        best.model(),
        best.score.get(metric)
    )?;
    writeln!(
        out,
        "Forecast for next period ({}) = {:.2}",
        next.period, next.value
    )?;

    Ok(out)
}

/// Render an Economic Order Quantity plan
pub fn render_order_plan(format: OutputFormat, plan: &OrderPlan) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(plan)?);
    }

    let mut out = String::new();
    writeln!(out, "Annual demand:   {:.2}", plan.annual_demand)?;
    writeln!(out, "Order cost:      {:.2}", plan.order_cost)?;
    writeln!(out, "Holding cost:    {:.2}", plan.holding_cost)?;
    writeln!(out, "EOQ:             {:.2}", plan.order_quantity)?;
    writeln!(out, "Orders per year: {:.2}", plan.orders_per_year)?;
    Ok(out)
}

/// Render a safety stock and reorder point policy
pub fn render_stock_policy(format: OutputFormat, policy: &StockPolicy) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(policy)?);
    }

    let mut out = String::new();
    writeln!(out, "Periods:         {}", policy.periods)?;
    writeln!(out, "Mean demand:     {:.2}", policy.mean_demand)?;
    writeln!(out, "Std deviation:   {:.2}", policy.demand_std_dev)?;
    writeln!(out, "Lead time:       {:.2}", policy.lead_time)?;
    writeln!(
        out,
        "Service level:   {:.1}% (z = {:.3})",
        policy.service_level * 100.0,
        policy.z_score
    )?;
    writeln!(out, "Safety stock:    {:.2}", policy.safety_stock)?;
    writeln!(out, "Reorder point:   {:.2}", policy.reorder_point)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demand_forecast::{run_model, select_best, Metric, ModelKind, ModelParams};

    fn demand() -> DemandSeries {
        DemandSeries::from_values(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap()
    }

    #[test]
    fn test_forecast_table() {
        let demand = demand();
        let forecast =
            run_model(ModelKind::MovingAverage, &demand, &ModelParams::default()).unwrap();
        let score = ErrorScore::compute(&demand, &forecast).unwrap();

        let text = render_forecast(OutputFormat::Table, &demand, &forecast, Some(&score)).unwrap();
        assert!(text.starts_with("Moving Average Forecast"));
        assert!(text.contains("MAD 16.2500"));
        assert!(text.contains("Forecast for next period (6) = 40.00"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_forecast_json() {
        let demand = demand();
        let forecast = run_model(ModelKind::Naive, &demand, &ModelParams::default()).unwrap();

        let json = render_forecast(OutputFormat::Json, &demand, &forecast, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["forecast"]["model"], "naive");
        assert!(value["forecast"]["values"][0].is_null());
        assert_eq!(value["rows"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_selection_table() {
        let demand =
            DemandSeries::from_values(vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0]).unwrap();
        let outcome = select_best(&demand, Metric::Mad, &ModelParams::default()).unwrap();

        let text = render_selection(OutputFormat::Table, &outcome).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("Exponential Smoothing"));
        assert!(text.contains("Best method by MAD: Exponential Smoothing"));
    }

    #[test]
    fn test_stock_policy_json() {
        let policy = StockPolicy::compute(&demand(), 2.0, 0.95).unwrap();
        let json = render_stock_policy(OutputFormat::Json, &policy).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["periods"], 5);
    }
}
