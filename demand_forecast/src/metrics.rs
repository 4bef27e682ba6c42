//! Metrics for evaluating forecast performance
//!
//! Periods without a defined forecast are skipped, not counted as zero error.

use crate::data::{DemandSeries, PeriodLabel};
use crate::error::{ForecastError, Result};
use crate::models::ForecastSeries;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Error metric used to rank forecasting methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Mean Absolute Deviation
    #[default]
    Mad,
    /// Mean Squared Error
    Mse,
}

impl Metric {
    /// Short upper-case name
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Metric::Mad => "MAD",
            Metric::Mse => "MSE",
        }
    }

    /// Compute this metric over aligned actual and forecast values
    pub fn compute(&self, actual: &[f64], forecast: &[Option<f64>]) -> Result<f64> {
        match self {
            Metric::Mad => mean_absolute_deviation(actual, forecast),
            Metric::Mse => mean_squared_error(actual, forecast),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Metric {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mad" => Ok(Metric::Mad),
            "mse" => Ok(Metric::Mse),
            _ => Err(ForecastError::InvalidParameter(format!(
                "Unknown error metric '{}'",
                s
            ))),
        }
    }
}

/// Mean Absolute Deviation over periods with a defined forecast
pub fn mean_absolute_deviation(actual: &[f64], forecast: &[Option<f64>]) -> Result<f64> {
    mean_defined_error(actual, forecast, |e| e.abs(), Metric::Mad)
}

/// Mean Squared Error over periods with a defined forecast
pub fn mean_squared_error(actual: &[f64], forecast: &[Option<f64>]) -> Result<f64> {
    mean_defined_error(actual, forecast, |e| e * e, Metric::Mse)
}

fn mean_defined_error<F>(
    actual: &[f64],
    forecast: &[Option<f64>],
    transform: F,
    metric: Metric,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    check_lengths(actual, forecast)?;

    let (sum, count) = actual
        .iter()
        .zip(forecast.iter())
        .filter_map(|(&a, f)| f.map(|f| transform(a - f)))
        .fold((0.0, 0usize), |(sum, count), e| (sum + e, count + 1));

    if count == 0 {
        return Err(ForecastError::UndefinedMetric(format!(
            "{} needs at least one period with a defined forecast",
            metric
        )));
    }

    Ok(sum / count as f64)
}

fn check_lengths(actual: &[f64], forecast: &[Option<f64>]) -> Result<()> {
    if actual.len() != forecast.len() {
        return Err(ForecastError::LengthMismatch {
            actual: actual.len(),
            forecast: forecast.len(),
        });
    }
    Ok(())
}

/// Score a forecast series against the demand it was produced from
pub fn score(metric: Metric, demand: &DemandSeries, forecast: &ForecastSeries) -> Result<f64> {
    let value = metric.compute(demand.values(), forecast.values())?;
    debug!("{} {} = {:.4}", forecast.model(), metric, value);
    Ok(value)
}

/// Both error metrics for one forecast series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorScore {
    /// Mean Absolute Deviation
    pub mad: f64,
    /// Mean Squared Error
    pub mse: f64,
}

impl ErrorScore {
    /// Compute MAD and MSE for a forecast series
    pub fn compute(demand: &DemandSeries, forecast: &ForecastSeries) -> Result<Self> {
        Ok(Self {
            mad: score(Metric::Mad, demand, forecast)?,
            mse: score(Metric::Mse, demand, forecast)?,
        })
    }

    /// Value of the given metric
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mad => self.mad,
            Metric::Mse => self.mse,
        }
    }
}

impl fmt::Display for ErrorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MAD {:.4}, MSE {:.4}", self.mad, self.mse)
    }
}

/// One row of a per-period error table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRow {
    pub period: PeriodLabel,
    pub actual: f64,
    pub forecast: Option<f64>,
    pub absolute_error: Option<f64>,
    pub squared_error: Option<f64>,
}

/// Per-period actual, forecast and error values
pub fn error_table(demand: &DemandSeries, forecast: &ForecastSeries) -> Result<Vec<ErrorRow>> {
    check_lengths(demand.values(), forecast.values())?;

    Ok(demand
        .iter()
        .zip(forecast.values().iter())
        .map(|((period, actual), &forecast)| {
            let error = forecast.map(|f| actual - f);
            ErrorRow {
                period: period.clone(),
                actual,
                forecast,
                absolute_error: error.map(f64::abs),
                squared_error: error.map(|e| e * e),
            }
        })
        .collect())
}
