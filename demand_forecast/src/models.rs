//! Forecasting models for demand series

use crate::data::{DemandSeries, PeriodLabel};
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use tracing::debug;

pub mod exponential_smoothing;
pub mod moving_average;
pub mod naive;

use exponential_smoothing::ExponentialSmoothing;
use moving_average::MovingAverage;
use naive::Naive;

/// Default moving average window
pub const DEFAULT_WINDOW: usize = 3;

/// Default exponential smoothing factor
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Identity of a forecasting model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Naive,
    MovingAverage,
    ExponentialSmoothing,
}

impl ModelKind {
    /// Every model, in evaluation order
    pub const ALL: [ModelKind; 3] = [
        ModelKind::Naive,
        ModelKind::MovingAverage,
        ModelKind::ExponentialSmoothing,
    ];

    /// Human readable model name
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Naive => "Naive",
            ModelKind::MovingAverage => "Moving Average",
            ModelKind::ExponentialSmoothing => "Exponential Smoothing",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "naive" => Ok(ModelKind::Naive),
            "moving_average" | "ma" => Ok(ModelKind::MovingAverage),
            "exponential_smoothing" | "ses" => Ok(ModelKind::ExponentialSmoothing),
            _ => Err(ForecastError::InvalidParameter(format!(
                "Unknown forecasting model '{}'",
                s
            ))),
        }
    }
}

/// Parameters shared by a forecasting run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Moving average window size
    pub window: usize,
    /// Exponential smoothing factor
    pub alpha: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ModelParams {
    /// Create validated model parameters
    pub fn new(window: usize, alpha: f64) -> Result<Self> {
        let params = Self { window, alpha };
        params.validate()?;
        Ok(params)
    }

    /// Check the window and smoothing factor ranges
    pub fn validate(&self) -> Result<()> {
        validate_window(self.window)?;
        validate_alpha(self.alpha)
    }

    /// Build the model of the given kind from these parameters
    pub fn build(&self, kind: ModelKind) -> Result<Box<dyn ForecastModel>> {
        Ok(match kind {
            ModelKind::Naive => Box::new(Naive::new()),
            ModelKind::MovingAverage => Box::new(MovingAverage::new(self.window)?),
            ModelKind::ExponentialSmoothing => Box::new(ExponentialSmoothing::new(self.alpha)?),
        })
    }
}

pub(crate) fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "Window size must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(ForecastError::InvalidParameter(format!(
            "Alpha must be in (0, 1], got {}",
            alpha
        )));
    }
    Ok(())
}

/// Single-value forecast for the period after the observed series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextPeriodForecast {
    /// Label of the extrapolated period
    pub period: PeriodLabel,
    /// Forecasted demand
    pub value: f64,
}

/// Per-period forecast produced by one model, aligned with its demand series.
///
/// `None` marks a period the model has no forecast for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    model: ModelKind,
    values: Vec<Option<f64>>,
    next: NextPeriodForecast,
}

impl ForecastSeries {
    /// Create a forecast series
    pub fn new(model: ModelKind, values: Vec<Option<f64>>, next: NextPeriodForecast) -> Self {
        Self {
            model,
            values,
            next,
        }
    }

    /// Model that produced the series
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Forecast values, `None` where undefined
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Forecast for period `t`, if defined
    pub fn get(&self, t: usize) -> Option<f64> {
        self.values.get(t).copied().flatten()
    }

    /// Number of periods covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series covers no periods
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of periods with a defined forecast
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Forecast for the period after the series
    pub fn next_period(&self) -> &NextPeriodForecast {
        &self.next
    }
}

/// Common interface for forecasting models.
///
/// Implementations are causal: the value at `t` only reads demand before `t`,
/// apart from a model-defined seed at `t = 0`.
pub trait ForecastModel: Debug {
    /// Which model this is
    fn kind(&self) -> ModelKind;

    /// Name of the model including its parameters
    fn name(&self) -> &str;

    /// Per-period forecasts aligned with `demand`
    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>>;

    /// Forecast for the period after `demand`, given the fitted values
    fn next_value(&self, demand: &[f64], fitted: &[Option<f64>]) -> f64;

    /// Run the model over a demand series
    fn forecast(&self, demand: &DemandSeries) -> Result<ForecastSeries> {
        let values = demand.values();
        let fitted = self.fitted(values);
        if fitted.len() != values.len() {
            return Err(ForecastError::LengthMismatch {
                actual: values.len(),
                forecast: fitted.len(),
            });
        }

        let next = NextPeriodForecast {
            period: demand.next_period(),
            value: self.next_value(values, &fitted),
        };
        debug!(
            "{} forecast {} periods, next period {} = {:.4}",
            self.name(),
            fitted.len(),
            next.period,
            next.value
        );

        Ok(ForecastSeries::new(self.kind(), fitted, next))
    }
}

/// Run one model with the given parameters
pub fn run_model(
    kind: ModelKind,
    demand: &DemandSeries,
    params: &ModelParams,
) -> Result<ForecastSeries> {
    params.build(kind)?.forecast(demand)
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
