//! Best forecasting method selection
//!
//! Runs every model over the same demand series, scores each one and keeps
//! the lowest score on the chosen metric. Ties go to the model evaluated
//! first, in [`ModelKind::ALL`] order.

use crate::data::DemandSeries;
use crate::error::Result;
use crate::metrics::{ErrorScore, Metric};
use crate::models::{ForecastSeries, ModelKind, ModelParams};
use serde::Serialize;
use tracing::info;

/// Forecast and score of one model in a selection run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    /// Forecast produced by the model
    pub forecast: ForecastSeries,
    /// MAD and MSE of the forecast
    pub score: ErrorScore,
}

impl MethodResult {
    /// Model that produced this result
    pub fn model(&self) -> ModelKind {
        self.forecast.model()
    }
}

/// Outcome of a selection run: every method result plus the winner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOutcome {
    metric: Metric,
    best: usize,
    results: Vec<MethodResult>,
}

impl SelectionOutcome {
    /// Metric the methods were ranked by
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The method with the lowest error
    pub fn best(&self) -> &MethodResult {
        &self.results[self.best]
    }

    /// All method results, in evaluation order
    pub fn results(&self) -> &[MethodResult] {
        &self.results
    }

    /// Result for a specific model
    pub fn result(&self, kind: ModelKind) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.model() == kind)
    }

    /// Results ordered from lowest to highest error, ties in evaluation order
    pub fn ranking(&self) -> Vec<&MethodResult> {
        let mut ranked: Vec<&MethodResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            a.score
                .get(self.metric)
                .total_cmp(&b.score.get(self.metric))
        });
        ranked
    }
}

/// Runs all forecasting models and selects the best one
#[derive(Debug, Clone, Default)]
pub struct MethodSelector {
    params: ModelParams,
}

impl MethodSelector {
    /// Create a selector with validated model parameters
    pub fn new(params: ModelParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters passed to the models
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Run every model over `demand` and pick the lowest `metric`
    pub fn select(&self, demand: &DemandSeries, metric: Metric) -> Result<SelectionOutcome> {
        let results = ModelKind::ALL
            .iter()
            .map(|&kind| {
                let forecast = self.params.build(kind)?.forecast(demand)?;
                let score = ErrorScore::compute(demand, &forecast)?;
                Ok(MethodResult { forecast, score })
            })
            .collect::<Result<Vec<_>>>()?;

        // Strict comparison keeps the earliest model on ties
        let mut best = 0;
        for (idx, result) in results.iter().enumerate().skip(1) {
            if result.score.get(metric) < results[best].score.get(metric) {
                best = idx;
            }
        }

        let outcome = SelectionOutcome {
            metric,
            best,
            results,
        };
        info!(
            "Best method by {}: {} ({:.4})",
            metric,
            outcome.best().model(),
            outcome.best().score.get(metric)
        );

        Ok(outcome)
    }
}

/// Run all models with `params` and select the best by `metric`
pub fn select_best(
    demand: &DemandSeries,
    metric: Metric,
    params: &ModelParams,
) -> Result<SelectionOutcome> {
    MethodSelector::new(*params)?.select(demand, metric)
}
