//! Naive forecasting: each period repeats the previous actual demand

use crate::models::{ForecastModel, ModelKind};

/// Naive model
#[derive(Debug, Clone)]
pub struct Naive {
    /// Name of the model
    name: String,
}

impl Naive {
    /// Create a new naive model
    pub fn new() -> Self {
        Self {
            name: ModelKind::Naive.name().to_string(),
        }
    }
}

impl Default for Naive {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for Naive {
    fn kind(&self) -> ModelKind {
        ModelKind::Naive
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>> {
        if demand.is_empty() {
            return Vec::new();
        }

        // No prior period exists for the first observation
        std::iter::once(None)
            .chain(demand[..demand.len() - 1].iter().copied().map(Some))
            .collect()
    }

    fn next_value(&self, demand: &[f64], _fitted: &[Option<f64>]) -> f64 {
        demand.last().copied().unwrap_or(0.0)
    }
}
