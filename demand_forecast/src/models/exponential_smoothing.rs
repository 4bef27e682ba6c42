//! Simple exponential smoothing

use crate::error::Result;
use crate::models::{validate_alpha, ForecastModel, ModelKind};

/// Simple exponential smoothing model.
///
/// Seeds the first forecast with the first demand, then
/// `F[t] = alpha * D[t-1] + (1 - alpha) * F[t-1]`.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model, `alpha` in (0, 1]
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    /// Smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn smooth(&self, demand: f64, previous: f64) -> f64 {
        self.alpha * demand + (1.0 - self.alpha) * previous
    }
}

impl ForecastModel for ExponentialSmoothing {
    fn kind(&self) -> ModelKind {
        ModelKind::ExponentialSmoothing
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>> {
        let Some(&first) = demand.first() else {
            return Vec::new();
        };

        let mut predictions = Vec::with_capacity(demand.len());
        let mut level = first;
        predictions.push(Some(level));

        for t in 1..demand.len() {
            level = self.smooth(demand[t - 1], level);
            predictions.push(Some(level));
        }

        predictions
    }

    fn next_value(&self, demand: &[f64], fitted: &[Option<f64>]) -> f64 {
        match (demand.last(), fitted.last().copied().flatten()) {
            (Some(&last_demand), Some(last_forecast)) => self.smooth(last_demand, last_forecast),
            (Some(&last_demand), None) => last_demand,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recurrence() {
        let model = ExponentialSmoothing::new(0.3).unwrap();
        let fitted: Vec<f64> = model
            .fitted(&[10.0, 20.0, 30.0])
            .into_iter()
            .flatten()
            .collect();

        assert_eq!(fitted.len(), 3);
        assert_relative_eq!(fitted[0], 10.0);
        assert_relative_eq!(fitted[1], 10.0);
        assert_relative_eq!(fitted[2], 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_one_tracks_previous_demand() {
        let model = ExponentialSmoothing::new(1.0).unwrap();
        let demand = [3.0, 8.0, 5.0];
        let fitted = model.fitted(&demand);
        assert_eq!(fitted, vec![Some(3.0), Some(3.0), Some(8.0)]);
        assert_eq!(model.next_value(&demand, &fitted), 5.0);
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(ExponentialSmoothing::new(0.0).is_err());
        assert!(ExponentialSmoothing::new(1.5).is_err());
        assert!(ExponentialSmoothing::new(f64::NAN).is_err());
    }
}
