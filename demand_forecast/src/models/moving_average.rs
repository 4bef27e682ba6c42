//! Moving average forecasting over the previous `window` periods

use crate::error::Result;
use crate::models::{mean, validate_window, ForecastModel, ModelKind};

/// Simple Moving Average model.
///
/// Periods with fewer than `window` predecessors average over all of them.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

impl MovingAverage {
    /// Create a new moving average model
    pub fn new(window: usize) -> Result<Self> {
        validate_window(window)?;

        Ok(Self {
            name: format!("Moving Average (window={})", window),
            window,
        })
    }

    /// Window size
    pub fn window(&self) -> usize {
        self.window
    }
}

impl ForecastModel for MovingAverage {
    fn kind(&self) -> ModelKind {
        ModelKind::MovingAverage
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>> {
        (0..demand.len())
            .map(|t| mean(&demand[t.saturating_sub(self.window)..t]))
            .collect()
    }

    fn next_value(&self, demand: &[f64], _fitted: &[Option<f64>]) -> f64 {
        let start = demand.len().saturating_sub(self.window);
        mean(&demand[start..]).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_shrinks_at_the_start() {
        let model = MovingAverage::new(3).unwrap();
        let fitted = model.fitted(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(
            fitted,
            vec![None, Some(10.0), Some(15.0), Some(20.0), Some(30.0)]
        );
    }

    #[test]
    fn test_next_value_uses_last_window() {
        let model = MovingAverage::new(2).unwrap();
        let demand = [10.0, 20.0, 30.0, 50.0];
        assert_eq!(model.next_value(&demand, &model.fitted(&demand)), 40.0);
    }

    #[test]
    fn test_window_larger_than_series() {
        let model = MovingAverage::new(10).unwrap();
        let demand = [6.0, 12.0];
        assert_eq!(model.fitted(&demand), vec![None, Some(6.0)]);
        assert_eq!(model.next_value(&demand, &[]), 9.0);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(MovingAverage::new(0).is_err());
    }
}
