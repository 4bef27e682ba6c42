//! Demand statistics feeding the safety stock formulas

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Mean and sample standard deviation of per-period demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub periods: usize,
}

/// Compute demand statistics over at least two periods
pub fn demand_statistics(values: &[f64]) -> Result<DemandStatistics> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "Need at least 2 demand periods for a standard deviation, have {}",
            values.len()
        )));
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput(
            "Demand values must be finite".to_string(),
        ));
    }

    Ok(DemandStatistics {
        mean: values.iter().mean(),
        std_dev: values.iter().std_dev(),
        periods: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_demand_statistics() {
        let stats = demand_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(stats.mean, 5.0);
        // Sample standard deviation, n - 1 denominator
        assert_relative_eq!(stats.std_dev, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(stats.periods, 8);
    }

    #[test]
    fn test_needs_two_periods() {
        assert!(matches!(
            demand_statistics(&[3.0]),
            Err(MathError::InsufficientData(_))
        ));
    }
}
