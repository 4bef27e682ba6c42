//! Safety stock and reorder point calculations

use crate::{require_non_negative, MathError, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal quantile for a cycle service level in (0, 1)
pub fn z_score(service_level: f64) -> Result<f64> {
    if !(service_level > 0.0 && service_level < 1.0) {
        return Err(MathError::InvalidInput(format!(
            "Service level must be between 0 and 1, got {}",
            service_level
        )));
    }

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| MathError::CalculationError(e.to_string()))?;

    Ok(normal.inverse_cdf(service_level))
}

/// Safety stock: `z * sigma * sqrt(L)`
///
/// `demand_std_dev` is per period and `lead_time` is in periods.
pub fn safety_stock(z: f64, demand_std_dev: f64, lead_time: f64) -> Result<f64> {
    if !z.is_finite() {
        return Err(MathError::InvalidInput(format!(
            "Z-score must be finite, got {}",
            z
        )));
    }
    require_non_negative("Demand standard deviation", demand_std_dev)?;
    require_non_negative("Lead time", lead_time)?;

    Ok(z * demand_std_dev * lead_time.sqrt())
}

/// Safety stock for a target cycle service level
pub fn safety_stock_for_service_level(
    service_level: f64,
    demand_std_dev: f64,
    lead_time: f64,
) -> Result<f64> {
    safety_stock(z_score(service_level)?, demand_std_dev, lead_time)
}

/// Reorder point: expected lead-time demand plus safety stock
pub fn reorder_point(average_demand: f64, lead_time: f64, safety_stock: f64) -> Result<f64> {
    require_non_negative("Average demand", average_demand)?;
    require_non_negative("Lead time", lead_time)?;
    require_non_negative("Safety stock", safety_stock)?;

    Ok(average_demand * lead_time + safety_stock)
}
