//! # Inventory Math
//!
//! Closed-form inventory calculations used alongside demand forecasts.
//! This crate provides the Economic Order Quantity, safety stock and
//! reorder point formulas together with the demand statistics they need.

use thiserror::Error;

pub mod order_quantity;
pub mod safety_stock;
pub mod statistics;

pub use order_quantity::economic_order_quantity;
pub use safety_stock::{reorder_point, safety_stock, safety_stock_for_service_level, z_score};
pub use statistics::{demand_statistics, DemandStatistics};

/// Errors that can occur in inventory calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for inventory math operations
pub type Result<T> = std::result::Result<T, MathError>;

pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MathError::InvalidInput(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("demand", 0.0).is_ok());
        assert!(require_non_negative("demand", -1.0).is_err());
        assert!(require_non_negative("demand", f64::INFINITY).is_err());
    }
}
