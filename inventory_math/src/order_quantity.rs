//! Economic Order Quantity

use crate::{require_non_negative, MathError, Result};

/// Economic Order Quantity: `sqrt(2 * D * S / H)`
///
/// * `annual_demand` - units demanded per year (D)
/// * `order_cost` - fixed cost per order placed (S)
/// * `holding_cost` - cost of holding one unit for a year (H), must be positive
pub fn economic_order_quantity(annual_demand: f64, order_cost: f64, holding_cost: f64) -> Result<f64> {
    require_non_negative("Annual demand", annual_demand)?;
    require_non_negative("Order cost", order_cost)?;

    if !holding_cost.is_finite() || holding_cost <= 0.0 {
        return Err(MathError::InvalidInput(format!(
            "Holding cost must be positive, got {}",
            holding_cost
        )));
    }

    Ok((2.0 * annual_demand * order_cost / holding_cost).sqrt())
}

/// Number of orders per year when ordering `quantity` units at a time
pub fn orders_per_year(annual_demand: f64, quantity: f64) -> Result<f64> {
    require_non_negative("Annual demand", annual_demand)?;

    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(MathError::CalculationError(
            "Order quantity must be positive to count orders".to_string(),
        ));
    }

    Ok(annual_demand / quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eoq() {
        // sqrt(2 * 1000 * 50 / 4) = sqrt(25000)
        let eoq = economic_order_quantity(1000.0, 50.0, 4.0).unwrap();
        assert_relative_eq!(eoq, 158.113_883, epsilon = 1e-6);

        assert_eq!(economic_order_quantity(0.0, 50.0, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn test_eoq_rejects_bad_inputs() {
        assert!(economic_order_quantity(1000.0, 50.0, 0.0).is_err());
        assert!(economic_order_quantity(-1.0, 50.0, 4.0).is_err());
        assert!(economic_order_quantity(1000.0, f64::NAN, 4.0).is_err());
    }

    #[test]
    fn test_orders_per_year() {
        assert_eq!(orders_per_year(1200.0, 100.0).unwrap(), 12.0);
        assert!(orders_per_year(1200.0, 0.0).is_err());
    }
}
