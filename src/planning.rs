//! Inventory policy derived from a demand table

use demand_forecast::DemandSeries;
use inventory_math::order_quantity::{economic_order_quantity, orders_per_year};
use inventory_math::{demand_statistics, reorder_point, safety_stock, z_score};
use serde::Serialize;
use tracing::debug;

/// Economic Order Quantity and the resulting order cadence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPlan {
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub order_quantity: f64,
    pub orders_per_year: f64,
}

impl OrderPlan {
    /// Compute the EOQ plan
    pub fn compute(
        annual_demand: f64,
        order_cost: f64,
        holding_cost: f64,
    ) -> inventory_math::Result<Self> {
        let order_quantity = economic_order_quantity(annual_demand, order_cost, holding_cost)?;
        let orders_per_year = if order_quantity > 0.0 {
            orders_per_year(annual_demand, order_quantity)?
        } else {
            0.0
        };

        Ok(Self {
            annual_demand,
            order_cost,
            holding_cost,
            order_quantity,
            orders_per_year,
        })
    }
}

/// Safety stock and reorder point for a demand history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockPolicy {
    pub periods: usize,
    pub mean_demand: f64,
    pub demand_std_dev: f64,
    pub lead_time: f64,
    pub service_level: f64,
    pub z_score: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
}

impl StockPolicy {
    /// Derive the policy from per-period demand
    pub fn compute(
        demand: &DemandSeries,
        lead_time: f64,
        service_level: f64,
    ) -> inventory_math::Result<Self> {
        let stats = demand_statistics(demand.values())?;
        let z = z_score(service_level)?;
        let safety = safety_stock(z, stats.std_dev, lead_time)?.max(0.0);
        let reorder = reorder_point(stats.mean, lead_time, safety)?;
        debug!(
            "Stock policy over {} periods: safety stock {:.2}, reorder point {:.2}",
            stats.periods, safety, reorder
        );

        Ok(Self {
            periods: stats.periods,
            mean_demand: stats.mean,
            demand_std_dev: stats.std_dev,
            lead_time,
            service_level,
            z_score: z,
            safety_stock: safety,
            reorder_point: reorder,
        })
    }
}
