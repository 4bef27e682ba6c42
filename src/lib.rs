//! # Demand Planner
//!
//! `demand_planner` ties demand forecasting to inventory policy: it loads a
//! demand table, ranks the naive forecasting methods by error, and derives
//! order quantity, safety stock and reorder point.
//!
//! ## Example
//!
//! ```
//! use demand_planner::demand_forecast::{select_best, DemandSeries, Metric};
//! use demand_planner::config::PlannerConfig;
//!
//! let config = PlannerConfig::default();
//! let demand = DemandSeries::from_values(vec![120.0, 135.0, 128.0, 140.0]).unwrap();
//!
//! let outcome = select_best(&demand, Metric::Mad, &config.forecast_params().unwrap()).unwrap();
//! assert_eq!(outcome.results().len(), 3);
//! ```

pub mod config;
pub mod planning;
pub mod report;

pub use demand_forecast;
pub use inventory_math;
