//! # Demand Forecast
//!
//! Naive demand forecasting for inventory planning.
//!
//! ## Features
//!
//! - Demand tables loaded from CSV (numeric or text period labels)
//! - Forecasting models (Naive, Moving Average, Exponential Smoothing)
//! - Error metrics (MAD, MSE) over the periods each model can forecast
//! - Best method selection with deterministic tie-breaking
//!
//! ## Quick Start
//!
//! ```rust
//! use demand_forecast::{select_best, DemandSeries, Metric, ModelKind, ModelParams};
//!
//! let demand = DemandSeries::from_values(vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0])?;
//!
//! // Score every model and keep the lowest MAD
//! let outcome = select_best(&demand, Metric::Mad, &ModelParams::default())?;
//! assert_eq!(outcome.best().model(), ModelKind::ExponentialSmoothing);
//!
//! let next = outcome.best().forecast.next_period();
//! println!("Forecast for period {}: {:.2}", next.period, next.value);
//! # Ok::<(), demand_forecast::ForecastError>(())
//! ```

pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod selection;

// Re-export commonly used types
pub use crate::data::{DemandSeries, PeriodKind, PeriodLabel, TableColumns};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::{score, ErrorScore, Metric};
pub use crate::models::{run_model, ForecastModel, ForecastSeries, ModelKind, ModelParams};
pub use crate::selection::{select_best, MethodResult, MethodSelector, SelectionOutcome};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
