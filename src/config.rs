//! Planner configuration
//!
//! Loaded from a TOML file; every field falls back to a default.

use anyhow::{Context, Result};
use demand_forecast::models::{DEFAULT_ALPHA, DEFAULT_WINDOW};
use demand_forecast::{Metric, ModelParams, TableColumns};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Forecasting settings
    #[serde(default)]
    pub forecast: ForecastSettings,

    /// Demand table layout
    #[serde(default)]
    pub data: DataSettings,

    /// Inventory policy settings
    #[serde(default)]
    pub inventory: InventorySettings,
}

/// Forecasting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Moving average window
    #[serde(default = "default_window")]
    pub window: usize,

    /// Exponential smoothing factor
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Metric used to pick the best method
    #[serde(default)]
    pub metric: Metric,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}
fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            window: default_window(),
            alpha: default_alpha(),
            metric: Metric::default(),
        }
    }
}

/// Demand table layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Period column header, first column when unset
    #[serde(default)]
    pub period_column: Option<String>,

    /// Demand column header
    #[serde(default = "default_demand_column")]
    pub demand_column: String,
}

fn default_demand_column() -> String {
    "Demand".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            period_column: None,
            demand_column: default_demand_column(),
        }
    }
}

/// Inventory policy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySettings {
    /// Replenishment lead time in periods
    #[serde(default = "default_lead_time")]
    pub lead_time: f64,

    /// Target cycle service level
    #[serde(default = "default_service_level")]
    pub service_level: f64,

    /// Fixed cost per order
    #[serde(default)]
    pub order_cost: Option<f64>,

    /// Annual holding cost per unit
    #[serde(default)]
    pub holding_cost: Option<f64>,
}

fn default_lead_time() -> f64 {
    1.0
}
fn default_service_level() -> f64 {
    0.95
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            lead_time: default_lead_time(),
            service_level: default_service_level(),
            order_cost: None,
            holding_cost: None,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validated model parameters
    pub fn forecast_params(&self) -> demand_forecast::Result<ModelParams> {
        ModelParams::new(self.forecast.window, self.forecast.alpha)
    }

    /// Column selection for loading demand tables
    pub fn table_columns(&self) -> TableColumns {
        TableColumns {
            period: self.data.period_column.clone(),
            demand: self.data.demand_column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.forecast.window, 3);
        assert_eq!(config.forecast.metric, Metric::Mad);
        assert_eq!(config.table_columns(), TableColumns::default());
    }

    #[test]
    fn test_partial_config() {
        let config = PlannerConfig::from_toml_str(
            r#"
            [forecast]
            alpha = 0.5
            metric = "mse"

            [data]
            period_column = "Month"

            [inventory]
            order_cost = 75.0
            "#,
        )
        .unwrap();

        assert_eq!(config.forecast.window, 3);
        assert_eq!(config.forecast.alpha, 0.5);
        assert_eq!(config.forecast.metric, Metric::Mse);
        assert_eq!(config.table_columns().period.as_deref(), Some("Month"));
        assert_eq!(config.inventory.order_cost, Some(75.0));
        assert_eq!(config.inventory.service_level, 0.95);
    }

    #[test]
    fn test_invalid_params_surface_on_use() {
        let config = PlannerConfig::from_toml_str("[forecast]\nwindow = 0\n").unwrap();
        assert!(config.forecast_params().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[forecast]\nwindow = 5").unwrap();

        let config = PlannerConfig::load_from(file.path()).unwrap();
        assert_eq!(config.forecast.window, 5);

        assert!(PlannerConfig::load_from("/nonexistent/planner.toml").is_err());
    }
}
