//! Error types for the demand_forecast crate

use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error from invalid parameters (window, alpha, empty series)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A metric was requested over a forecast with no defined entries
    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    /// Actual and forecast sequences are not aligned
    #[error("Length mismatch: {actual} actual values vs {forecast} forecast values")]
    LengthMismatch { actual: usize, forecast: usize },

    /// Error related to demand table validation or parsing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the CSV reader
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
