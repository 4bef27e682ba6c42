use demand_forecast::error::ForecastError;
use std::io;

#[test]
fn test_error_conversion() {
    // Test IO error conversion
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);

    assert!(matches!(forecast_error, ForecastError::IoError(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidParameter("Window size must be positive".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid parameter: Window size must be positive"
    );

    let error = ForecastError::LengthMismatch {
        actual: 5,
        forecast: 4,
    };
    assert_eq!(
        error.to_string(),
        "Length mismatch: 5 actual values vs 4 forecast values"
    );

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}

#[test]
fn test_error_creation() {
    let metric_error = ForecastError::UndefinedMetric("MAD".to_string());
    let data_error = ForecastError::DataError("Column 'Demand' not found".to_string());

    assert!(matches!(metric_error, ForecastError::UndefinedMetric(_)));

    if let ForecastError::DataError(msg) = data_error {
        assert_eq!(msg, "Column 'Demand' not found");
    } else {
        panic!("Wrong error variant");
    }
}
