use approx::assert_relative_eq;
use demand_forecast::data::DemandSeries;
use demand_forecast::metrics::{
    error_table, mean_absolute_deviation, mean_squared_error, score, ErrorScore, Metric,
};
use demand_forecast::models::{run_model, ForecastSeries, ModelKind, ModelParams};
use demand_forecast::ForecastError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_error_metrics() {
    let actual = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let forecast = vec![Some(12.0), Some(18.0), Some(33.0), Some(37.0), Some(52.0)];

    let mad = mean_absolute_deviation(&actual, &forecast).unwrap();
    assert_relative_eq!(mad, 2.4, epsilon = 1e-12);

    let mse = mean_squared_error(&actual, &forecast).unwrap();
    assert_relative_eq!(mse, 6.0, epsilon = 1e-12);
}

#[test]
fn test_undefined_entries_are_excluded() {
    let actual = vec![100.0, 10.0, 20.0];
    let forecast = vec![None, Some(14.0), Some(20.0)];

    // Only the last two periods count: (4 + 0) / 2
    assert_relative_eq!(mean_absolute_deviation(&actual, &forecast).unwrap(), 2.0);
    assert_relative_eq!(mean_squared_error(&actual, &forecast).unwrap(), 8.0);
}

#[test]
fn test_no_defined_forecast_is_an_error() {
    let result = mean_absolute_deviation(&[5.0], &[None]);
    assert!(matches!(result, Err(ForecastError::UndefinedMetric(_))));

    let data = DemandSeries::from_values(vec![42.0]).unwrap();
    let forecast = run_model(ModelKind::Naive, &data, &ModelParams::default()).unwrap();
    let result = score(Metric::Mse, &data, &forecast);
    assert!(matches!(result, Err(ForecastError::UndefinedMetric(_))));
}

#[test]
fn test_length_mismatch() {
    let data = DemandSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
    let other = DemandSeries::from_values(vec![1.0, 2.0]).unwrap();
    let forecast: ForecastSeries =
        run_model(ModelKind::Naive, &other, &ModelParams::default()).unwrap();

    match score(Metric::Mad, &data, &forecast) {
        Err(ForecastError::LengthMismatch { actual, forecast }) => {
            assert_eq!(actual, 3);
            assert_eq!(forecast, 2);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }

    assert!(error_table(&data, &forecast).is_err());
}

#[test]
fn test_metrics_are_non_negative_and_zero_on_self() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let n = rng.gen_range(1..30);
        let actual: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1000.0)).collect();
        let noisy: Vec<Option<f64>> = actual
            .iter()
            .map(|a| Some(a + rng.gen_range(-50.0..50.0)))
            .collect();
        let same: Vec<Option<f64>> = actual.iter().copied().map(Some).collect();

        assert!(mean_absolute_deviation(&actual, &noisy).unwrap() >= 0.0);
        assert!(mean_squared_error(&actual, &noisy).unwrap() >= 0.0);
        assert_eq!(mean_absolute_deviation(&actual, &same).unwrap(), 0.0);
        assert_eq!(mean_squared_error(&actual, &same).unwrap(), 0.0);
    }
}

#[test]
fn test_error_score_and_table() {
    let data = DemandSeries::from_values(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
    let forecast = run_model(ModelKind::MovingAverage, &data, &ModelParams::default()).unwrap();

    // Errors 10, 15, 20, 20 over four defined periods
    let score = ErrorScore::compute(&data, &forecast).unwrap();
    assert_relative_eq!(score.get(Metric::Mad), 16.25);
    assert_relative_eq!(score.get(Metric::Mse), 281.25);

    let rows = error_table(&data, &forecast).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].forecast, None);
    assert_eq!(rows[0].absolute_error, None);
    assert_eq!(rows[2].absolute_error, Some(15.0));
    assert_eq!(rows[2].squared_error, Some(225.0));
}

#[test]
fn test_metric_parsing() {
    assert_eq!("MAD".parse::<Metric>().unwrap(), Metric::Mad);
    assert_eq!("mse".parse::<Metric>().unwrap(), Metric::Mse);
    assert!("rmse".parse::<Metric>().is_err());
    assert_eq!(Metric::default(), Metric::Mad);
}
