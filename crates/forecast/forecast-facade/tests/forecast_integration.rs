//! Integration tests for the forecaster contract

use forecast_facade::{
    Arima, ArimaConfig, ConfidenceInterval, ForecastError, Forecaster, Result,
};

fn sample_data() -> Vec<f64> {
    (0..48)
        .map(|i| 6.0 + 0.1 * (i as f64 * std::f64::consts::PI / 12.0).sin() + 0.05 * ((i * 7) % 5) as f64)
        .collect()
}

/// Forecaster that swaps its bounds, as a misbehaving plug-in would.
struct InvertedForecaster;

impl Forecaster for InvertedForecaster {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ConfidenceInterval> {
        let last = series[series.len() - 1];
        Ok(ConfidenceInterval::new(
            vec![last; horizon],
            vec![last + 1.0; horizon],
            vec![last - 1.0; horizon],
            0.95,
        ))
    }

    fn min_observations(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "inverted"
    }
}

#[test]
fn test_boxed_forecasters_share_contract() {
    let models: Vec<Box<dyn Forecaster>> = vec![
        Box::new(Arima::default()),
        Box::new(Arima::new(ArimaConfig::new(2, 0)).unwrap()),
        Box::new(Arima::new(ArimaConfig::new(1, 1).with_confidence_level(0.9)).unwrap()),
    ];
    let data = sample_data();
    for model in &models {
        let ci = model.forecast(&data, 12).unwrap();
        assert_eq!(ci.len(), 12, "{}", model.name());
        assert!(ci.validate(12).is_ok(), "{}", model.name());
    }
}

#[test]
fn test_inverted_plugin_is_caught_by_validation() {
    let ci = InvertedForecaster.forecast(&sample_data(), 3).unwrap();
    assert_eq!(ci.validate(3), Err(ForecastError::InvertedBounds { step: 0 }));
}

#[test]
fn test_min_observations_boundary() {
    let model = Arima::default();
    let minimum = model.min_observations();
    let data = sample_data();
    assert!(model.forecast(&data[..minimum], 1).is_ok());
    assert!(matches!(
        model.forecast(&data[..minimum - 1], 1),
        Err(ForecastError::InsufficientData { .. })
    ));
}

#[test]
fn test_higher_confidence_is_wider() {
    let data = sample_data();
    let narrow = Arima::new(ArimaConfig::default().with_confidence_level(0.8))
        .unwrap()
        .forecast(&data, 6)
        .unwrap();
    let wide = Arima::new(ArimaConfig::default().with_confidence_level(0.99))
        .unwrap()
        .forecast(&data, 6)
        .unwrap();
    for h in 0..6 {
        assert_eq!(narrow.forecast[h], wide.forecast[h]);
        assert!(wide.upper[h] - wide.lower[h] > narrow.upper[h] - narrow.lower[h]);
    }
}
