//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input series is unusable (NaN, infinite)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// An output sequence does not have one value per horizon step
    #[error("Horizon mismatch in {sequence}: expected {expected} steps, got {actual}")]
    HorizonMismatch {
        sequence: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Interval bounds do not bracket the point forecast
    #[error("Inverted interval at step {step}: expected lower <= point <= upper")]
    InvertedBounds { step: usize },

    /// Output contains NaN or infinite values
    #[error("Non-finite forecast output at step {step}")]
    NonFinite { step: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 16,
            actual: 10,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 16 points, got 10"
        );
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ForecastError::InvalidParameter {
            name: "horizon".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'horizon': must be positive"
        );
    }

    #[test]
    fn test_horizon_mismatch_message() {
        let error = ForecastError::HorizonMismatch {
            sequence: "lower",
            expected: 24,
            actual: 23,
        };
        assert_eq!(
            error.to_string(),
            "Horizon mismatch in lower: expected 24 steps, got 23"
        );
    }

    #[test]
    fn test_inverted_bounds_message() {
        let error = ForecastError::InvertedBounds { step: 3 };
        assert!(error.to_string().contains("step 3"));
    }

    #[test]
    fn test_numerical_error_message() {
        let error = ForecastError::NumericalError("singular autocovariance".to_string());
        assert_eq!(error.to_string(), "Numerical error: singular autocovariance");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::NonFinite { step: 0 });
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}
