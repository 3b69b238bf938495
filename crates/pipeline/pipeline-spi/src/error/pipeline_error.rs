//! Pipeline error taxonomy

use std::fmt;

use anomaly_spi::AnomalyError;
use data_spi::DataError;
use forecast_spi::ForecastError;
use sentiment_spi::SentimentError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ConfigError;

/// Any failure that aborts a pipeline run.
///
/// Domain errors are kept intact; [`PipelineError::kind`] folds them into
/// the three kinds the request handlers report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Sentiment(#[from] SentimentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// Reported error kind.
    ///
    /// Parameter errors from any domain are configuration errors; a forecast
    /// input problem is a data error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Data(DataError::InvalidParameter { .. })
            | PipelineError::Anomaly(AnomalyError::InvalidParameter { .. })
            | PipelineError::Forecast(ForecastError::InvalidParameter { .. })
            | PipelineError::Sentiment(SentimentError::InvalidParameter { .. })
            | PipelineError::Config(_) => ErrorKind::Config,
            PipelineError::Forecast(ForecastError::InvalidData(_)) => ErrorKind::Data,
            PipelineError::Forecast(_) => ErrorKind::Forecast,
            PipelineError::Data(_) | PipelineError::Anomaly(_) | PipelineError::Sentiment(_) => {
                ErrorKind::Data
            }
        }
    }
}

/// Error kind exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "DataError")]
    Data,
    #[serde(rename = "ForecastError")]
    Forecast,
    #[serde(rename = "ConfigError")]
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Data => "DataError",
            ErrorKind::Forecast => "ForecastError",
            ErrorKind::Config => "ConfigError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{kind, message}` body of an error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&PipelineError> for ErrorDetail {
    fn from(error: &PipelineError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let cases: Vec<(PipelineError, ErrorKind)> = vec![
            (DataError::EmptyWindow("x".into()).into(), ErrorKind::Data),
            (
                DataError::InvalidParameter {
                    name: "points".into(),
                    reason: "r".into(),
                }
                .into(),
                ErrorKind::Config,
            ),
            (AnomalyError::NotFitted.into(), ErrorKind::Data),
            (
                AnomalyError::InvalidParameter {
                    name: "contamination".into(),
                    reason: "r".into(),
                }
                .into(),
                ErrorKind::Config,
            ),
            (ForecastError::InvertedBounds { step: 2 }.into(), ErrorKind::Forecast),
            (
                ForecastError::InsufficientData {
                    required: 16,
                    actual: 3,
                }
                .into(),
                ErrorKind::Forecast,
            ),
            (ForecastError::InvalidData("nan".into()).into(), ErrorKind::Data),
            (
                SentimentError::InvalidScore {
                    index: 0,
                    score: 2.0,
                }
                .into(),
                ErrorKind::Data,
            ),
            (ConfigError::invalid("horizon", "zero").into(), ErrorKind::Config),
        ];
        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{:?}", error);
        }
    }

    #[test]
    fn test_message_is_transparent() {
        let error: PipelineError = ForecastError::InvertedBounds { step: 2 }.into();
        assert_eq!(
            error.to_string(),
            ForecastError::InvertedBounds { step: 2 }.to_string()
        );
    }

    #[test]
    fn test_detail_serialization() {
        let error: PipelineError = ConfigError::invalid("horizon", "must be at least 1").into();
        let json = serde_json::to_value(ErrorDetail::from(&error)).unwrap();
        assert_eq!(json["kind"], "ConfigError");
        assert_eq!(json["message"], "Invalid parameter 'horizon': must be at least 1");
    }

    #[test]
    fn test_kind_display_matches_serde() {
        for kind in [ErrorKind::Data, ErrorKind::Forecast, ErrorKind::Config] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
