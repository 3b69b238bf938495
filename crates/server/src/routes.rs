//! API route handlers
//!
//! Both handlers take no input: every parameter comes from the
//! configuration the server was started with. Responses carry a
//! `{statusCode, headers, body}` envelope, and the HTTP status matches
//! `statusCode`.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pipeline_facade::prelude::*;
use pipeline_facade::{ErrorDetail, ErrorKind};
use serde::Serialize;
use serde_json::Value;

use crate::cache::ReportCache;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<&'static str, &'static str>,
    pub body: Value,
}

impl Envelope {
    fn new(status: StatusCode, body: Value) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type", "application/json"),
            ("Access-Control-Allow-Origin", "*"),
        ]);
        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Configuration errors are server faults; the rest are unprocessable reports.
fn error_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Config => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::Data | ErrorKind::Forecast => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn failure(detail: ErrorDetail) -> Envelope {
    tracing::error!(kind = %detail.kind, "{}", detail.message);
    let status = error_status(detail.kind);
    let body = serde_json::to_value(ErrorBody { error: detail }).unwrap_or(Value::Null);
    Envelope::new(status, body)
}

/// Run a pipeline on the blocking pool; tree building, model fitting and
/// rayon scoring must not hold an async worker.
async fn compute<R, F>(config: Arc<PipelineConfig>, run: F) -> std::result::Result<R, ErrorDetail>
where
    R: Send + 'static,
    F: FnOnce(&PipelineConfig) -> Result<R> + Send + 'static,
{
    tokio::task::spawn_blocking(move || run(&config))
        .await
        .map_err(|e| ErrorDetail {
            kind: ErrorKind::Data,
            message: format!("report task failed: {}", e),
        })?
        .map_err(|error| ErrorDetail::from(&error))
}

async fn report<R, F>(state: &AppState, name: &str, run: F) -> Envelope
where
    R: Serialize + Send + 'static,
    F: FnOnce(&PipelineConfig) -> Result<R> + Send + 'static,
{
    let key = ReportCache::key(name, &state.config);
    if let Some(key) = &key {
        if let Some(cached) = state.cache.get(key).await {
            tracing::debug!(report = name, "serving cached report");
            return Envelope::new(StatusCode::OK, cached);
        }
    }

    let body = compute(Arc::clone(&state.config), run)
        .await
        .and_then(|report| {
            serde_json::to_value(report).map_err(|e| ErrorDetail {
                kind: ErrorKind::Data,
                message: format!("report serialization failed: {}", e),
            })
        });

    match body {
        Ok(body) => {
            if let Some(key) = key {
                state.cache.insert(key, body.clone()).await;
            }
            Envelope::new(StatusCode::OK, body)
        }
        Err(detail) => failure(detail),
    }
}

/// GET /api/v1/predictions
pub async fn predictions(State(state): State<AppState>) -> Envelope {
    report(&state, "metrics", |config| {
        MetricsPipeline::new(config.clone())?.run()
    })
    .await
}

/// GET /api/v1/sentiment
pub async fn sentiment(State(state): State<AppState>) -> Envelope {
    report(&state, "sentiment", |config| {
        SentimentPipeline::new(config.clone())?.run()
    })
    .await
}
