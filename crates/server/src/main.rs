//! # netpulse-server
//!
//! REST API server for the network metrics and community sentiment reports.
//!
//! The pipeline configuration is read once at startup from `NETPULSE_*`
//! environment variables (a `.env` file is loaded first if present).

use axum::{routing::get, Json, Router};
use pipeline_facade::PipelineConfig;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cache;
mod routes;

use cache::ReportCache;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<PipelineConfig>,
    cache: Arc<ReportCache>,
}

impl AppState {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config: Arc::new(config),
            cache: Arc::new(ReportCache::new()),
        }
    }
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(liveness))
        .route("/health", get(liveness))
        // API endpoints
        .route("/api/v1/predictions", get(routes::predictions))
        .route("/api/v1/sentiment", get(routes::sentiment))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netpulse_server=info,tower_http=info".into()),
        )
        .init();

    let config = PipelineConfig::from_env()?;
    tracing::info!(
        seed = config.seed,
        window = config.window,
        horizon = config.horizon,
        "pipeline configuration loaded"
    );

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    tracing::info!("netpulse-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(AppState::new(config))).await?;
    Ok(())
}
