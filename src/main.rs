//! Credit Risk Demo Server
//!
//! Mock default-probability prediction service.
//!
//! # Routes
//!
//! ```text
//! GET  /health    liveness
//! GET  /metadata  service + model info
//! POST /predict   {"features": [...] | {...}} -> mock prediction
//! ```
//!
//! No model is ever loaded: predictions come from a fixed credit-limit rule
//! and are flagged as dev-only in every response.

mod config;
mod error;
mod handlers;
mod logic;
mod middleware;
mod models;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

use config::Config;
use models::ModelInfo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let state = AppState::new(config.clone());
    let app = create_router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting app (debug={}) on {}", config.debug, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<ModelInfo>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = ModelInfo::from_config(&config);
        Self {
            config: Arc::new(config),
            model: Arc::new(model),
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let cors = state.config.cors_layer();

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/metadata", get(handlers::metadata::get))
        .route("/predict", post(handlers::predict::predict))
        .layer(axum_middleware::from_fn(middleware::request_log::log_request))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_router(AppState::new(Config::default()));
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let config = Config {
            cors_origins: "http://localhost:3000, http://example.com".to_string(),
            ..Default::default()
        };
        let app = create_router(AppState::new(config));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://example.com"
        );
    }

    #[tokio::test]
    async fn test_cors_wildcard_by_default() {
        let app = create_router(AppState::new(Config::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://anywhere.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
