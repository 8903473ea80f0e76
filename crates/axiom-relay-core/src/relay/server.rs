//! Router assembly and the standalone relay server.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use axiom_relay_types::IngestConfig;

use crate::relay::forward::ForwardClient;
use crate::relay::middleware::{relay_middleware, RELAY_BODY_LIMIT};

/// Shared relay state: read-only configuration plus the outbound client.
#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<IngestConfig>,
    pub client: ForwardClient,
}

impl RelayState {
    pub fn new(config: IngestConfig) -> Self {
        Self::with_client(config, ForwardClient::new(reqwest::Client::new()))
    }

    pub fn with_client(config: IngestConfig, client: ForwardClient) -> Self {
        Self { config: Arc::new(config), client }
    }
}

/// Build the standalone relay router.
///
/// The relay itself is a layer; the routes below are what a bare relay
/// deployment answers for everything the layer passes through. A host
/// application embedding the relay applies the same layer over its own
/// router instead.
pub fn build_relay_router(state: RelayState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(state, relay_middleware))
        .layer(DefaultBodyLimit::max(RELAY_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({"status": "ok"})),
    )
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Configuration for starting the relay server
pub struct ServerStartConfig {
    pub host: String,
    pub port: u16,
    pub ingest: IngestConfig,
}

/// Standalone relay server instance
pub struct RelayServer {
    config: ServerStartConfig,
}

impl RelayServer {
    pub fn new(config: ServerStartConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        tracing::info!("Starting relay server on {}", addr);

        let state = RelayState::new(self.config.ingest);
        let app = build_relay_router(state);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
