pub mod auth;
pub mod dashboard;
pub mod error;

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::es::EsClient;

/// Sdílený stav, per-request data se v něm nedrží
pub struct AppState {
    pub client: EsClient,
    pub access_token: String,
    pub debug: bool,
    pub request_timeout: std::time::Duration,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Sestaví router. `/` je za access tokenem, `/health` ne.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_access_token))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new()),
        )
        .with_state(state)
}
