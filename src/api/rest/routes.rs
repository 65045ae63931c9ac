//! # REST Routes
//!
//! Router assembly for the checkout-facing API.

use crate::api::rest::handlers::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the API router.
///
/// # Endpoints
///
/// - `POST /api/v1/quotations` - price a delivery
/// - `POST /api/v1/webhooks/provider` - provider status callbacks
/// - `GET /api/v1/health` - liveness probe
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/quotations", post(handlers::create_quotation))
        .route(
            "/api/v1/webhooks/provider",
            post(handlers::receive_webhook),
        )
        .route("/api/v1/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
