//! # REST API
//!
//! Checkout-facing REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /api/v1/quotations` - price a delivery for checkout
//! - `POST /api/v1/webhooks/provider` - asynchronous provider callbacks
//! - `GET /api/v1/health` - liveness probe
//!
//! # Usage
//!
//! ```ignore
//! use delivery_rfq::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     orchestrator: /* ... */,
//!     webhook_mapper: /* ... */,
//!     pickup: /* ... */,
//! });
//!
//! let router = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, HealthResponse, QuotationHttpRequest,
    QuotationHttpResponse, WebhookAck, WebhookHttpRequest,
};
pub use routes::create_router;
