//! # REST Handlers
//!
//! axum handlers and wire DTOs for the checkout-facing API.
//!
//! The inbound and outbound JSON shapes are camelCase and stable; the
//! handlers translate between them and the canonical domain types, pick
//! the pickup point for the requested channel, and map the error taxonomy
//! onto HTTP statuses (validation/policy → 400 with a localized message,
//! anything unexpected → 500).

use crate::application::error::{PolicyCode, QuotationError};
use crate::application::services::{QuotationOrchestrator, WebhookStatusMapper};
use crate::config::PickupConfig;
use crate::domain::entities::{Contact, Quotation, QuotationRequest, Waypoint};
use crate::domain::events::{DriverDetails, ProviderEventType, WebhookEvent};
use crate::domain::value_objects::{Coordinate, ProviderOrderId, ServiceClass, Timestamp};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the REST API.
pub struct AppState {
    /// The quotation flow.
    pub orchestrator: Arc<QuotationOrchestrator>,
    /// The webhook merge path.
    pub webhook_mapper: Arc<WebhookStatusMapper>,
    /// Pickup points per channel.
    pub pickup: PickupConfig,
}

/// Inbound checkout quotation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationHttpRequest {
    /// Customer drop-off address.
    pub delivery_address: String,
    /// Recipient name.
    pub recipient_name: String,
    /// Recipient phone number.
    pub recipient_phone: String,
    /// Requested vehicle class (accepts the provider's SEDAN alias).
    pub service_type: String,
    /// Drop-off coordinate, when the map picker supplied one.
    #[serde(default)]
    pub coordinates: Option<Coordinate>,
    /// Requested pickup time (RFC 3339), for scheduled deliveries.
    #[serde(default)]
    pub is_requested_at: Option<String>,
    /// Express-channel flag.
    #[serde(default)]
    pub is_express: Option<bool>,
    /// Order channel name; `express` selects the express pickup point.
    #[serde(default)]
    pub order_type: Option<String>,
    /// Toll-road request for car deliveries.
    #[serde(default)]
    pub use_toll_road: Option<bool>,
}

impl QuotationHttpRequest {
    fn wants_express(&self) -> bool {
        self.is_express.unwrap_or(false)
            || self
                .order_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case("express"))
    }
}

/// Price block of the success response.
#[derive(Debug, Serialize)]
pub struct PriceDto {
    /// Total in whole rupiah; always a multiple of 100.
    pub total: i64,
    /// ISO 4217 code.
    pub currency: &'static str,
}

/// Distance block of the success response.
#[derive(Debug, Serialize)]
pub struct DistanceDto {
    /// Distance in kilometres.
    pub value: f64,
    /// Customer-facing text, e.g. `"5.2 km"`.
    pub text: String,
}

/// Toll block of the success response; value is a decimal string.
#[derive(Debug, Serialize)]
pub struct TollDto {
    /// Surcharge amount as a string.
    pub value: String,
    /// ISO 4217 code.
    pub currency: &'static str,
}

/// The quotation body of the success response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDto {
    /// Quotation id to echo back when placing the order.
    pub id: String,
    /// Price summary.
    pub price: PriceDto,
    /// Distance summary.
    pub distance: DistanceDto,
    /// The canonical vehicle class.
    pub service_type: String,
    /// RFC 3339 expiry of this offer.
    pub expires_at: String,
    /// Coarse delivery-time estimate.
    pub estimated_time: String,
    /// Toll surcharge, present only when charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_charge: Option<TollDto>,
    /// Whether a toll road is priced in.
    pub has_toll_road: bool,
}

/// Success envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationHttpResponse {
    /// Always true on this shape.
    pub success: bool,
    /// The quotation.
    pub quotation: QuotationDto,
    /// Present (true) when the price was computed locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mock: Option<bool>,
    /// Explanation attached to fallback quotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Failure envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Localized, customer-facing message.
    pub error: String,
    /// Structured code for policy rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<PolicyCode>,
}

/// HTTP wrapper for the application error taxonomy.
#[derive(Debug)]
pub struct ApiError(pub QuotationError);

impl From<QuotationError> for ApiError {
    fn from(err: QuotationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "quotation request failed unexpectedly");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = match &self.0 {
            QuotationError::Validation(message) => ErrorResponse {
                error: message.clone(),
                error_code: None,
            },
            QuotationError::PolicyRejected { code, detail } => ErrorResponse {
                error: detail.clone(),
                error_code: Some(*code),
            },
            QuotationError::Unexpected(_) => ErrorResponse {
                error: "Terjadi kesalahan, silakan coba lagi".to_string(),
                error_code: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// `POST /api/v1/quotations`
///
/// # Errors
///
/// Returns 400 for validation/policy rejections, 500 otherwise.
pub async fn create_quotation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuotationHttpRequest>,
) -> Result<Json<QuotationHttpResponse>, ApiError> {
    let request = build_request(&state.pickup, body)?;
    let quotation = state.orchestrator.quote(request).await?;
    Ok(Json(render_quotation(&quotation)))
}

/// Translates the HTTP payload into a validated domain request.
fn build_request(
    pickup: &PickupConfig,
    body: QuotationHttpRequest,
) -> Result<QuotationRequest, ApiError> {
    let service_class: ServiceClass = body
        .service_type
        .parse()
        .map_err(|_| QuotationError::validation("Jenis kendaraan tidak dikenal"))?;

    let scheduled_at = match body.is_requested_at.as_deref() {
        None => None,
        Some(raw) => Some(
            Timestamp::parse_iso8601(raw)
                .ok_or_else(|| QuotationError::validation("Waktu penjemputan tidak valid"))?,
        ),
    };

    let origin = pickup
        .for_channel(body.wants_express())
        .waypoint()
        .map_err(QuotationError::from)?;
    let destination = Waypoint::new(body.delivery_address, body.coordinates)
        .map_err(QuotationError::from)?;
    let contact =
        Contact::new(body.recipient_name, body.recipient_phone).map_err(QuotationError::from)?;

    Ok(QuotationRequest::new(
        origin,
        destination,
        service_class,
        scheduled_at,
        body.use_toll_road.unwrap_or(false),
        contact,
    ))
}

/// Coarse delivery-time estimate; real ETAs are out of scope.
fn estimate_minutes(distance_km: f64) -> i64 {
    15 + (distance_km * 3.0).ceil() as i64
}

fn render_quotation(quotation: &Quotation) -> QuotationHttpResponse {
    let toll = quotation.price().toll_surcharge();
    let has_toll_road = !toll.is_zero();

    QuotationHttpResponse {
        success: true,
        quotation: QuotationDto {
            id: quotation.id().to_string(),
            price: PriceDto {
                total: quotation.price().total().amount(),
                currency: quotation.price().currency(),
            },
            distance: DistanceDto {
                value: quotation.distance().km(),
                text: quotation.distance().text(),
            },
            service_type: quotation.service_class().to_string(),
            expires_at: quotation.expires_at().to_iso8601(),
            estimated_time: format!("{} mins", estimate_minutes(quotation.distance().km())),
            toll_charge: has_toll_road.then(|| TollDto {
                value: toll.amount().to_string(),
                currency: quotation.price().currency(),
            }),
            has_toll_road,
        },
        is_mock: quotation.is_mock().then_some(true),
        note: quotation.note().map(str::to_string),
    }
}

/// Inbound provider callback.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookHttpRequest {
    /// Callback kind.
    #[serde(rename = "type")]
    pub event_type: ProviderEventType,
    /// The provider's order id.
    pub order_id: String,
    /// Provider-vocabulary status, when present.
    #[serde(default)]
    pub status: Option<String>,
    /// Driver details on assignment callbacks.
    #[serde(default)]
    pub driver_details: Option<DriverDetails>,
    /// Event time: epoch milliseconds or RFC 3339.
    pub timestamp: WireTimestamp,
    /// Opaque provider extras.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// The provider sends timestamps in two shapes depending on event age.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireTimestamp {
    /// Epoch milliseconds.
    Millis(i64),
    /// RFC 3339 string.
    Iso(String),
}

impl WireTimestamp {
    fn to_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Millis(ms) => Timestamp::from_millis(*ms),
            Self::Iso(raw) => Timestamp::parse_iso8601(raw),
        }
    }
}

/// Acknowledgement for a merged webhook.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    /// Always true when the event was accepted.
    pub success: bool,
}

/// `POST /api/v1/webhooks/provider`
///
/// # Errors
///
/// Returns 400 on an unparseable timestamp, 500 when the store fails.
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    Json(body): Json<WebhookHttpRequest>,
) -> Result<Json<WebhookAck>, ApiError> {
    let timestamp = body
        .timestamp
        .to_timestamp()
        .ok_or_else(|| QuotationError::validation("Stempel waktu tidak valid"))?;

    let event = WebhookEvent {
        event_type: body.event_type,
        provider_order_id: ProviderOrderId::new(body.order_id),
        status: body.status,
        driver: body.driver_details,
        timestamp,
        metadata: body.metadata,
    };

    state
        .webhook_mapper
        .process(event)
        .await
        .map_err(|e| QuotationError::unexpected(e.to_string()))?;

    Ok(Json(WebhookAck { success: true }))
}

/// Health response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
