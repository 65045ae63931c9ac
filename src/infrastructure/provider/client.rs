//! # Provider HTTP Client
//!
//! Signed integration with the delivery provider's quotation endpoint.
//!
//! Builds the wire payload, signs it (HMAC-SHA256), posts it to
//! `POST {base_url}/v3/quotations`, and maps the outcome into either a
//! [`ProviderQuotation`] or a classified
//! [`ProviderError`](crate::infrastructure::provider::ProviderError).
//! The internal service-class vocabulary is remapped to the provider's
//! (`CAR` → `SEDAN`) here and nowhere else.

use crate::domain::entities::QuotationRequest;
use crate::domain::value_objects::{DistanceKm, Money, Timestamp};
use crate::infrastructure::provider::credentials::ProviderCredentials;
use crate::infrastructure::provider::error::{ProviderError, ProviderResult};
use crate::infrastructure::provider::signature;
use crate::infrastructure::provider::traits::{ProviderQuotation, QuotationProvider};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Path of the quotation endpoint, also covered by the signature.
const QUOTATION_PATH: &str = "/v3/quotations";

/// HTTP client for the provider quotation API.
///
/// Stateless per call; safe to share across requests.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    credentials: ProviderCredentials,
}

impl ProviderClient {
    /// Creates a client with the given credentials and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unknown`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(credentials: ProviderCredentials, timeout_ms: u64) -> ProviderResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ProviderError::unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, credentials })
    }

    fn quotation_url(&self) -> String {
        format!(
            "{}{}",
            self.credentials.base_url.trim_end_matches('/'),
            QUOTATION_PATH
        )
    }

    fn build_payload(&self, request: &QuotationRequest) -> ProviderResult<QuotationPayload> {
        let stops = [request.origin(), request.destination()]
            .into_iter()
            .map(|waypoint| {
                let coordinate = waypoint.coordinate().ok_or_else(|| {
                    ProviderError::unknown("waypoint reached the provider without a coordinate")
                })?;
                Ok(WireStop {
                    coordinates: WireCoordinates {
                        lat: coordinate.lat.to_string(),
                        lng: coordinate.lng.to_string(),
                    },
                    address: waypoint.address().to_string(),
                })
            })
            .collect::<ProviderResult<Vec<_>>>()?;

        Ok(QuotationPayload {
            data: PayloadData {
                schedule_at: request.scheduled_at().map(|ts| ts.to_iso8601()),
                service_type: request.service_class().provider_code(),
                // Toll pricing is local and disclosed by the surcharge
                // engine; forwarding it here would double-price it.
                special_requests: Vec::new(),
                language: self.credentials.language(),
                stops,
                is_route_optimized: false,
            },
        })
    }
}

#[async_trait]
impl QuotationProvider for ProviderClient {
    #[tracing::instrument(skip(self, request), fields(market = %self.credentials.market))]
    async fn request_quotation(
        &self,
        request: &QuotationRequest,
    ) -> ProviderResult<ProviderQuotation> {
        let payload = self.build_payload(request)?;
        let body = serde_json::to_string(&payload)
            .map_err(|e| ProviderError::unknown(format!("failed to encode payload: {e}")))?;

        let timestamp_ms = Timestamp::now().timestamp_millis();
        let digest = signature::sign(
            &self.credentials.api_secret,
            timestamp_ms,
            "POST",
            QUOTATION_PATH,
            &body,
        )?;

        let response = self
            .http
            .post(self.quotation_url())
            .header("Content-Type", "application/json")
            .header(
                "Authorization",
                signature::authorization_header(&self.credentials.api_key, timestamp_ms, &digest),
            )
            .header("Market", self.credentials.market.as_str())
            .header("Request-ID", Uuid::new_v4().to_string())
            .body(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::unavailable(format!("failed to read response: {e}")))?;

        if status.is_success() {
            parse_quotation(&text)
        } else {
            tracing::warn!(status = %status, "provider rejected quotation request");
            Err(classify_rejection(status, &text))
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::unavailable("request timed out")
    } else if error.is_connect() {
        ProviderError::unavailable(format!("connection failed: {error}"))
    } else {
        ProviderError::unavailable(format!("transport error: {error}"))
    }
}

fn parse_quotation(body: &str) -> ProviderResult<ProviderQuotation> {
    let envelope: QuotationEnvelope = serde_json::from_str(body)
        .map_err(|e| ProviderError::unknown(format!("unparseable provider response: {e}")))?;
    let wire = envelope.data;

    let total = wire
        .price_breakdown
        .total
        .parse::<f64>()
        .map_err(|_| ProviderError::unknown("provider total is not numeric"))?;

    let distance = match wire.distance {
        Some(d) => {
            let value = d
                .value
                .parse::<f64>()
                .map_err(|_| ProviderError::unknown("provider distance is not numeric"))?;
            match d.unit.as_deref() {
                Some("m") => DistanceKm::new(value / 1000.0),
                _ => DistanceKm::new(value),
            }
        }
        None => DistanceKm::new(0.0),
    };

    Ok(ProviderQuotation {
        quotation_ref: wire.quotation_id,
        total: Money::new(total.round() as i64),
        currency: wire.price_breakdown.currency,
        distance,
        expires_at: wire
            .expires_at
            .as_deref()
            .and_then(Timestamp::parse_iso8601),
    })
}

/// Classifies a non-2xx response.
///
/// Structured error ids decide first; message keywords are consulted only
/// when no id is present; everything else is `Unknown`.
fn classify_rejection(status: StatusCode, body: &str) -> ProviderError {
    if status.is_server_error() {
        return ProviderError::unavailable(format!("provider returned {status}"));
    }

    let envelope = serde_json::from_str::<ErrorEnvelope>(body).unwrap_or_default();

    if let Some(id) = envelope.first_error_id() {
        return match id {
            "ERR_INVALID_LOCATION" | "ERR_OUT_OF_SERVICE_AREA" | "ERR_INVALID_COORDINATES" => {
                ProviderError::invalid_coordinates(envelope.detail(body))
            }
            "ERR_INVALID_MARKET" | "ERR_INVALID_COUNTRY" => {
                ProviderError::invalid_market(envelope.detail(body))
            }
            _ => ProviderError::unknown(envelope.detail(body)),
        };
    }

    // Last resort: no structured id, only a message.
    let message = envelope.detail(body).to_lowercase();
    if message.contains("market") || message.contains("country") {
        ProviderError::invalid_market(envelope.detail(body))
    } else if message.contains("location") || message.contains("coordinate") {
        ProviderError::invalid_coordinates(envelope.detail(body))
    } else {
        ProviderError::unknown(format!("provider returned {status}: {}", envelope.detail(body)))
    }
}

// Wire shapes. Field names follow the provider contract, not internal
// vocabulary.

#[derive(Debug, Serialize)]
struct QuotationPayload {
    data: PayloadData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadData {
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_at: Option<String>,
    service_type: &'static str,
    special_requests: Vec<String>,
    language: String,
    stops: Vec<WireStop>,
    is_route_optimized: bool,
}

#[derive(Debug, Serialize)]
struct WireStop {
    coordinates: WireCoordinates,
    address: String,
}

#[derive(Debug, Serialize)]
struct WireCoordinates {
    lat: String,
    lng: String,
}

#[derive(Debug, Deserialize)]
struct QuotationEnvelope {
    data: WireQuotation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireQuotation {
    quotation_id: String,
    expires_at: Option<String>,
    price_breakdown: WirePrice,
    distance: Option<WireDistance>,
}

#[derive(Debug, Deserialize)]
struct WirePrice {
    total: String,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct WireDistance {
    value: String,
    unit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    errors: Option<Vec<WireError>>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    id: Option<String>,
    message: Option<String>,
}

impl ErrorEnvelope {
    fn first_error_id(&self) -> Option<&str> {
        self.errors
            .as_deref()
            .and_then(|errors| errors.first())
            .and_then(|e| e.id.as_deref())
    }

    fn detail<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.errors
            .as_deref()
            .and_then(|errors| errors.first())
            .and_then(|e| e.message.as_deref())
            .or(self.message.as_deref())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{Contact, QuotationRequest, Waypoint};
    use crate::domain::value_objects::{Coordinate, ServiceClass};

    fn credentials() -> ProviderCredentials {
        ProviderCredentials::new("key", "secret", "ID", "https://api.provider.test")
    }

    fn request(class: ServiceClass) -> QuotationRequest {
        QuotationRequest::new(
            Waypoint::new("Jl. Gudang No. 1", Some(Coordinate::new(-6.17, 106.82))).unwrap(),
            Waypoint::new("Jl. Rumah No. 2", Some(Coordinate::new(-6.24, 106.79))).unwrap(),
            class,
            None,
            false,
            Contact::new("Sari", "0812000111").unwrap(),
        )
    }

    mod payload {
        use super::*;

        #[test]
        fn car_is_remapped_to_sedan_on_the_wire() {
            let client = ProviderClient::new(credentials(), 8_000).unwrap();
            let payload = client.build_payload(&request(ServiceClass::Car)).unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(json["data"]["serviceType"], "SEDAN");
        }

        #[test]
        fn coordinates_are_sent_as_strings() {
            let client = ProviderClient::new(credentials(), 8_000).unwrap();
            let payload = client
                .build_payload(&request(ServiceClass::Motorcycle))
                .unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            let first = &json["data"]["stops"][0]["coordinates"];
            assert!(first["lat"].is_string());
            assert!(first["lng"].is_string());
            assert_eq!(first["lat"], "-6.17");
        }

        #[test]
        fn special_requests_stay_empty_even_with_toll() {
            let client = ProviderClient::new(credentials(), 8_000).unwrap();
            let toll_request = QuotationRequest::new(
                Waypoint::new("A", Some(Coordinate::new(-6.2, 106.8))).unwrap(),
                Waypoint::new("B", Some(Coordinate::new(-6.3, 106.9))).unwrap(),
                ServiceClass::Car,
                None,
                true,
                Contact::new("Sari", "0812000111").unwrap(),
            );
            let payload = client.build_payload(&toll_request).unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(json["data"]["specialRequests"], serde_json::json!([]));
        }

        #[test]
        fn unresolved_waypoint_is_an_error() {
            let client = ProviderClient::new(credentials(), 8_000).unwrap();
            let bad = QuotationRequest::new(
                Waypoint::new("A", None).unwrap(),
                Waypoint::new("B", Some(Coordinate::new(-6.3, 106.9))).unwrap(),
                ServiceClass::Van,
                None,
                false,
                Contact::new("Sari", "0812000111").unwrap(),
            );
            assert!(client.build_payload(&bad).is_err());
        }

        #[test]
        fn language_follows_market() {
            let client = ProviderClient::new(credentials(), 8_000).unwrap();
            let payload = client.build_payload(&request(ServiceClass::Van)).unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(json["data"]["language"], "id_ID");
        }
    }

    mod response_parsing {
        use super::*;

        #[test]
        fn maps_provider_fields() {
            let body = r#"{"data":{"quotationId":"Q-1","expiresAt":"2024-05-01T10:05:00Z",
                "priceBreakdown":{"total":"42000","currency":"IDR"},
                "distance":{"value":"5.2","unit":"km"}}}"#;
            let parsed = parse_quotation(body).unwrap();
            assert_eq!(parsed.quotation_ref, "Q-1");
            assert_eq!(parsed.total, Money::new(42_000));
            assert_eq!(parsed.currency, "IDR");
            assert!((parsed.distance.km() - 5.2).abs() < 1e-9);
            assert!(parsed.expires_at.is_some());
        }

        #[test]
        fn metre_distances_are_converted() {
            let body = r#"{"data":{"quotationId":"Q-2",
                "priceBreakdown":{"total":"9900.50","currency":"IDR"},
                "distance":{"value":"5200","unit":"m"}}}"#;
            let parsed = parse_quotation(body).unwrap();
            assert!((parsed.distance.km() - 5.2).abs() < 1e-9);
            assert_eq!(parsed.total, Money::new(9_901));
        }

        #[test]
        fn garbage_body_is_unknown() {
            assert!(matches!(
                parse_quotation("not json"),
                Err(ProviderError::Unknown { .. })
            ));
        }
    }

    mod classification {
        use super::*;

        #[test]
        fn structured_location_id_is_invalid_coordinates() {
            let body = r#"{"errors":[{"id":"ERR_INVALID_LOCATION","message":"stop 2 invalid"}]}"#;
            let err = classify_rejection(StatusCode::UNPROCESSABLE_ENTITY, body);
            assert!(matches!(err, ProviderError::InvalidCoordinates { .. }));
        }

        #[test]
        fn structured_market_id_is_invalid_market() {
            let body = r#"{"errors":[{"id":"ERR_INVALID_MARKET","message":"market ID disabled"}]}"#;
            let err = classify_rejection(StatusCode::FORBIDDEN, body);
            assert!(matches!(err, ProviderError::InvalidMarket { .. }));
        }

        #[test]
        fn five_xx_is_unavailable_regardless_of_body() {
            let body = r#"{"errors":[{"id":"ERR_INVALID_MARKET"}]}"#;
            let err = classify_rejection(StatusCode::SERVICE_UNAVAILABLE, body);
            assert!(matches!(err, ProviderError::Unavailable { .. }));
        }

        #[test]
        fn message_keywords_are_a_last_resort() {
            let body = r#"{"message":"unsupported market for account"}"#;
            let err = classify_rejection(StatusCode::BAD_REQUEST, body);
            assert!(matches!(err, ProviderError::InvalidMarket { .. }));
        }

        #[test]
        fn unrecognized_rejections_are_unknown() {
            let body = r#"{"errors":[{"id":"ERR_RATE_LIMIT","message":"slow down"}]}"#;
            let err = classify_rejection(StatusCode::TOO_MANY_REQUESTS, body);
            assert!(matches!(err, ProviderError::Unknown { .. }));
        }
    }
}
