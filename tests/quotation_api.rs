//! End-to-end scenario tests against the REST router.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use delivery_rfq::api::rest::{create_router, AppState};
use delivery_rfq::application::services::{
    QuotationOrchestrator, QuotePolicy, WebhookStatusMapper,
};
use delivery_rfq::config::{PickupConfig, StoreLocation};
use delivery_rfq::infrastructure::persistence::InMemoryOrderStore;
use delivery_rfq::infrastructure::provider::{ProviderClient, ProviderCredentials};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pickup() -> PickupConfig {
    PickupConfig {
        standard: StoreLocation {
            address: "Gudang Utama, Tebet".to_string(),
            lat: -6.2297,
            lng: 106.8413,
        },
        express: StoreLocation {
            address: "Gudang Ekspres, Setiabudi".to_string(),
            lat: -6.2196,
            lng: 106.8301,
        },
    }
}

fn fallback_only_router() -> axum::Router {
    let orchestrator = Arc::new(QuotationOrchestrator::new(
        None,
        None,
        QuotePolicy::default(),
    ));
    let store = Arc::new(InMemoryOrderStore::new());
    let state = Arc::new(AppState {
        orchestrator,
        webhook_mapper: Arc::new(WebhookStatusMapper::new(store)),
        pickup: pickup(),
    });
    create_router(state)
}

async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn quotation_body(service_type: &str, lat: f64, lng: f64) -> Value {
    json!({
        "deliveryAddress": "Jl. Rumah No. 2, Jakarta",
        "recipientName": "Sari",
        "recipientPhone": "0812000111",
        "serviceType": service_type,
        "coordinates": { "lat": lat, "lng": lng }
    })
}

#[tokio::test]
async fn out_of_area_coordinates_are_rejected_with_400() {
    // Scenario: a North-Atlantic drop-off never reaches pricing.
    let (status, body) = post_json(
        fallback_only_router(),
        "/api/v1/quotations",
        quotation_body("MOTORCYCLE", 40.0, -70.0),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("errorCode").is_none());
}

#[tokio::test]
async fn missing_credentials_produce_a_mock_quotation() {
    // Scenario: no provider configured, valid Jakarta coordinates.
    let (status, body) = post_json(
        fallback_only_router(),
        "/api/v1/quotations",
        quotation_body("MOTORCYCLE", -6.2088, 106.8456),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["isMock"], true);
    assert_eq!(body["quotation"]["price"]["total"].as_i64().unwrap() % 100, 0);
    assert_eq!(body["quotation"]["price"]["currency"], "IDR");

    let text = body["quotation"]["distance"]["text"].as_str().unwrap();
    let (number, unit) = text.split_once(' ').unwrap();
    assert_eq!(unit, "km");
    assert_eq!(number.split('.').nth(1).map(str::len), Some(1));
}

#[tokio::test]
async fn car_with_toll_disclosed_in_the_response() {
    let mut body = quotation_body("SEDAN", -6.2088, 106.8456);
    body["useTollRoad"] = json!(true);

    let (status, response) =
        post_json(fallback_only_router(), "/api/v1/quotations", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["quotation"]["hasTollRoad"], true);
    assert_eq!(response["quotation"]["tollCharge"]["value"], "25000");
    assert_eq!(response["quotation"]["serviceType"], "CAR");
}

#[tokio::test]
async fn distance_beyond_the_cap_returns_the_structured_code() {
    // Surabaya is hundreds of km from the Jakarta pickup.
    let (status, body) = post_json(
        fallback_only_router(),
        "/api/v1/quotations",
        quotation_body("TRUCK", -7.2575, 112.7521),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "DISTANCE_EXCEEDED");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn provider_market_rejection_still_returns_a_priced_quote() {
    // Scenario: the provider rejects our market; checkout still gets a
    // price, marked as mock, with an explanatory note.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/quotations"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{ "id": "ERR_INVALID_MARKET", "message": "market not enabled" }]
        })))
        .mount(&server)
        .await;

    let client = ProviderClient::new(
        ProviderCredentials::new("key", "secret", "ID", server.uri()),
        5_000,
    )
    .unwrap();
    let orchestrator = Arc::new(QuotationOrchestrator::new(
        Some(Arc::new(client)),
        None,
        QuotePolicy::default(),
    ));
    let store = Arc::new(InMemoryOrderStore::new());
    let router = create_router(Arc::new(AppState {
        orchestrator,
        webhook_mapper: Arc::new(WebhookStatusMapper::new(store)),
        pickup: pickup(),
    }));

    let (status, body) = post_json(
        router,
        "/api/v1/quotations",
        quotation_body("MOTORCYCLE", -6.2088, 106.8456),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["isMock"], true);
    assert!(body["note"].as_str().unwrap().len() > 10);
}

#[tokio::test]
async fn provider_success_flows_through_with_margin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/quotations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "quotationId": "QT-9",
                "expiresAt": "2030-01-01T00:05:00Z",
                "priceBreakdown": { "total": "40000", "currency": "IDR" },
                "distance": { "value": "4.8", "unit": "km" }
            }
        })))
        .mount(&server)
        .await;

    let client = ProviderClient::new(
        ProviderCredentials::new("key", "secret", "ID", server.uri()),
        5_000,
    )
    .unwrap();
    let orchestrator = Arc::new(QuotationOrchestrator::new(
        Some(Arc::new(client)),
        None,
        QuotePolicy::default(),
    ));
    let store = Arc::new(InMemoryOrderStore::new());
    let router = create_router(Arc::new(AppState {
        orchestrator,
        webhook_mapper: Arc::new(WebhookStatusMapper::new(store)),
        pickup: pickup(),
    }));

    let (status, body) = post_json(
        router,
        "/api/v1/quotations",
        quotation_body("SEDAN", -6.2088, 106.8456),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("isMock").is_none());
    // 40000 provider fare + 5000 undisclosed car margin.
    assert_eq!(body["quotation"]["price"]["total"], 45_000);
}

#[tokio::test]
async fn webhook_is_acknowledged_and_merged() {
    let router = fallback_only_router();
    let (status, body) = post_json(
        router,
        "/api/v1/webhooks/provider",
        json!({
            "type": "DRIVER_ASSIGNED",
            "orderId": "LM-55",
            "driverDetails": { "name": "Budi", "phone": "0813", "plateNumber": "B 1 X" },
            "timestamp": 1_700_000_000_000_i64
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn unknown_vehicle_class_is_rejected() {
    let (status, body) = post_json(
        fallback_only_router(),
        "/api/v1/quotations",
        quotation_body("HOVERCRAFT", -6.2088, 106.8456),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = fallback_only_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
