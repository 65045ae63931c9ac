//! Service entry point: configuration, wiring, and the HTTP server.

use anyhow::Result;
use delivery_rfq::api::rest::{create_router, AppState};
use delivery_rfq::application::services::{QuotationOrchestrator, WebhookStatusMapper};
use delivery_rfq::config::AppConfig;
use delivery_rfq::infrastructure::persistence::InMemoryOrderStore;
use delivery_rfq::infrastructure::provider::{ProviderClient, QuotationProvider};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    let provider: Option<Arc<dyn QuotationProvider>> = match config.provider.clone() {
        Some(credentials) => {
            let client = ProviderClient::new(credentials, config.policy.provider_timeout_ms)?;
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("provider credentials missing, running in permanent fallback mode");
            None
        }
    };

    let orchestrator = Arc::new(QuotationOrchestrator::new(
        provider,
        None,
        config.quote_policy(),
    ));
    let order_store = Arc::new(InMemoryOrderStore::new());
    let webhook_mapper = Arc::new(WebhookStatusMapper::new(order_store));

    let state = Arc::new(AppState {
        orchestrator,
        webhook_mapper,
        pickup: config.pickup.clone(),
    });

    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.server.port)).await?;
    tracing::info!(port = config.server.port, "delivery quotation engine listening");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
