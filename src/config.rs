//! # Configuration
//!
//! Environment-sourced configuration, read once at process start.
//!
//! Variables use the `DELIVERY` prefix with `__` as the section separator,
//! e.g. `DELIVERY__PROVIDER__API_KEY` or
//! `DELIVERY__POLICY__MAX_DISTANCE_KM`. A `.env` file is honored in
//! development via `dotenvy`.
//!
//! Provider credentials are optional by design: when the key or secret is
//! absent the engine runs in permanent fallback mode and never attempts
//! the provider.

use crate::application::services::QuotePolicy;
use crate::domain::errors::DomainResult;
use crate::domain::entities::Waypoint;
use crate::domain::value_objects::Coordinate;
use crate::infrastructure::provider::ProviderCredentials;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// A configured store pickup point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreLocation {
    /// Human-readable pickup address.
    pub address: String,
    /// Pickup latitude.
    pub lat: f64,
    /// Pickup longitude.
    pub lng: f64,
}

impl StoreLocation {
    /// Returns the pickup coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Builds the origin waypoint for a quotation request.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configured address is blank.
    pub fn waypoint(&self) -> DomainResult<Waypoint> {
        Waypoint::new(self.address.clone(), Some(self.coordinate()))
    }
}

/// Pickup points per fulfilment channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PickupConfig {
    /// Standard-channel store.
    pub standard: StoreLocation,
    /// Express-channel store.
    pub express: StoreLocation,
}

impl PickupConfig {
    /// Selects the pickup point for a channel.
    #[must_use]
    pub const fn for_channel(&self, express: bool) -> &StoreLocation {
        if express { &self.express } else { &self.standard }
    }
}

/// Policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PolicyConfig {
    /// Maximum serviceable distance in kilometres.
    pub max_distance_km: f64,
    /// Provider attempt budget in milliseconds.
    pub provider_timeout_ms: u64,
}

/// HTTP server settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Port to bind on.
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawProvider {
    api_key: String,
    api_secret: String,
    market: String,
    base_url: String,
}

impl RawProvider {
    /// Credentials exist only when every required part is present;
    /// otherwise the engine stays in fallback mode.
    fn into_credentials(self) -> Option<ProviderCredentials> {
        if self.api_key.is_empty() || self.api_secret.is_empty() || self.base_url.is_empty() {
            return None;
        }
        Some(ProviderCredentials::new(
            self.api_key,
            self.api_secret,
            self.market,
            self.base_url,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    provider: RawProvider,
    pickup: PickupConfig,
    policy: PolicyConfig,
    server: ServerConfig,
}

/// The full engine configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Provider credentials; `None` means permanent fallback mode.
    pub provider: Option<ProviderCredentials>,
    /// Store pickup points.
    pub pickup: PickupConfig,
    /// Policy knobs.
    pub policy: PolicyConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable cannot be parsed into its
    /// typed field.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("provider.api_key", "")?
            .set_default("provider.api_secret", "")?
            .set_default("provider.market", "ID")?
            .set_default("provider.base_url", "")?
            .set_default("pickup.standard.address", "Gudang Utama, Tebet, Jakarta Selatan")?
            .set_default("pickup.standard.lat", -6.2297)?
            .set_default("pickup.standard.lng", 106.8413)?
            .set_default("pickup.express.address", "Gudang Ekspres, Setiabudi, Jakarta Selatan")?
            .set_default("pickup.express.lat", -6.2196)?
            .set_default("pickup.express.lng", 106.8301)?
            .set_default("policy.max_distance_km", 70.0)?
            .set_default("policy.provider_timeout_ms", 8_000_i64)?
            .set_default("server.port", 8080_i64)?
            .add_source(Environment::with_prefix("DELIVERY").separator("__"))
            .build()?;

        let raw: RawConfig = settings.try_deserialize()?;

        Ok(Self {
            provider: raw.provider.into_credentials(),
            pickup: raw.pickup,
            policy: raw.policy,
            server: raw.server,
        })
    }

    /// Returns the orchestrator policy derived from configuration.
    #[must_use]
    pub const fn quote_policy(&self) -> QuotePolicy {
        QuotePolicy {
            max_distance_km: self.policy.max_distance_km,
            provider_timeout_ms: self.policy.provider_timeout_ms,
        }
    }
}
