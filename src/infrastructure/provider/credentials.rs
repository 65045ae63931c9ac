//! # Provider Credentials
//!
//! Immutable provider account configuration.
//!
//! Loaded once at process start and injected into the client at
//! construction; no call site reads ambient environment state. When the
//! key or secret is absent at startup the client is simply never built and
//! the engine runs in permanent fallback mode.

use serde::Deserialize;

/// Credentials and endpoint for the delivery provider account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderCredentials {
    /// Public API key, sent in the `Authorization` header.
    pub api_key: String,
    /// Shared secret used to sign each request; never sent on the wire.
    pub api_secret: String,
    /// Provider market/region code (e.g. `ID`), sent in the `Market`
    /// header.
    pub market: String,
    /// Base URL of the provider API.
    pub base_url: String,
}

impl ProviderCredentials {
    /// Creates credentials from already-validated parts.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        market: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            market: market.into(),
            base_url: base_url.into(),
        }
    }

    /// BCP 47-ish language tag for the configured market, sent in the
    /// request body.
    #[must_use]
    pub fn language(&self) -> String {
        match self.market.to_uppercase().as_str() {
            "ID" => "id_ID".to_string(),
            other => format!("en_{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indonesian_market_gets_indonesian_language() {
        let creds = ProviderCredentials::new("k", "s", "ID", "https://api.example.com");
        assert_eq!(creds.language(), "id_ID");
    }

    #[test]
    fn other_markets_default_to_english() {
        let creds = ProviderCredentials::new("k", "s", "SG", "https://api.example.com");
        assert_eq!(creds.language(), "en_SG");
    }
}
