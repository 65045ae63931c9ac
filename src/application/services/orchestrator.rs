//! # Quotation Orchestrator
//!
//! The top-level quotation control flow.
//!
//! ```text
//! VALIDATE_INPUT → RESOLVE_COORDINATES
//!     → (credentials present? ATTEMPT_PROVIDER : FALLBACK_QUOTE)
//!     → DONE | REJECTED
//! ```
//!
//! Rejections are reserved for input-validity and policy failures; every
//! recoverable provider failure degrades to the local fallback price so
//! checkout stays functional. The distance cap is checked before the
//! provider is attempted and is never masked by a fallback price; a
//! quote beyond the serviceable range would be misleading.

use crate::application::error::{QuotationError, QuotationResult};
use crate::application::services::fallback_quote;
use crate::domain::entities::{Quotation, QuotationRequest, Waypoint};
use crate::domain::services::{distance, pricing};
use crate::domain::value_objects::{Coordinate, DistanceKm, Money};
use crate::infrastructure::geocoding::AddressResolver;
use crate::infrastructure::provider::{ProviderError, ProviderQuotation, QuotationProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Customer-facing message for coordinates outside the service area.
const OUT_OF_AREA_MESSAGE: &str = "Lokasi berada di luar area layanan pengiriman";

/// Customer-facing message when a waypoint has no coordinate and no
/// resolver is available.
const COORDINATES_REQUIRED_MESSAGE: &str = "Titik koordinat alamat belum tersedia";

/// Customer-facing message for the serviceability cap.
const DISTANCE_EXCEEDED_MESSAGE: &str = "Jarak pengiriman melebihi batas layanan";

/// Customer-facing message when the provider rejects the coordinates.
const PROVIDER_REJECTED_LOCATION_MESSAGE: &str = "Lokasi pengiriman tidak valid";

/// Note attached to every fallback quotation.
const FALLBACK_NOTE: &str =
    "Estimasi harga dihitung secara lokal karena layanan kurir sedang tidak tersedia";

/// Policy knobs for the quotation flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotePolicy {
    /// Maximum serviceable distance; beyond it the request is rejected
    /// with `DISTANCE_EXCEEDED`, uniform across service classes.
    pub max_distance_km: f64,
    /// Budget for one provider attempt, including connect time.
    pub provider_timeout_ms: u64,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            max_distance_km: 70.0,
            provider_timeout_ms: 8_000,
        }
    }
}

/// Orchestrates validation, resolution, the provider attempt, and the
/// fallback policy into one unified quotation.
pub struct QuotationOrchestrator {
    provider: Option<Arc<dyn QuotationProvider>>,
    resolver: Option<Arc<dyn AddressResolver>>,
    policy: QuotePolicy,
}

impl QuotationOrchestrator {
    /// Creates an orchestrator.
    ///
    /// `provider` is `None` when credentials were absent at startup; the
    /// engine then runs in permanent fallback mode and never attempts the
    /// provider. `resolver` is the optional geocoding collaborator for
    /// address-only waypoints.
    #[must_use]
    pub fn new(
        provider: Option<Arc<dyn QuotationProvider>>,
        resolver: Option<Arc<dyn AddressResolver>>,
        policy: QuotePolicy,
    ) -> Self {
        Self {
            provider,
            resolver,
            policy,
        }
    }

    /// Runs the full quotation flow for one request.
    ///
    /// # Errors
    ///
    /// - [`QuotationError::Validation`] for out-of-area or unresolvable
    ///   coordinates (including coordinates the provider rejected).
    /// - [`QuotationError::PolicyRejected`] when the distance cap is
    ///   exceeded.
    /// - [`QuotationError::Unexpected`] for uncategorized failures.
    #[tracing::instrument(skip_all, fields(class = %request.service_class()))]
    pub async fn quote(&self, request: QuotationRequest) -> QuotationResult<Quotation> {
        let (request, origin, destination) = self.resolve_and_validate(request).await?;

        let estimated = distance::haversine_km(origin, destination);
        if estimated.km() > self.policy.max_distance_km {
            tracing::info!(distance_km = estimated.km(), "distance cap exceeded");
            return Err(QuotationError::distance_exceeded(DISTANCE_EXCEEDED_MESSAGE));
        }

        let Some(provider) = &self.provider else {
            tracing::debug!("no provider credentials configured, quoting locally");
            return self.fallback(&request, estimated);
        };

        let budget = Duration::from_millis(self.policy.provider_timeout_ms);
        match timeout(budget, provider.request_quotation(&request)).await {
            Ok(Ok(provider_quote)) => self.accept_provider_quote(&request, estimated, provider_quote),
            Ok(Err(ProviderError::InvalidCoordinates { message })) => {
                tracing::warn!(detail = %message, "provider rejected coordinates");
                Err(QuotationError::validation(
                    PROVIDER_REJECTED_LOCATION_MESSAGE,
                ))
            }
            Ok(Err(error)) => {
                // InvalidMarket, Unavailable, or Unknown are all recoverable.
                tracing::warn!(error = %error, "provider failed, quoting locally");
                self.fallback(&request, estimated)
            }
            Err(_elapsed) => {
                // A hung provider degrades exactly like an unavailable one.
                tracing::warn!(
                    budget_ms = self.policy.provider_timeout_ms,
                    "provider attempt timed out, quoting locally"
                );
                self.fallback(&request, estimated)
            }
        }
    }

    /// Resolves address-only waypoints and validates both coordinates
    /// against the service area.
    async fn resolve_and_validate(
        &self,
        request: QuotationRequest,
    ) -> QuotationResult<(QuotationRequest, Coordinate, Coordinate)> {
        let origin = self.resolve_waypoint(request.origin()).await?;
        let destination = self.resolve_waypoint(request.destination()).await?;

        for coordinate in [origin.1, destination.1] {
            if !coordinate.is_within_service_area() {
                tracing::info!(%coordinate, "coordinate outside service area");
                return Err(QuotationError::validation(OUT_OF_AREA_MESSAGE));
            }
        }

        let request = request.with_origin(origin.0).with_destination(destination.0);
        Ok((request, origin.1, destination.1))
    }

    async fn resolve_waypoint(
        &self,
        waypoint: &Waypoint,
    ) -> QuotationResult<(Waypoint, Coordinate)> {
        if let Some(coordinate) = waypoint.coordinate() {
            return Ok((waypoint.clone(), coordinate));
        }

        let Some(resolver) = &self.resolver else {
            return Err(QuotationError::validation(COORDINATES_REQUIRED_MESSAGE));
        };

        let coordinate = resolver
            .resolve(waypoint.address())
            .await
            .map_err(|_| QuotationError::validation(COORDINATES_REQUIRED_MESSAGE))?;

        Ok((waypoint.clone().with_coordinate(coordinate), coordinate))
    }

    /// Applies margin and surcharge to a provider fare and issues the
    /// canonical quotation.
    fn accept_provider_quote(
        &self,
        request: &QuotationRequest,
        estimated: DistanceKm,
        provider_quote: ProviderQuotation,
    ) -> QuotationResult<Quotation> {
        let breakdown = pricing::compose_breakdown(
            request.service_class(),
            provider_quote.total,
            Money::ZERO,
            request.toll_requested(),
        )?;

        // Prefer the provider's routed distance when it reported one.
        let distance = if provider_quote.distance.km() > 0.0 {
            provider_quote.distance
        } else {
            estimated
        };

        Ok(
            Quotation::issue(request.service_class(), distance, breakdown, false)
                .with_provider_ref(provider_quote.quotation_ref),
        )
    }

    fn fallback(
        &self,
        request: &QuotationRequest,
        estimated: DistanceKm,
    ) -> QuotationResult<Quotation> {
        let quotation = fallback_quote::quote(
            request.service_class(),
            estimated,
            request.toll_requested(),
        )?;
        Ok(quotation.with_note(FALLBACK_NOTE))
    }
}
