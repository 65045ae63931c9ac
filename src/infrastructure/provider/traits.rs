//! # Quotation Provider Port
//!
//! Port definition for the external delivery provider.
//!
//! The orchestrator talks to this trait, never to a concrete HTTP client,
//! so tests can substitute a scripted provider and the fallback policy can
//! be exercised without a network.

use crate::domain::entities::QuotationRequest;
use crate::domain::value_objects::{DistanceKm, Money, Timestamp};
use crate::infrastructure::provider::error::ProviderResult;
use async_trait::async_trait;

/// A quotation as priced by the provider.
///
/// Margin and surcharge are *not* applied here; that happens uniformly
/// downstream, so provider-backed and fallback quotes go through the same
/// composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuotation {
    /// The provider's own quotation reference.
    pub quotation_ref: String,
    /// The provider's fare, before local margin and surcharge.
    pub total: Money,
    /// Currency the provider quoted in.
    pub currency: String,
    /// Routed distance as reported by the provider.
    pub distance: DistanceKm,
    /// The provider's own expiry; informational only; the canonical
    /// quotation is time-boxed locally.
    pub expires_at: Option<Timestamp>,
}

/// Port for requesting a quotation from the delivery provider.
///
/// Implementations must be stateless per call. The request's waypoints are
/// guaranteed to carry validated coordinates by the time this is invoked.
#[async_trait]
pub trait QuotationProvider: Send + Sync {
    /// Requests a priced quotation from the provider.
    ///
    /// # Errors
    ///
    /// Returns a classified
    /// [`ProviderError`](crate::infrastructure::provider::ProviderError)
    /// on rejection or transport failure.
    async fn request_quotation(
        &self,
        request: &QuotationRequest,
    ) -> ProviderResult<ProviderQuotation>;
}
