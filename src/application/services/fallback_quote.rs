//! # Fallback Quotation Service
//!
//! Pure, network-free quotation pricing.
//!
//! Keeps checkout functional whenever the provider is unreachable,
//! misconfigured, or rejects the request for a recoverable reason. The
//! price is composed from the same fare schedule, margin, and surcharge
//! the provider path uses, with zero I/O.
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::application::services::fallback_quote;
//! use delivery_rfq::domain::value_objects::{DistanceKm, ServiceClass};
//!
//! let quotation = fallback_quote::quote(
//!     ServiceClass::Motorcycle,
//!     DistanceKm::new(5.0),
//!     false,
//! ).unwrap();
//!
//! assert!(quotation.is_mock());
//! assert_eq!(quotation.price().total().amount(), 14_500);
//! ```

use crate::domain::entities::{PriceBreakdown, Quotation};
use crate::domain::errors::DomainResult;
use crate::domain::services::{fare, pricing};
use crate::domain::value_objects::{DistanceKm, ServiceClass};

/// Computes the fallback price breakdown.
///
/// Referentially transparent: identical inputs produce an identical
/// breakdown on every invocation, which is what makes fallback pricing
/// idempotent and testable.
///
/// # Errors
///
/// Returns a domain error only on arithmetic overflow, which real fares
/// never reach.
pub fn compute_breakdown(
    class: ServiceClass,
    distance: DistanceKm,
    toll_requested: bool,
) -> DomainResult<PriceBreakdown> {
    let parts = fare::base_fare(class, distance);
    pricing::compose_breakdown(class, parts.base, parts.extra_distance_charge, toll_requested)
}

/// Issues a locally-priced quotation (`is_mock = true`) with the standard
/// five-minute expiry.
///
/// # Errors
///
/// Returns a domain error only on arithmetic overflow.
pub fn quote(
    class: ServiceClass,
    distance: DistanceKm,
    toll_requested: bool,
) -> DomainResult<Quotation> {
    let breakdown = compute_breakdown(class, distance, toll_requested)?;
    Ok(Quotation::issue(class, distance, breakdown, true))
}
