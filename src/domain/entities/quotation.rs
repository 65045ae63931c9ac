//! # Quotation Entity
//!
//! A priced, time-boxed delivery-fare offer.
//!
//! A [`Quotation`] is created per request and never persisted or updated;
//! a new request always yields a new quotation. Every quotation, whether
//! backed by the provider or computed locally, expires exactly five
//! minutes after creation.
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::entities::quotation::{PriceBreakdown, Quotation};
//! use delivery_rfq::domain::value_objects::{DistanceKm, Money, ServiceClass};
//!
//! let price = PriceBreakdown::new(
//!     Money::new(9_200),
//!     Money::new(2_300),
//!     Money::ZERO,
//!     Money::new(14_500),
//! );
//! let quotation = Quotation::issue(ServiceClass::Motorcycle, DistanceKm::new(5.0), price, true);
//!
//! assert!(quotation.is_mock());
//! assert!(!quotation.is_expired());
//! ```

use crate::domain::value_objects::money::CURRENCY;
use crate::domain::value_objects::{DistanceKm, Money, QuotationId, ServiceClass, Timestamp};
use serde::Serialize;
use std::fmt;

/// Seconds a quotation stays valid after creation.
pub const QUOTATION_TTL_SECS: i64 = 300;

/// The disclosed charges of a quotation.
///
/// The per-class margin is folded into `total` but has no field here:
/// this type is the wire shape the caller sees, and the margin is
/// deliberately not disclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Flag-fall (or, for provider-backed quotes, the provider fare).
    base: Money,
    /// Charge for distance beyond the included kilometres.
    extra_distance_charge: Money,
    /// Toll surcharge; always disclosed, non-zero only for car + toll.
    toll_surcharge: Money,
    /// Final amount, always a multiple of 100 rupiah.
    total: Money,
    /// ISO 4217 currency code.
    currency: &'static str,
}

impl PriceBreakdown {
    /// Assembles a breakdown from already-composed amounts.
    #[must_use]
    pub const fn new(
        base: Money,
        extra_distance_charge: Money,
        toll_surcharge: Money,
        total: Money,
    ) -> Self {
        Self {
            base,
            extra_distance_charge,
            toll_surcharge,
            total,
            currency: CURRENCY,
        }
    }

    /// Returns the base charge.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> Money {
        self.base
    }

    /// Returns the extra-distance charge.
    #[inline]
    #[must_use]
    pub const fn extra_distance_charge(&self) -> Money {
        self.extra_distance_charge
    }

    /// Returns the toll surcharge.
    #[inline]
    #[must_use]
    pub const fn toll_surcharge(&self) -> Money {
        self.toll_surcharge
    }

    /// Returns the final amount.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> &'static str {
        self.currency
    }
}

/// A priced, time-boxed quotation for one origin/destination/class
/// combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quotation {
    id: QuotationId,
    service_class: ServiceClass,
    distance: DistanceKm,
    price: PriceBreakdown,
    created_at: Timestamp,
    expires_at: Timestamp,
    is_mock: bool,
    note: Option<String>,
    provider_ref: Option<String>,
}

impl Quotation {
    /// Issues a new quotation, time-boxed to [`QUOTATION_TTL_SECS`] from
    /// the moment of creation.
    #[must_use]
    pub fn issue(
        service_class: ServiceClass,
        distance: DistanceKm,
        price: PriceBreakdown,
        is_mock: bool,
    ) -> Self {
        let created_at = Timestamp::now();
        Self {
            id: QuotationId::new_v4(),
            service_class,
            distance,
            price,
            created_at,
            expires_at: created_at.add_secs(QUOTATION_TTL_SECS),
            is_mock,
            note: None,
            provider_ref: None,
        }
    }

    /// Attaches an explanatory note (e.g. why the fallback path priced
    /// this quotation).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Attaches the provider's own quotation reference.
    #[must_use]
    pub fn with_provider_ref(mut self, provider_ref: impl Into<String>) -> Self {
        self.provider_ref = Some(provider_ref.into());
        self
    }

    /// Returns the quotation id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> QuotationId {
        self.id
    }

    /// Returns the vehicle class this quotation was priced for.
    #[inline]
    #[must_use]
    pub const fn service_class(&self) -> ServiceClass {
        self.service_class
    }

    /// Returns the estimated delivery distance.
    #[inline]
    #[must_use]
    pub const fn distance(&self) -> DistanceKm {
        self.distance
    }

    /// Returns the disclosed price breakdown.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> &PriceBreakdown {
        &self.price
    }

    /// Returns when this quotation was created.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this quotation stops being honored.
    #[inline]
    #[must_use]
    pub const fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Returns true if this quotation was priced locally rather than by
    /// the provider.
    #[inline]
    #[must_use]
    pub const fn is_mock(&self) -> bool {
        self.is_mock
    }

    /// Returns the explanatory note, if any.
    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the provider's quotation reference, if any.
    #[inline]
    #[must_use]
    pub fn provider_ref(&self) -> Option<&str> {
        self.provider_ref.as_deref()
    }

    /// Returns true if the quotation's validity window has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_past()
    }
}

impl fmt::Display for Quotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quotation({} {} over {} for {})",
            self.id,
            self.price.total(),
            self.distance,
            self.service_class
        )
    }
}
