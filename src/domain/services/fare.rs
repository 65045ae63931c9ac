//! # Fare Calculator
//!
//! Table-driven base fare per vehicle class.
//!
//! A single [`Tariff`] table serves every pricing path: the provider-backed
//! path never uses it (the provider prices its own fare), but the fallback
//! path and any future repricing all read the same rows, so there is exactly
//! one source of truth for local fares.
//!
//! Motorcycle and car tariffs include a number of free kilometres in the
//! base; van and truck charge the per-km rate over the entire distance
//! (encoded as zero included kilometres).
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::services::fare::base_fare;
//! use delivery_rfq::domain::value_objects::{DistanceKm, Money, ServiceClass};
//!
//! let parts = base_fare(ServiceClass::Motorcycle, DistanceKm::new(5.0));
//! assert_eq!(parts.base, Money::new(9_200));
//! assert_eq!(parts.extra_distance_charge, Money::new(2_300));
//! assert_eq!(parts.total(), Money::new(11_500));
//! ```

use crate::domain::value_objects::{DistanceKm, Money, ServiceClass};

/// One row of the fare schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// Flag-fall charged for every delivery of this class.
    pub base: Money,
    /// Kilometres already covered by the base charge.
    pub included_km: f64,
    /// Rupiah charged per kilometre beyond the included distance.
    pub per_km: i64,
}

/// Returns the tariff row for a vehicle class.
#[must_use]
pub const fn tariff(class: ServiceClass) -> Tariff {
    match class {
        ServiceClass::Motorcycle => Tariff {
            base: Money::new(9_200),
            included_km: 4.0,
            per_km: 2_300,
        },
        ServiceClass::Car => Tariff {
            base: Money::new(37_000),
            included_km: 3.0,
            per_km: 2_500,
        },
        ServiceClass::Van => Tariff {
            base: Money::new(25_000),
            included_km: 0.0,
            per_km: 4_500,
        },
        ServiceClass::Truck => Tariff {
            base: Money::new(35_000),
            included_km: 0.0,
            per_km: 6_000,
        },
    }
}

/// A base fare split into its disclosed components.
///
/// Both parts are multiples of 100 rupiah, so their sum is too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareParts {
    /// The tariff's flag-fall.
    pub base: Money,
    /// Charge for distance beyond the included kilometres.
    pub extra_distance_charge: Money,
}

impl FareParts {
    /// Sum of the parts.
    ///
    /// Saturates at `i64::MAX`; real fares are nowhere near that range.
    #[must_use]
    pub fn total(&self) -> Money {
        self.base
            .checked_add(self.extra_distance_charge)
            .unwrap_or(Money::new(i64::MAX))
    }
}

/// Computes the base fare for a class and distance, before margin and
/// surcharge.
///
/// Monotonically non-decreasing in distance for a fixed class, and the
/// extra-distance charge is rounded to the nearest 100 rupiah.
#[must_use]
pub fn base_fare(class: ServiceClass, distance: DistanceKm) -> FareParts {
    let t = tariff(class);
    let chargeable_km = (distance.km() - t.included_km).max(0.0);
    let extra = Money::from_f64_rounded(t.per_km as f64 * chargeable_km);

    FareParts {
        base: t.base,
        extra_distance_charge: extra,
    }
}
