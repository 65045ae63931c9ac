//! # Pricing Composition
//!
//! The single place the disclosed charges and the undisclosed margin meet.
//!
//! Both quotation paths (provider-backed and local fallback) hand their
//! base figures to [`compose_breakdown`], so the margin and the toll
//! surcharge are applied exactly once and identically regardless of where
//! the fare came from. The composed total is rounded to the nearest 100
//! rupiah, which keeps the `total % 100 == 0` invariant even for provider
//! fares that arrive unrounded.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::entities::quotation::PriceBreakdown;
use crate::domain::services::{markup, surcharge};
use crate::domain::value_objects::{Money, ServiceClass};

/// Composes a customer-facing price breakdown from a base fare.
///
/// `base` and `extra_distance_charge` are the disclosed fare components
/// (for a provider fare, the provider total goes in `base` and `extra` is
/// zero). The toll surcharge is resolved here and disclosed; the class
/// margin is folded into the total and never itemized.
///
/// # Errors
///
/// Returns [`DomainError::AmountOverflow`] if any addition overflows.
pub fn compose_breakdown(
    class: ServiceClass,
    base: Money,
    extra_distance_charge: Money,
    toll_requested: bool,
) -> DomainResult<PriceBreakdown> {
    let toll = surcharge::toll_surcharge(class, toll_requested);

    let disclosed = base
        .checked_add(extra_distance_charge)
        .and_then(|s| s.checked_add(toll))
        .ok_or(DomainError::AmountOverflow("summing disclosed charges"))?;

    let with_margin = markup::apply_margin(class, disclosed)?;
    let total = Money::from_f64_rounded(with_margin.amount() as f64);

    Ok(PriceBreakdown::new(base, extra_distance_charge, toll, total))
}
