//! # Markup Engine
//!
//! Fixed per-class margin folded into every quoted total.
//!
//! The margin is a pure function of the service class and is applied
//! exactly once per quotation, identically on the provider-backed and
//! fallback paths. It is never itemized to the caller: the
//! [`UndisclosedMargin`] type implements neither `Serialize` nor
//! `Deserialize`, so it cannot travel on any wire shape by accident.
//!
//! Every application emits one audit entry on the `reconciliation` tracing
//! target carrying the class, the margin amount, and the resulting total.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, ServiceClass};

/// A margin amount that is deliberately not serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndisclosedMargin(Money);

impl UndisclosedMargin {
    /// Returns the margin amount.
    ///
    /// Only pricing composition and reconciliation tests should need this.
    #[inline]
    #[must_use]
    pub const fn amount(self) -> Money {
        self.0
    }
}

/// Returns the fixed margin for a vehicle class.
#[must_use]
pub const fn class_margin(class: ServiceClass) -> UndisclosedMargin {
    let amount = match class {
        ServiceClass::Motorcycle => 3_000,
        ServiceClass::Car => 5_000,
        ServiceClass::Van | ServiceClass::Truck => 0,
    };
    UndisclosedMargin(Money::new(amount))
}

/// Adds the class margin to a subtotal and records the reconciliation
/// audit entry.
///
/// # Errors
///
/// Returns [`DomainError::AmountOverflow`] if the addition overflows.
pub fn apply_margin(class: ServiceClass, subtotal: Money) -> DomainResult<Money> {
    let margin = class_margin(class);
    let total = subtotal
        .checked_add(margin.amount())
        .ok_or(DomainError::AmountOverflow("applying class margin"))?;

    tracing::info!(
        target: "reconciliation",
        class = %class,
        margin = margin.amount().amount(),
        total = total.amount(),
        "margin applied"
    );

    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn margin_table() {
        assert_eq!(
            class_margin(ServiceClass::Motorcycle).amount(),
            Money::new(3_000)
        );
        assert_eq!(class_margin(ServiceClass::Car).amount(), Money::new(5_000));
        assert_eq!(class_margin(ServiceClass::Van).amount(), Money::ZERO);
        assert_eq!(class_margin(ServiceClass::Truck).amount(), Money::ZERO);
    }

    #[test]
    fn van_and_truck_margins_are_equal() {
        assert_eq!(
            class_margin(ServiceClass::Van),
            class_margin(ServiceClass::Truck)
        );
    }

    #[test]
    fn apply_margin_adds_the_class_constant() {
        let total = apply_margin(ServiceClass::Motorcycle, Money::new(11_500)).unwrap();
        assert_eq!(total, Money::new(14_500));

        let total = apply_margin(ServiceClass::Van, Money::new(34_000)).unwrap();
        assert_eq!(total, Money::new(34_000));
    }

    #[test]
    fn apply_margin_is_deterministic() {
        let a = apply_margin(ServiceClass::Car, Money::new(42_000)).unwrap();
        let b = apply_margin(ServiceClass::Car, Money::new(42_000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn overflow_is_an_error() {
        let result = apply_margin(ServiceClass::Car, Money::new(i64::MAX));
        assert!(matches!(result, Err(DomainError::AmountOverflow(_))));
    }
}
