//! # Money Value Object
//!
//! Integer rupiah amounts with checked arithmetic.
//!
//! Indonesian rupiah has no minor units and every tariff constant in the
//! fare schedule is a whole-rupiah figure, so [`Money`] wraps an `i64`
//! amount directly. All quoted totals are rounded to the nearest 100
//! rupiah via [`Money::from_f64_rounded`].
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::value_objects::money::Money;
//!
//! let fare = Money::new(11_500);
//! let margin = Money::new(3_000);
//! assert_eq!(fare.checked_add(margin), Some(Money::new(14_500)));
//! assert_eq!(Money::from_f64_rounded(11_449.9), Money::new(11_400));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 code of the only currency this engine quotes in.
pub const CURRENCY: &str = "IDR";

/// A whole-rupiah monetary amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rupiah.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole rupiah.
    #[inline]
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Rounds a raw fare figure to the nearest 100 rupiah.
    ///
    /// This is the rounding rule every quoted total must satisfy
    /// (`total % 100 == 0`).
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_rfq::domain::value_objects::money::Money;
    ///
    /// assert_eq!(Money::from_f64_rounded(11_500.0), Money::new(11_500));
    /// assert_eq!(Money::from_f64_rounded(11_550.0), Money::new(11_600));
    /// assert_eq!(Money::from_f64_rounded(11_449.0), Money::new(11_400));
    /// ```
    #[must_use]
    pub fn from_f64_rounded(amount: f64) -> Self {
        Self(((amount / 100.0).round() * 100.0) as i64)
    }

    /// Returns the amount in whole rupiah.
    #[inline]
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Checked addition; `None` on overflow.
    #[inline]
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is a multiple of 100 rupiah.
    #[inline]
    #[must_use]
    pub const fn is_rounded(self) -> bool {
        self.0 % 100 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, CURRENCY)
    }
}
