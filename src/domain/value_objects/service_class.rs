//! # Service Class
//!
//! Vehicle categories a delivery can be quoted for.
//!
//! The internal vocabulary is canonical ([`ServiceClass::Car`], never
//! "SEDAN"); the provider's wire vocabulary is produced only at the
//! integration boundary via [`ServiceClass::provider_code`].
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::value_objects::service_class::ServiceClass;
//!
//! let car: ServiceClass = "SEDAN".parse().unwrap();
//! assert_eq!(car, ServiceClass::Car);
//! assert_eq!(car.provider_code(), "SEDAN");
//! assert_eq!(car.to_string(), "CAR");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The vehicle category selected for a delivery.
///
/// Determines the fare formula, the undisclosed margin, and toll
/// eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ServiceClass {
    /// Two-wheeler courier.
    Motorcycle = 0,
    /// Passenger car (provider vocabulary: SEDAN).
    Car = 1,
    /// Cargo van.
    Van = 2,
    /// Light truck.
    Truck = 3,
}

impl ServiceClass {
    /// All classes, in tariff-table order.
    pub const ALL: [Self; 4] = [Self::Motorcycle, Self::Car, Self::Van, Self::Truck];

    /// Returns the provider's wire code for this class.
    ///
    /// The only divergence from the internal vocabulary is `Car`, which the
    /// provider calls `SEDAN`.
    #[must_use]
    pub const fn provider_code(self) -> &'static str {
        match self {
            Self::Motorcycle => "MOTORCYCLE",
            Self::Car => "SEDAN",
            Self::Van => "VAN",
            Self::Truck => "TRUCK",
        }
    }

    /// Returns true if this class may use a toll road.
    #[inline]
    #[must_use]
    pub const fn is_toll_eligible(self) -> bool {
        matches!(self, Self::Car)
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Motorcycle => write!(f, "MOTORCYCLE"),
            Self::Car => write!(f, "CAR"),
            Self::Van => write!(f, "VAN"),
            Self::Truck => write!(f, "TRUCK"),
        }
    }
}

/// Error for unrecognized service-class strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service class: {0}")]
pub struct ParseServiceClassError(pub String);

impl FromStr for ServiceClass {
    type Err = ParseServiceClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MOTORCYCLE" => Ok(Self::Motorcycle),
            // SEDAN is the provider's name for the same class.
            "CAR" | "SEDAN" => Ok(Self::Car),
            "VAN" => Ok(Self::Van),
            "TRUCK" => Ok(Self::Truck),
            other => Err(ParseServiceClassError(other.to_string())),
        }
    }
}
