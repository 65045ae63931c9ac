//! # Coordinate Value Object
//!
//! Geographic coordinate with service-area validation.
//!
//! This module provides the [`Coordinate`] type and the [`BoundingBox`]
//! describing the serviceable country. Every coordinate entering the system
//! must pass [`Coordinate::is_within_service_area`] before it is priced or
//! sent to the delivery provider.
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::value_objects::coordinate::Coordinate;
//!
//! let jakarta = Coordinate::new(-6.1754, 106.8272);
//! assert!(jakarta.is_within_service_area());
//!
//! let boston = Coordinate::new(42.3601, -71.0589);
//! assert!(!boston.is_within_service_area());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive latitude/longitude rectangle.
///
/// Boundaries belong to the box: a point exactly on an edge is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern latitude limit.
    pub south: f64,
    /// Northern latitude limit.
    pub north: f64,
    /// Western longitude limit.
    pub west: f64,
    /// Eastern longitude limit.
    pub east: f64,
}

impl BoundingBox {
    /// Returns true if the coordinate lies inside the box, edges included.
    #[inline]
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.lat >= self.south
            && coordinate.lat <= self.north
            && coordinate.lng >= self.west
            && coordinate.lng <= self.east
    }
}

/// The serviceable country: Indonesia.
pub const SERVICE_AREA: BoundingBox = BoundingBox {
    south: -11.0,
    north: 6.0,
    west: 95.0,
    east: 141.0,
};

/// A WGS84 latitude/longitude pair.
///
/// Plain value type; validity against the service area is checked
/// explicitly via [`is_within_service_area`](Self::is_within_service_area),
/// and that check is terminal for a quotation request; an out-of-area
/// coordinate is never priced, locally or by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if this coordinate lies inside [`SERVICE_AREA`],
    /// boundaries inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_rfq::domain::value_objects::coordinate::Coordinate;
    ///
    /// // Exactly on the north-east corner is still serviceable.
    /// assert!(Coordinate::new(6.0, 141.0).is_within_service_area());
    /// assert!(!Coordinate::new(6.0001, 141.0).is_within_service_area());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_within_service_area(&self) -> bool {
        SERVICE_AREA.contains(*self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod service_area {
        use super::*;

        #[test]
        fn jakarta_is_inside() {
            assert!(Coordinate::new(-6.1754, 106.8272).is_within_service_area());
        }

        #[test]
        fn surabaya_is_inside() {
            assert!(Coordinate::new(-7.2575, 112.7521).is_within_service_area());
        }

        #[test]
        fn corners_are_inclusive() {
            assert!(Coordinate::new(6.0, 141.0).is_within_service_area());
            assert!(Coordinate::new(-11.0, 95.0).is_within_service_area());
            assert!(Coordinate::new(6.0, 95.0).is_within_service_area());
            assert!(Coordinate::new(-11.0, 141.0).is_within_service_area());
        }

        #[test]
        fn just_past_a_boundary_is_outside() {
            assert!(!Coordinate::new(6.0001, 141.0).is_within_service_area());
            assert!(!Coordinate::new(-11.0001, 95.0).is_within_service_area());
            assert!(!Coordinate::new(0.0, 94.9999).is_within_service_area());
            assert!(!Coordinate::new(0.0, 141.0001).is_within_service_area());
        }

        #[test]
        fn north_atlantic_is_outside() {
            assert!(!Coordinate::new(40.0, -70.0).is_within_service_area());
        }

        #[test]
        fn check_is_deterministic() {
            let c = Coordinate::new(6.0, 141.0);
            assert_eq!(c.is_within_service_area(), c.is_within_service_area());
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        #[allow(clippy::unwrap_used)]
        fn roundtrip() {
            let c = Coordinate::new(-6.2, 106.8);
            let json = serde_json::to_string(&c).unwrap();
            let back: Coordinate = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }

        #[test]
        #[allow(clippy::unwrap_used)]
        fn wire_field_names() {
            let c = Coordinate::new(-6.2, 106.8);
            let json = serde_json::to_value(c).unwrap();
            assert!(json.get("lat").is_some());
            assert!(json.get("lng").is_some());
        }
    }
}
