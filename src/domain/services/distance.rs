//! # Distance Estimator
//!
//! Great-circle distance between two coordinates.
//!
//! Uses the haversine formula with a spherical Earth of radius 6371 km.
//! Road routing is deliberately out of scope; the estimate feeds the fare
//! schedule and the serviceability cap, both of which were calibrated
//! against great-circle distances.
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::services::distance::haversine_km;
//! use delivery_rfq::domain::value_objects::Coordinate;
//!
//! let monas = Coordinate::new(-6.1754, 106.8272);
//! let blok_m = Coordinate::new(-6.2444, 106.7991);
//! let d = haversine_km(monas, blok_m);
//! assert!(d.km() > 7.0 && d.km() < 10.0);
//! ```

use crate::domain::value_objects::{Coordinate, DistanceKm};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two coordinates.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)`,
/// `d = 2R·atan2(√a, √(1−a))`.
///
/// Pure and deterministic; the result is computed once per quotation
/// request and never mutated.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> DistanceKm {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let d = 2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt());

    DistanceKm::new(d)
}
