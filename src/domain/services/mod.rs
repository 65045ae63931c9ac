//! # Domain Services
//!
//! Pure, synchronous pricing computations.
//!
//! Everything here is safe to call concurrently from any number of
//! in-flight requests: no I/O, no shared mutable state.
//!
//! - [`distance`]: haversine great-circle estimator
//! - [`fare`]: table-driven base fares per vehicle class
//! - [`markup`]: fixed, undisclosed per-class margin
//! - [`surcharge`]: disclosed toll surcharge for car deliveries
//! - [`pricing`]: composition of the above into a price breakdown

pub mod distance;
pub mod fare;
pub mod markup;
pub mod pricing;
pub mod surcharge;

pub use distance::haversine_km;
pub use fare::{base_fare, FareParts, Tariff};
pub use markup::{apply_margin, class_margin, UndisclosedMargin};
pub use pricing::compose_breakdown;
pub use surcharge::toll_surcharge;
