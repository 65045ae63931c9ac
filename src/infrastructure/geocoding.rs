//! # Address Resolution Port
//!
//! Port for the geocoding collaborator.
//!
//! Geocoding accuracy is explicitly someone else's problem; this engine
//! only needs a coordinate for a waypoint that arrived as a bare address.
//! When no resolver is wired, such requests fail validation instead of
//! being priced from a guess.

use crate::domain::value_objects::Coordinate;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for address resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No resolver is available in this deployment.
    #[error("address resolution is not available")]
    Unavailable,

    /// The resolver could not place the address.
    #[error("address could not be resolved: {0}")]
    NotFound(String),
}

/// Port for turning an address string into a coordinate.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolves an address to a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the address cannot be placed.
    async fn resolve(&self, address: &str) -> Result<Coordinate, ResolveError>;
}
