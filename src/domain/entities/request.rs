//! # Quotation Request Entity
//!
//! The validated input to the quotation flow.
//!
//! A request carries two waypoints (store pickup and customer drop-off),
//! the vehicle class, an optional pickup schedule, the toll flag, and the
//! requester's contact details. Address presence is validated at
//! construction; coordinate validity against the service area is the
//! orchestrator's first step.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Coordinate, ServiceClass, Timestamp};
use serde::{Deserialize, Serialize};

/// A stop on the delivery: an address, optionally already geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    address: String,
    coordinate: Option<Coordinate>,
}

impl Waypoint {
    /// Creates a waypoint.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyAddress`] if the address is blank.
    pub fn new(address: impl Into<String>, coordinate: Option<Coordinate>) -> DomainResult<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(DomainError::EmptyAddress);
        }
        Ok(Self {
            address,
            coordinate,
        })
    }

    /// Returns the address text.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the coordinate, if already resolved.
    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Returns a copy of this waypoint with its coordinate resolved.
    #[must_use]
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }
}

/// Who asked for the delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    phone: String,
}

impl Contact {
    /// Creates contact details.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingContact`] if the name or phone is
    /// blank.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let phone = phone.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingContact("name"));
        }
        if phone.trim().is_empty() {
            return Err(DomainError::MissingContact("phone"));
        }
        Ok(Self { name, phone })
    }

    /// Returns the contact name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact phone number.
    #[inline]
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// A validated quotation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationRequest {
    origin: Waypoint,
    destination: Waypoint,
    service_class: ServiceClass,
    scheduled_at: Option<Timestamp>,
    toll_requested: bool,
    contact: Contact,
}

impl QuotationRequest {
    /// Assembles a request from validated parts.
    #[must_use]
    pub fn new(
        origin: Waypoint,
        destination: Waypoint,
        service_class: ServiceClass,
        scheduled_at: Option<Timestamp>,
        toll_requested: bool,
        contact: Contact,
    ) -> Self {
        Self {
            origin,
            destination,
            service_class,
            scheduled_at,
            toll_requested,
            contact,
        }
    }

    /// Returns the pickup waypoint.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> &Waypoint {
        &self.origin
    }

    /// Returns the drop-off waypoint.
    #[inline]
    #[must_use]
    pub const fn destination(&self) -> &Waypoint {
        &self.destination
    }

    /// Returns the requested vehicle class.
    #[inline]
    #[must_use]
    pub const fn service_class(&self) -> ServiceClass {
        self.service_class
    }

    /// Returns the requested pickup time, if scheduled.
    #[inline]
    #[must_use]
    pub const fn scheduled_at(&self) -> Option<Timestamp> {
        self.scheduled_at
    }

    /// Returns true if the caller asked for a toll route.
    #[inline]
    #[must_use]
    pub const fn toll_requested(&self) -> bool {
        self.toll_requested
    }

    /// Returns the requester's contact details.
    #[inline]
    #[must_use]
    pub const fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Replaces the origin waypoint (used after address resolution).
    #[must_use]
    pub fn with_origin(mut self, origin: Waypoint) -> Self {
        self.origin = origin;
        self
    }

    /// Replaces the destination waypoint (used after address resolution).
    #[must_use]
    pub fn with_destination(mut self, destination: Waypoint) -> Self {
        self.destination = destination;
        self
    }
}
