//! # Delivery Events
//!
//! Vocabulary for asynchronous provider callbacks and the internal
//! delivery-status trail.
//!
//! The provider reports status in its own words; [`DeliveryStatus`] is the
//! internal vocabulary the rest of the system (and the order store) speaks.
//! The translation between the two lives in the webhook status mapper.

use crate::domain::value_objects::{ProviderOrderId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of callback the provider delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderEventType {
    /// The order moved to a new delivery status.
    OrderStatusChanged,
    /// A driver was assigned; the event carries driver details.
    DriverAssigned,
    /// Any event type this system does not know.
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for ProviderEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderStatusChanged => write!(f, "ORDER_STATUS_CHANGED"),
            Self::DriverAssigned => write!(f, "DRIVER_ASSIGNED"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

/// Internal delivery status vocabulary.
///
/// Ordered by delivery progress; webhook replays must never move an order
/// to a lower rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// A pickup was requested; the provider is finding a driver.
    PickupRequested,
    /// A driver accepted the order.
    DriverAssigned,
    /// The package left the store.
    PickedUp,
    /// The package reached the customer.
    Delivered,
    /// The delivery was cancelled.
    Cancelled,
}

impl DeliveryStatus {
    /// Progress rank used to reject regressing updates.
    ///
    /// The two terminal statuses share the top rank so neither can
    /// overwrite the other.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::PickupRequested => 0,
            Self::DriverAssigned => 1,
            Self::PickedUp => 2,
            Self::Delivered | Self::Cancelled => 3,
        }
    }

    /// Returns true if no further status can follow.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickupRequested => write!(f, "pickup_requested"),
            Self::DriverAssigned => write!(f, "driver_assigned"),
            Self::PickedUp => write!(f, "picked_up"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Driver contact and vehicle details attached to assignment events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDetails {
    /// Driver display name.
    pub name: Option<String>,
    /// Driver phone number.
    pub phone: Option<String>,
    /// Vehicle plate number.
    pub plate_number: Option<String>,
}

/// An asynchronous callback from the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// What kind of callback this is.
    pub event_type: ProviderEventType,
    /// The provider's order this event belongs to.
    pub provider_order_id: ProviderOrderId,
    /// Provider-vocabulary status, when the event carries one.
    pub status: Option<String>,
    /// Driver details, on assignment events.
    pub driver: Option<DriverDetails>,
    /// When the event occurred at the provider.
    pub timestamp: Timestamp,
    /// Opaque provider extras, passed through untouched.
    pub metadata: Option<serde_json::Value>,
}

impl WebhookEvent {
    /// Replay/duplicate key: two events with the same key are the same
    /// delivery attempt and must be applied at most once.
    #[must_use]
    pub fn replay_key(&self) -> (ProviderEventType, &str, i64) {
        (
            self.event_type,
            self.provider_order_id.as_str(),
            self.timestamp.timestamp_millis(),
        )
    }
}

/// One immutable line of an order's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The callback that produced this entry.
    pub event_type: ProviderEventType,
    /// The internal status the order was mapped to.
    pub status: DeliveryStatus,
    /// Driver details, when the event carried them.
    pub driver: Option<DriverDetails>,
    /// When the event occurred at the provider.
    pub occurred_at: Timestamp,
    /// When this system recorded the entry.
    pub recorded_at: Timestamp,
}
