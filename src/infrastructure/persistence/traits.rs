//! # Order Store Port
//!
//! Port definition for the external order store.
//!
//! The order store is owned by the commerce system; this engine only
//! merges delivery-status updates into it, keyed by the provider's order
//! id. Implementations must serialize updates per order key and apply
//! them conditionally on the event timestamp so concurrent or out-of-order
//! webhook deliveries cannot lose or regress state.

use crate::domain::events::{AuditEntry, DeliveryStatus, DriverDetails, ProviderEventType};
use crate::domain::value_objects::{ProviderOrderId, Timestamp};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for order-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure.
    #[error("order store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for order-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The delivery view of an order.
///
/// `delivery_status` is the latest merged status; `audit_trail` retains
/// every applied event in arrival order and is never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// The provider's order id this record is keyed by.
    pub provider_order_id: ProviderOrderId,
    /// Latest merged delivery status.
    pub delivery_status: DeliveryStatus,
    /// Driver details from the most recent assignment, if any.
    pub driver: Option<DriverDetails>,
    /// Immutable trail of applied events.
    pub audit_trail: Vec<AuditEntry>,
    /// Timestamp of the event that last advanced `delivery_status`.
    pub last_event_at: Timestamp,
}

/// A mapped status update ready to be merged into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    /// The order to update.
    pub provider_order_id: ProviderOrderId,
    /// The callback that produced this update.
    pub event_type: ProviderEventType,
    /// The internal status the event mapped to.
    pub status: DeliveryStatus,
    /// Driver details, when the event carried them.
    pub driver: Option<DriverDetails>,
    /// When the event occurred at the provider.
    pub occurred_at: Timestamp,
}

/// What the store did with an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Audit entry appended and status advanced.
    Applied,
    /// Exact replay of an already-applied event; nothing changed.
    Duplicate,
    /// Audit entry appended, but the status would have regressed (or the
    /// order is already terminal), so the status was kept.
    StatusKept,
}

/// Port for merging delivery-status updates into the order store.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Merges one status update.
    ///
    /// Must be idempotent: an update with an already-seen
    /// (event type, order id, timestamp) triple is a duplicate and leaves
    /// the record untouched. The status field only ever moves to an equal
    /// or higher rank, conditional on the event being newer than the one
    /// that last advanced it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn apply_status(&self, update: StatusUpdate) -> StoreResult<ApplyOutcome>;

    /// Fetches the delivery view of an order, if known.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn get(&self, id: &ProviderOrderId) -> StoreResult<Option<OrderRecord>>;
}
