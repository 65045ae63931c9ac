//! # In-Memory Order Store
//!
//! In-memory implementation of [`OrderStore`].
//!
//! Backed by a concurrent map whose entry lock serializes updates per
//! order key, which is exactly the guarantee the port demands for
//! concurrent webhook deliveries. Suitable for tests and for deployments
//! where the commerce system consumes the delivery view over the API.

use crate::domain::events::AuditEntry;
use crate::domain::value_objects::{ProviderOrderId, Timestamp};
use crate::infrastructure::persistence::traits::{
    ApplyOutcome, OrderRecord, OrderStore, StatusUpdate, StoreResult,
};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory, per-key-serialized implementation of [`OrderStore`].
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: DashMap<ProviderOrderId, OrderRecord>,
}

impl InMemoryOrderStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tracked orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if no order is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn apply_status(&self, update: StatusUpdate) -> StoreResult<ApplyOutcome> {
        // The entry guard holds the shard lock for this key until the
        // merge finishes, serializing concurrent deliveries per order.
        let mut entry = self
            .orders
            .entry(update.provider_order_id.clone())
            .or_insert_with(|| OrderRecord {
                provider_order_id: update.provider_order_id.clone(),
                delivery_status: update.status,
                driver: None,
                audit_trail: Vec::new(),
                last_event_at: update.occurred_at,
            });
        let record = entry.value_mut();

        let is_replay = record.audit_trail.iter().any(|line| {
            line.event_type == update.event_type && line.occurred_at == update.occurred_at
        });
        if is_replay {
            return Ok(ApplyOutcome::Duplicate);
        }

        record.audit_trail.push(AuditEntry {
            event_type: update.event_type,
            status: update.status,
            driver: update.driver.clone(),
            occurred_at: update.occurred_at,
            recorded_at: Timestamp::now(),
        });

        if let Some(driver) = update.driver {
            record.driver = Some(driver);
        }

        let first_event = record.audit_trail.len() == 1;
        let advances = update.status.rank() >= record.delivery_status.rank()
            && !record.delivery_status.is_terminal();
        let newer = update.occurred_at.is_after(&record.last_event_at);

        if first_event || (advances && newer) {
            record.delivery_status = update.status;
            record.last_event_at = update.occurred_at;
            Ok(ApplyOutcome::Applied)
        } else {
            Ok(ApplyOutcome::StatusKept)
        }
    }

    async fn get(&self, id: &ProviderOrderId) -> StoreResult<Option<OrderRecord>> {
        Ok(self.orders.get(id).map(|record| record.clone()))
    }
}
