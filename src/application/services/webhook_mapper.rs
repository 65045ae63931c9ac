//! # Webhook Status Mapper
//!
//! Translates provider delivery callbacks into the internal status
//! vocabulary and merges them into the order store.
//!
//! The mapping is total: every known provider status has an entry and an
//! unknown status maps to the conservative default
//! ([`DeliveryStatus::PickupRequested`]) instead of failing: it never
//! claims more progress than is actually known, and the store's rank
//! guard keeps it from regressing an order that has already progressed.

use crate::domain::events::{DeliveryStatus, ProviderEventType, WebhookEvent};
use crate::infrastructure::persistence::traits::{
    ApplyOutcome, OrderStore, StatusUpdate, StoreResult,
};
use std::sync::Arc;

/// Translates one provider status string into the internal vocabulary.
///
/// Total over all inputs; case-insensitive on the provider's
/// SCREAMING_SNAKE_CASE strings.
#[must_use]
pub fn map_provider_status(raw: &str) -> DeliveryStatus {
    match raw.to_uppercase().as_str() {
        "ASSIGNING_DRIVER" => DeliveryStatus::PickupRequested,
        "ON_GOING" | "PICKED_UP" => DeliveryStatus::PickedUp,
        "COMPLETED" => DeliveryStatus::Delivered,
        "CANCELLED" => DeliveryStatus::Cancelled,
        other => {
            tracing::warn!(status = other, "unknown provider status, using default");
            DeliveryStatus::PickupRequested
        }
    }
}

/// Maps provider callbacks into order-store updates.
pub struct WebhookStatusMapper {
    store: Arc<dyn OrderStore>,
}

impl WebhookStatusMapper {
    /// Creates a mapper writing to the given order store.
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Processes one callback: maps it and merges it into the store.
    ///
    /// Idempotent end to end: replays (same event type + order id +
    /// timestamp) are detected by the store and leave no trace.
    ///
    /// # Errors
    ///
    /// Returns [`crate::infrastructure::persistence::StoreError`] if the
    /// store backend fails.
    #[tracing::instrument(skip(self, event), fields(order = %event.provider_order_id, kind = %event.event_type))]
    pub async fn process(&self, event: WebhookEvent) -> StoreResult<ApplyOutcome> {
        let status = match event.event_type {
            // Assignment is its own event type, independent of the
            // status field, and carries the driver details.
            ProviderEventType::DriverAssigned => DeliveryStatus::DriverAssigned,
            ProviderEventType::OrderStatusChanged | ProviderEventType::Unrecognized => {
                map_provider_status(event.status.as_deref().unwrap_or(""))
            }
        };

        let outcome = self
            .store
            .apply_status(StatusUpdate {
                provider_order_id: event.provider_order_id.clone(),
                event_type: event.event_type,
                status,
                driver: event.driver,
                occurred_at: event.timestamp,
            })
            .await?;

        tracing::debug!(?outcome, %status, "webhook merged");
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::events::DriverDetails;
    use crate::domain::value_objects::{ProviderOrderId, Timestamp};
    use crate::infrastructure::persistence::InMemoryOrderStore;

    fn event(
        event_type: ProviderEventType,
        status: Option<&str>,
        millis: i64,
    ) -> WebhookEvent {
        WebhookEvent {
            event_type,
            provider_order_id: ProviderOrderId::new("LM-9"),
            status: status.map(str::to_string),
            driver: None,
            timestamp: Timestamp::from_millis(millis).unwrap(),
            metadata: None,
        }
    }

    fn mapper() -> (WebhookStatusMapper, Arc<InMemoryOrderStore>) {
        let store = Arc::new(InMemoryOrderStore::new());
        (WebhookStatusMapper::new(store.clone()), store)
    }

    mod mapping_table {
        use super::*;

        #[test]
        fn every_known_status_maps() {
            assert_eq!(
                map_provider_status("ASSIGNING_DRIVER"),
                DeliveryStatus::PickupRequested
            );
            assert_eq!(map_provider_status("ON_GOING"), DeliveryStatus::PickedUp);
            assert_eq!(map_provider_status("PICKED_UP"), DeliveryStatus::PickedUp);
            assert_eq!(map_provider_status("COMPLETED"), DeliveryStatus::Delivered);
            assert_eq!(map_provider_status("CANCELLED"), DeliveryStatus::Cancelled);
        }

        #[test]
        fn unknown_status_gets_the_conservative_default() {
            assert_eq!(
                map_provider_status("TELEPORTED"),
                DeliveryStatus::PickupRequested
            );
            assert_eq!(map_provider_status(""), DeliveryStatus::PickupRequested);
        }

        #[test]
        fn mapping_is_case_insensitive() {
            assert_eq!(map_provider_status("completed"), DeliveryStatus::Delivered);
        }
    }

    mod merging {
        use super::*;

        #[tokio::test]
        async fn status_change_lands_in_the_store() {
            let (mapper, store) = mapper();
            mapper
                .process(event(
                    ProviderEventType::OrderStatusChanged,
                    Some("PICKED_UP"),
                    1_000,
                ))
                .await
                .unwrap();

            let record = store
                .get(&ProviderOrderId::new("LM-9"))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(record.delivery_status, DeliveryStatus::PickedUp);
        }

        #[tokio::test]
        async fn driver_assignment_maps_independently_and_attaches_details() {
            let (mapper, store) = mapper();
            let mut assignment =
                event(ProviderEventType::DriverAssigned, None, 1_000);
            assignment.driver = Some(DriverDetails {
                name: Some("Budi".to_string()),
                phone: Some("0813999".to_string()),
                plate_number: Some("B 1234 XY".to_string()),
            });
            mapper.process(assignment).await.unwrap();

            let record = store
                .get(&ProviderOrderId::new("LM-9"))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(record.delivery_status, DeliveryStatus::DriverAssigned);
            assert_eq!(record.driver.unwrap().plate_number.as_deref(), Some("B 1234 XY"));
        }

        #[tokio::test]
        async fn replayed_event_does_not_duplicate_audit_entries() {
            let (mapper, store) = mapper();
            let delivered = event(
                ProviderEventType::OrderStatusChanged,
                Some("COMPLETED"),
                2_000,
            );
            assert_eq!(
                mapper.process(delivered.clone()).await.unwrap(),
                ApplyOutcome::Applied
            );
            assert_eq!(
                mapper.process(delivered).await.unwrap(),
                ApplyOutcome::Duplicate
            );

            let record = store
                .get(&ProviderOrderId::new("LM-9"))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(record.audit_trail.len(), 1);
        }

        #[tokio::test]
        async fn out_of_order_delivery_does_not_regress_status() {
            let (mapper, store) = mapper();
            mapper
                .process(event(
                    ProviderEventType::OrderStatusChanged,
                    Some("COMPLETED"),
                    5_000,
                ))
                .await
                .unwrap();
            mapper
                .process(event(
                    ProviderEventType::OrderStatusChanged,
                    Some("ON_GOING"),
                    3_000,
                ))
                .await
                .unwrap();

            let record = store
                .get(&ProviderOrderId::new("LM-9"))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(record.delivery_status, DeliveryStatus::Delivered);
            // The late event is still on the trail.
            assert_eq!(record.audit_trail.len(), 2);
        }

        #[tokio::test]
        async fn unknown_status_never_errors() {
            let (mapper, _) = mapper();
            let outcome = mapper
                .process(event(
                    ProviderEventType::OrderStatusChanged,
                    Some("WORMHOLE_TRANSIT"),
                    1_000,
                ))
                .await;
            assert!(outcome.is_ok());
        }
    }
}
