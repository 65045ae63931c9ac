//! # Domain Events
//!
//! Asynchronous delivery lifecycle vocabulary.

pub mod delivery;

pub use delivery::{
    AuditEntry, DeliveryStatus, DriverDetails, ProviderEventType, WebhookEvent,
};
