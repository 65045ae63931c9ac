//! # delivery-rfq
//!
//! Last-mile delivery quotation and pricing engine for a food-delivery
//! checkout: given a store pickup point, a customer drop-off, and a
//! vehicle class, it returns a priced, five-minute quotation that checkout
//! can display and later honor.
//!
//! The engine integrates with an external delivery provider over an
//! HMAC-signed quotation API, classifies provider failures into a closed
//! set of kinds, and keeps checkout functional with a pure local fallback
//! price whenever the provider is unreachable, misconfigured, or rejects
//! the request for a recoverable reason. Asynchronous delivery-status
//! callbacks are translated into an internal vocabulary and merged
//! idempotently into the order store.
//!
//! # Layers
//!
//! - [`domain`]: value objects, entities, events, and the pure pricing
//!   services (coordinate validation, haversine distance, fare schedule,
//!   margin, surcharge)
//! - [`application`]: the quotation orchestrator, the fallback service,
//!   the webhook status mapper, and the error taxonomy
//! - [`infrastructure`]: the signed provider client, the geocoding port,
//!   and the order-store port with its in-memory implementation
//! - [`api`]: the axum REST surface
//! - [`config`]: environment-sourced configuration, read once at startup

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
