//! # Infrastructure Layer
//!
//! Adapters for the outside world: the signed provider client, the
//! geocoding port, and the order-store port with its in-memory
//! implementation.

pub mod geocoding;
pub mod persistence;
pub mod provider;
