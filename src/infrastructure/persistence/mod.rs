//! # Persistence
//!
//! The order-store port and its in-memory implementation.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryOrderStore;
pub use traits::{ApplyOutcome, OrderRecord, OrderStore, StatusUpdate, StoreError, StoreResult};
