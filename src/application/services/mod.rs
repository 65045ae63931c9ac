//! # Application Services
//!
//! The use-case layer of the quotation engine.
//!
//! - [`orchestrator`]: the top-level quotation control flow
//! - [`fallback_quote`]: pure local pricing used when the provider cannot
//! - [`webhook_mapper`]: provider callbacks → order-store updates

pub mod fallback_quote;
pub mod orchestrator;
pub mod webhook_mapper;

pub use orchestrator::{QuotationOrchestrator, QuotePolicy};
pub use webhook_mapper::WebhookStatusMapper;
