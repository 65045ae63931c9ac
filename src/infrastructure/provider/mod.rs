//! # Provider Integration
//!
//! Signed HTTP integration with the external delivery provider.
//!
//! - [`credentials`]: immutable account configuration
//! - [`signature`]: HMAC-SHA256 request signing
//! - [`client`]: the HTTP adapter for `POST /v3/quotations`
//! - [`traits`]: the [`QuotationProvider`] port the orchestrator consumes
//! - [`error`]: the closed set of classified provider failures

pub mod client;
pub mod credentials;
pub mod error;
pub mod signature;
pub mod traits;

pub use client::ProviderClient;
pub use credentials::ProviderCredentials;
pub use error::{ProviderError, ProviderResult};
pub use traits::{ProviderQuotation, QuotationProvider};
