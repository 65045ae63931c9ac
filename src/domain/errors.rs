//! # Domain Errors
//!
//! Error types for business-rule violations inside the domain layer.

use thiserror::Error;

/// Error type for domain-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A waypoint was created without an address.
    #[error("address must not be empty")]
    EmptyAddress,

    /// Recipient contact details are incomplete.
    #[error("missing contact detail: {0}")]
    MissingContact(&'static str),

    /// A monetary computation exceeded the representable range.
    #[error("amount overflow while {0}")]
    AmountOverflow(&'static str),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
