//! # Application Errors
//!
//! Failure taxonomy for the quotation flow.
//!
//! The guiding rule: only genuine provider/infrastructure failures are
//! masked by a fallback price. Input-validity and policy failures are
//! always surfaced so checkout can react (show a dialog instead of a
//! misleadingly-priced quote).
//!
//! # Error Hierarchy
//!
//! ```text
//! QuotationError
//! ├── Validation(String)        - bad input, 400, localized message
//! ├── PolicyRejected { code }   - serviceability cap, 400 + errorCode
//! └── Unexpected(String)        - anything uncategorized, 500
//! ```
//!
//! Provider failures ([`crate::infrastructure::provider::ProviderError`])
//! never appear here: the orchestrator either converts them to a fallback
//! quotation or, for untrustworthy coordinates, to a `Validation` error.

use crate::domain::errors::DomainError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Structured code for deliberate business rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyCode {
    /// The delivery distance exceeds the serviceable range.
    DistanceExceeded,
}

impl fmt::Display for PolicyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DistanceExceeded => write!(f, "DISTANCE_EXCEEDED"),
        }
    }
}

/// Error type for quotation use-case failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuotationError {
    /// Request validation failed; message is customer-facing and
    /// localized.
    #[error("validation error: {0}")]
    Validation(String),

    /// A deliberate business rejection that must never be priced by
    /// fallback.
    #[error("policy rejected ({code}): {detail}")]
    PolicyRejected {
        /// Structured code the caller can branch on.
        code: PolicyCode,
        /// Customer-facing, localized detail.
        detail: String,
    },

    /// Anything uncategorized; logged and surfaced as a generic failure.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl QuotationError {
    /// Creates a validation error with a localized message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates the distance-exceeded policy rejection.
    #[must_use]
    pub fn distance_exceeded(detail: impl Into<String>) -> Self {
        Self::PolicyRejected {
            code: PolicyCode::DistanceExceeded,
            detail: detail.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Returns true if the caller is at fault (400-class).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::PolicyRejected { .. })
    }

    /// Returns the structured policy code, if any.
    #[must_use]
    pub fn policy_code(&self) -> Option<PolicyCode> {
        match self {
            Self::PolicyRejected { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<DomainError> for QuotationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyAddress => Self::validation("Alamat pengiriman wajib diisi"),
            DomainError::MissingContact(_) => Self::validation("Data penerima belum lengkap"),
            DomainError::AmountOverflow(context) => {
                Self::unexpected(format!("amount overflow while {context}"))
            }
        }
    }
}

/// Result type for quotation use cases.
pub type QuotationResult<T> = Result<T, QuotationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_a_client_error() {
        let err = QuotationError::validation("Alamat pengiriman wajib diisi");
        assert!(err.is_client_error());
        assert!(err.policy_code().is_none());
    }

    #[test]
    fn distance_exceeded_carries_its_code() {
        let err = QuotationError::distance_exceeded("Jarak melebihi batas layanan");
        assert!(err.is_client_error());
        assert_eq!(err.policy_code(), Some(PolicyCode::DistanceExceeded));
        assert!(err.to_string().contains("DISTANCE_EXCEEDED"));
    }

    #[test]
    fn unexpected_is_not_a_client_error() {
        assert!(!QuotationError::unexpected("boom").is_client_error());
    }

    #[test]
    fn policy_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&PolicyCode::DistanceExceeded).unwrap();
        assert_eq!(json, "\"DISTANCE_EXCEEDED\"");
    }

    #[test]
    fn domain_errors_localize_to_validation() {
        let err: QuotationError = DomainError::EmptyAddress.into();
        assert!(err.is_client_error());

        let err: QuotationError = DomainError::AmountOverflow("test").into();
        assert!(!err.is_client_error());
    }
}
