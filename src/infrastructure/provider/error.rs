//! # Provider Errors
//!
//! Classified failures from the delivery provider's quotation API.
//!
//! The orchestrator branches on this closed set of kinds, never on
//! free-text message content, to decide between rejecting the request
//! and degrading to the local fallback price.
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::infrastructure::provider::error::ProviderError;
//!
//! let error = ProviderError::unavailable("connect timeout after 8000ms");
//! assert!(error.is_fallback_eligible());
//!
//! let error = ProviderError::invalid_coordinates("stop outside market");
//! assert!(!error.is_fallback_eligible());
//! ```

use thiserror::Error;

/// Error type for provider quotation calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider rejected the stop coordinates.
    ///
    /// Terminal for the request: coordinates the provider distrusts must
    /// not be priced locally either.
    #[error("provider rejected coordinates: {message}")]
    InvalidCoordinates {
        /// Provider-reported detail.
        message: String,
    },

    /// The configured market is wrong or not enabled for this account.
    #[error("provider rejected market: {message}")]
    InvalidMarket {
        /// Provider-reported detail.
        message: String,
    },

    /// Network failure, timeout, or provider-side 5xx.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Transport or provider detail.
        message: String,
    },

    /// Anything the classification does not recognize.
    #[error("provider error: {message}")]
    Unknown {
        /// Whatever detail was available.
        message: String,
    },
}

impl ProviderError {
    /// Creates an invalid-coordinates error.
    #[must_use]
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates {
            message: message.into(),
        }
    }

    /// Creates an invalid-market error.
    #[must_use]
    pub fn invalid_market(message: impl Into<String>) -> Self {
        Self::InvalidMarket {
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns true if checkout may be kept alive with a fallback price.
    ///
    /// Only coordinate rejections are excluded: a price computed from
    /// coordinates the provider distrusts would be meaningless.
    #[must_use]
    pub fn is_fallback_eligible(&self) -> bool {
        !matches!(self, Self::InvalidCoordinates { .. })
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
