//! # Timestamp Value Object
//!
//! UTC timestamp wrapper with the handful of operations the quotation
//! flow needs: creation, millisecond epochs for request signing, and the
//! fixed five-minute expiry window.
//!
//! # Examples
//!
//! ```
//! use delivery_rfq::domain::value_objects::timestamp::Timestamp;
//!
//! let created = Timestamp::now();
//! let expires = created.add_secs(300);
//! assert!(!expires.is_past());
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds, if representable.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Parses an RFC 3339 / ISO 8601 string (the provider's wire format).
    #[must_use]
    pub fn parse_iso8601(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Returns the Unix timestamp in milliseconds.
    ///
    /// This is the value the provider signature embeds, rendered as a
    /// decimal string.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns a timestamp `secs` seconds later (negative moves earlier).
    #[must_use]
    pub fn add_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Returns true if this timestamp is in the past.
    #[must_use]
    pub fn is_past(&self) -> bool {
        self.0 < Utc::now()
    }

    /// Returns true if this timestamp is strictly after another.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Whole seconds between this timestamp and a later one; zero if
    /// `later` is not actually later.
    #[must_use]
    pub fn seconds_until(&self, later: &Self) -> i64 {
        (later.0 - self.0).num_seconds().max(0)
    }

    /// Formats as RFC 3339 (the wire format for quotation expiry).
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
