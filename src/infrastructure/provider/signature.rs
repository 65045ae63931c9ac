//! # Request Signature
//!
//! HMAC-SHA256 signing for provider API requests.
//!
//! The provider authenticates each call with a keyed hash over a canonical
//! payload assembled from the request timestamp, HTTP method, path, and
//! JSON body. The resulting transport header is
//! `Authorization: hmac {api_key}:{timestamp}:{signature}`.

use crate::infrastructure::provider::error::{ProviderError, ProviderResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Assembles the canonical payload the signature covers:
/// `"{timestamp}\r\n{method}\r\n{path}\r\n\r\n{body}"`.
///
/// `timestamp` is milliseconds since the epoch rendered as a decimal
/// string; the blank line between path and body is part of the format.
#[must_use]
pub fn canonical_payload(timestamp_ms: i64, method: &str, path: &str, body: &str) -> String {
    format!("{timestamp_ms}\r\n{method}\r\n{path}\r\n\r\n{body}")
}

/// Signs a canonical payload with the shared secret.
///
/// Returns the lowercase hex digest.
///
/// # Errors
///
/// Returns [`ProviderError::Unknown`] if the MAC cannot be keyed; HMAC
/// accepts keys of any length, so this does not happen in practice.
pub fn sign(
    secret: &str,
    timestamp_ms: i64,
    method: &str,
    path: &str,
    body: &str,
) -> ProviderResult<String> {
    let payload = canonical_payload(timestamp_ms, method, path, body);

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ProviderError::unknown(format!("failed to key request signature: {e}")))?;
    mac.update(payload.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Renders the `Authorization` header value for a signed request.
#[must_use]
pub fn authorization_header(api_key: &str, timestamp_ms: i64, signature: &str) -> String {
    format!("hmac {api_key}:{timestamp_ms}:{signature}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn canonical_payload_format_is_exact() {
        let payload = canonical_payload(1_700_000_000_000, "POST", "/v3/quotations", "{}");
        assert_eq!(payload, "1700000000000\r\nPOST\r\n/v3/quotations\r\n\r\n{}");
    }

    #[test]
    fn signature_is_deterministic() {
        let a = sign("secret", 1_700_000_000_000, "POST", "/v3/quotations", "{}").unwrap();
        let b = sign("secret", 1_700_000_000_000, "POST", "/v3/quotations", "{}").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn signature_is_lowercase_hex_sha256_length() {
        let sig = sign("secret", 1_700_000_000_000, "POST", "/v3/quotations", "{}").unwrap();
        assert_eq!(sig.len(), 64);
        assert!(
            sig.chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn signature_varies_with_secret_and_body() {
        let base = sign("secret", 1_700_000_000_000, "POST", "/v3/quotations", "{}").unwrap();
        let other_secret =
            sign("secret2", 1_700_000_000_000, "POST", "/v3/quotations", "{}").unwrap();
        let other_body =
            sign("secret", 1_700_000_000_000, "POST", "/v3/quotations", "{\"a\":1}").unwrap();
        assert_ne!(base, other_secret);
        assert_ne!(base, other_body);
    }

    #[test]
    fn signature_varies_with_timestamp() {
        let a = sign("secret", 1, "POST", "/v3/quotations", "{}").unwrap();
        let b = sign("secret", 2, "POST", "/v3/quotations", "{}").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn authorization_header_layout() {
        let header = authorization_header("key-1", 1_700_000_000_000, "abc123");
        assert_eq!(header, "hmac key-1:1700000000000:abc123");
    }
}
