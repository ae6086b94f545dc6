//! Unverified reads of a bearer token's embedded expiry.
//!
//! The signature is never checked here; the backend stays the authority. The
//! only purpose is to skip a round trip for a token that has visibly expired.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: Option<f64>,
}

/// Expiry of a JWT-shaped token in milliseconds since the Unix epoch.
///
/// Returns `None` when the token has no payload segment, the payload is not
/// base64url JSON, or it carries no numeric `exp` claim.
pub fn expiry_ms(token: &str) -> Option<f64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;
    claim.exp.map(|secs| secs * 1000.0)
}

/// Whether the token's embedded expiry lies before `now_ms`.
///
/// Tokens without a readable expiry are not considered expired.
pub fn is_expired(token: &str, now_ms: f64) -> bool {
    expiry_ms(token).is_some_and(|exp| exp < now_ms)
}

/// Wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
