//! JWT claim inspection. Decode only, never verification.
//!
//! DESIGN
//! ======
//! Signature verification belongs to the backend; the client only peeks at
//! the payload for display (name, email) and to skip requests that would
//! bounce off an expired token. Anything malformed decodes to `None`, and
//! [`is_expired`] treats malformed as expired — the safe answer for a
//! token we cannot read.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use time::OffsetDateTime;

/// Claims the client cares about; everything else in the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    /// Subject — the user id.
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the payload segment of a JWT.
///
/// Returns `None` unless the token has exactly three dot-separated
/// segments whose middle segment is base64url-encoded JSON.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    // Tolerate padded emitters; JWT base64url is normally unpadded.
    let payload = payload.trim_end_matches('=');
    let bytes = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => return None,
    };
    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(_) => None,
    }
}

/// Whether `token` is expired at `now`.
///
/// Malformed tokens are expired by definition; tokens without an `exp`
/// claim never expire client-side.
#[must_use]
pub fn is_expired(token: &str, now: OffsetDateTime) -> bool {
    let Some(claims) = decode_claims(token) else {
        return true;
    };
    match claims.exp {
        Some(exp) => exp <= now.unix_timestamp(),
        None => false,
    }
}

/// [`is_expired`] against the wall clock.
#[must_use]
pub fn is_expired_now(token: &str) -> bool {
    is_expired(token, OffsetDateTime::now_utc())
}
