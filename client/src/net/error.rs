//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by status code and surfaced with the
//! free-text `message` the backend put in the body, falling back to a
//! generic `HTTP <code>` string. Classification feeds logging only; no
//! class triggers automatic recovery. In particular a 401 does NOT clear
//! the session or redirect — the old auto-logout behavior caused loops when
//! the backend returned 401 for permission problems, so it stays off.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde_json::Value;

/// Coarse classification of a failing HTTP status, used for log routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    /// 401 — missing or dead session token.
    Unauthorized,
    /// 403 — authenticated but not allowed.
    Forbidden,
    /// 404 — entity or endpoint does not exist.
    NotFound,
    /// 422 — request body failed server-side validation.
    Validation,
    /// 5xx — backend fault.
    Server,
    /// Anything else non-2xx.
    Other,
}

impl StatusClass {
    /// Classify an HTTP status code.
    #[must_use]
    pub fn of(code: u16) -> Self {
        match code {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::Validation,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Server => "server",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Error produced by any backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Classification of the code.
        class: StatusClass,
        /// Message extracted from the response body, or `HTTP <code>`.
        message: String,
    },
    /// 2xx response whose envelope reported failure or carried no data.
    #[error(transparent)]
    Envelope(#[from] models::EnvelopeError),
    /// Response body was not valid JSON for the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// An authenticated call was attempted with no stored token.
    #[error("no session token; log in first")]
    MissingToken,
    /// The donation flow observed a state the lifecycle does not allow.
    #[error(transparent)]
    Lifecycle(#[from] models::TransitionError),
}

/// Pull the display message out of an error body.
///
/// Mirrors the `error.response.data.message || error.message` convention:
/// prefer the backend's free text, otherwise name the status.
#[must_use]
pub fn extract_message(code: u16, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map_or_else(|| format!("HTTP {code}"), ToOwned::to_owned)
}
