//! Response envelope shared by every backend endpoint.
//!
//! DESIGN
//! ======
//! The backend wraps every JSON body in `{ data, success|status, message,
//! statusCode }`, but older endpoints report outcome as a `status` string
//! ("success"/"error") while newer ones use a `success` boolean. Both are
//! accepted; when neither is present, a populated `data` field is taken as
//! success so list endpoints that omit the flag still decode.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;

/// Error produced when an envelope reports failure or carries no payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// The server reported a failure; the message is whatever free text it sent.
    #[error("{message}")]
    Failure {
        /// Server-provided message, or a placeholder when the body had none.
        message: String,
        /// Application-level status code from the envelope, if present.
        status_code: Option<i32>,
    },
    /// The server reported success but sent no `data` payload.
    #[error("server reported success but returned no data")]
    MissingData,
}

/// Standard response wrapper: `{ data, success|status, message, statusCode }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Payload, absent on failures and on bodyless successes.
    #[serde(default)]
    pub data: Option<T>,
    /// Boolean outcome flag (newer endpoints).
    #[serde(default)]
    pub success: Option<bool>,
    /// String outcome flag, "success" or "error" (older endpoints).
    #[serde(default)]
    pub status: Option<String>,
    /// Free-text outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Application-level status code; not always the HTTP status.
    #[serde(default)]
    pub status_code: Option<i32>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the envelope reports a successful outcome.
    ///
    /// `success` wins when present, then the `status` string, then the
    /// presence of `data`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        if let Some(flag) = self.success {
            return flag;
        }
        if let Some(status) = &self.status {
            return status.eq_ignore_ascii_case("success") || status.eq_ignore_ascii_case("ok");
        }
        self.data.is_some()
    }

    /// Unwrap the payload, converting reported failures into [`EnvelopeError`].
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Failure`] when the envelope reports failure,
    /// and [`EnvelopeError::MissingData`] on a success with no payload.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if !self.is_success() {
            return Err(EnvelopeError::Failure {
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_owned()),
                status_code: self.status_code,
            });
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }

    /// Check the outcome flag only, for endpoints that return no payload
    /// (deletes, mark-read, and similar acknowledgements).
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Failure`] when the envelope reports failure.
    pub fn ack(self) -> Result<(), EnvelopeError> {
        if self.is_success() {
            return Ok(());
        }
        Err(EnvelopeError::Failure {
            message: self
                .message
                .unwrap_or_else(|| "request failed".to_owned()),
            status_code: self.status_code,
        })
    }
}
