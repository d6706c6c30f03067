//! Error types for the fshelper client.
//!
//! This module defines `FsError`, the unified error type returned by every
//! fallible operation in the crate.
//!
//! Failures coming back from the remote API fall into two groups: transport
//! failures (`Http`) and status failures (`HttpStatus`). Nothing is retried.
//!
//! # Security
//!
//! Response bodies are scrubbed of the credential secret before they are
//! stored in an error. Use `sanitize_message()` when building messages from
//! external text.

use thiserror::Error;

/// Maximum length of a response body kept inside `FsError::HttpStatus`.
pub const MAX_ERROR_BODY_LEN: usize = 500;

/// Unified error type for all fshelper operations.
#[derive(Error, Debug)]
pub enum FsError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The (truncated, sanitized) response body.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response did not contain the expected envelope key.
    #[error("response is missing the `{key}` envelope")]
    Envelope {
        /// The envelope key that was expected.
        key: String,
    },

    /// Input validation failed before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// An endpoint was used while no session was open.
    #[error("no open session - call RequestService::enter first")]
    SessionClosed,
}

impl FsError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FsError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FsError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FsError::Validation(message.into())
    }

    /// Creates an envelope error for a missing key.
    pub fn envelope(key: impl Into<String>) -> Self {
        FsError::Envelope { key: key.into() }
    }

    /// Builds a status error, truncating and sanitizing the body.
    pub fn http_status(status: reqwest::StatusCode, body: &str, secret: &str) -> Self {
        let body = Self::sanitize_message(body, secret);
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            let mut cut = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...[truncated]", &body[..cut])
        } else {
            body
        };
        FsError::HttpStatus { status, body }
    }

    /// Returns the HTTP status for status failures.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FsError::HttpStatus { status, .. } => Some(*status),
            FsError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the remote API answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(reqwest::StatusCode::NOT_FOUND)
    }

    /// Returns true for transport-level failures (connect, timeout, body read).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FsError::Http(_))
    }

    /// Replaces every occurrence of `secret` in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}
