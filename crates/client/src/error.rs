//! Errors surfaced by the Smart Invoice API client.

use thiserror::Error;

/// Errors that can occur when talking to the Smart Invoice backend.
///
/// There is deliberately no retry or offline handling here: every failure
/// is reported to the caller exactly once, per request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport or body-decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The session cookie is missing, expired, or rejected (HTTP 401).
    #[error("unauthorized: no valid session, log in first")]
    Unauthorized,

    /// Resource not found (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success response, with the backend's message.
    #[error("server error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the backend's error body, or the status reason.
        message: String,
    },

    /// Input rejected before any request was made.
    #[error("invalid input: {0}")]
    Validation(String),
}
