//! Error types for Giphy API calls.

use std::time::Duration;

/// Maximum length of an API error message kept in [`GiphyError::Api`].
const MAX_ERROR_MESSAGE_LEN: usize = 200;

/// Errors that can occur while talking to the Giphy API.
#[derive(Debug, thiserror::Error)]
pub enum GiphyError {
    /// A required argument was missing or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Sanitized response body.
        message: String,
    },

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response without any records.
    #[error("{0}")]
    EmptyResult(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error (e.g., writing output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL could not be opened in a browser.
    #[error("Couldn't open in browser: {0}")]
    Open(String),
}

impl GiphyError {
    /// Returns true for errors raised while performing the HTTP exchange
    /// (bad status, connection failure, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Network(_) | Self::Timeout(_)
        )
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classifies a reqwest error, splitting out timeouts.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Network(err)
        }
    }
}

/// Result type alias for Giphy operations.
pub type Result<T> = std::result::Result<T, GiphyError>;

/// Extracts a readable message from an error body.
///
/// Giphy error bodies look like `{"meta": {"msg": "...", "status": 403}}`, but
/// proxies in front of it often answer with HTML or plain text.
pub(crate) fn sanitize_error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/meta/msg")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        });

    let text = from_json.unwrap_or_else(|| body.split_whitespace().collect::<Vec<_>>().join(" "));
    if text.is_empty() {
        return "empty response body".into();
    }
    if text.chars().count() > MAX_ERROR_MESSAGE_LEN {
        let truncated: String = text.chars().take(MAX_ERROR_MESSAGE_LEN).collect();
        return format!("{truncated}...");
    }
    text
}
