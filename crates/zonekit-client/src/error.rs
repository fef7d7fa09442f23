//! Registry service client error types.

use thiserror::Error;

/// Errors from registry service API calls.
///
/// Every failed call carries the endpoint that produced it so log lines
/// and user-facing notifications can say which operation went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body could not be deserialized.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Client construction or configuration failure.
    #[error("client configuration error: {reason}")]
    Config { reason: String },
}

impl ApiError {
    /// True when the failure is a transport error (service unreachable,
    /// timed out) as opposed to an explicit rejection.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }
}
