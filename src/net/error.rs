//! Errors returned by the request client.

/// Failure of a single API round trip.
///
/// `Display` is what ends up in the user-facing notification, so the
/// [`ApiError::Status`] message is the server's status text and nothing else.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request paths are relative to the base URL and must start with `/`.
    #[error("invalid API path: {0}")]
    InvalidPath(String),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{status_text}")]
    Status { status: u16, status_text: String },
    /// A success response body could not be parsed as the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, falling back to `HTTP <code>` when the transport
    /// reported no status text (HTTP/2 responses carry none).
    #[must_use]
    pub fn status(status: u16, status_text: &str) -> Self {
        let status_text = if status_text.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            status_text.to_owned()
        };
        Self::Status { status, status_text }
    }

    /// HTTP status code, if the server answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
