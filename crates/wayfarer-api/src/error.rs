use thiserror::Error;

/// Top-level error type for the `wayfarer-api` crate.
///
/// Covers every failure mode at the HTTP boundary. `wayfarer-core`
/// absorbs these into `bool`/`Option`/sentinel results -- consumers of
/// the store never see a raised failure, only this crate's direct
/// callers do.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend rejected the session token (HTTP 401).
    ///
    /// The stored token has already been evicted by the time this is
    /// returned; the next request goes out anonymous.
    #[error("Unauthorized -- session token rejected and evicted")]
    Unauthorized,

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-2xx response with a structured or raw error message.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the session token was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns `true` if this is a transient transport error.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// The backend-reported message, if the failure carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
