// Shared transport configuration for building reqwest::Client instances.

use std::time::Duration;

/// Transport tuning for the shared HTTP client.
///
/// No request timeout is applied by default: a hung request is bounded
/// only by the OS transport. Embedders that want an upper bound can set
/// one here.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder().user_agent("wayfarer/0.1.0");

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(crate::error::Error::Transport)
    }

    /// Set an overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
