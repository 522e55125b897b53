//! Transport configuration for outbound provider requests.

use std::time::Duration;

/// Transport configuration options.
///
/// Controls how requests to an upstream provider are sent over the network.
/// Proxies are taken from the standard `HTTP_PROXY`/`HTTPS_PROXY` variables
/// by the underlying client.
#[derive(Debug, Clone)]
pub enum TransportOptions {
    /// HTTP transport configuration
    Http {
        /// Request timeout. If None, each provider's own default is used.
        timeout: Option<Duration>,
    },
}

impl Default for TransportOptions {
    fn default() -> Self {
        TransportOptions::Http { timeout: None }
    }
}

impl TransportOptions {
    /// Create new default HTTP transport options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, duration: Duration) -> Self {
        match &mut self {
            TransportOptions::Http { timeout } => *timeout = Some(duration),
        }
        self
    }

    /// The configured timeout, or `fallback` when none was set.
    pub fn timeout_or(&self, fallback: Duration) -> Duration {
        match self {
            TransportOptions::Http { timeout } => timeout.unwrap_or(fallback),
        }
    }
}
