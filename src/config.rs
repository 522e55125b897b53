//! Process configuration loaded from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::options::TransportOptions;
use crate::providers::flight_search::DEFAULT_HOST;
use crate::providers::Endpoint;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    Missing(&'static str),

    #[error("Environment variable {var} is not an absolute URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("Environment variable {var} is not a socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("Environment variable {var} is not a positive number of seconds: {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Everything the server needs before it can start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub weather: Endpoint,
    pub flights: Endpoint,
    /// Value of the `x-rapidapi-host` header.
    pub flights_host: String,
    pub bind: SocketAddr,
    /// Overrides every provider's default request timeout.
    pub http_timeout: Option<Duration>,
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let weather = Endpoint::new(
            require_url(require("TOMORROW_IO_BASE_URL")?, "TOMORROW_IO_BASE_URL")?,
            require("TOMORROW_IO_API_KEY")?,
        );
        let flights = Endpoint::new(
            require_url(require("RAPID_BASE_URL")?, "RAPID_BASE_URL")?,
            require("RAPID_API_KEY")?,
        );

        let flights_host = get("RAPID_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let bind_value = get("WAYFARER_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                var: "WAYFARER_BIND",
                value: bind_value.clone(),
            })?;

        let http_timeout = get("WAYFARER_HTTP_TIMEOUT_SECS")
            .map(|value| match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout {
                    var: "WAYFARER_HTTP_TIMEOUT_SECS",
                    value,
                }),
            })
            .transpose()?;

        Ok(Self {
            weather,
            flights,
            flights_host,
            bind,
            http_timeout,
        })
    }

    pub fn transport_options(&self) -> TransportOptions {
        match self.http_timeout {
            Some(timeout) => TransportOptions::new().with_timeout(timeout),
            None => TransportOptions::new(),
        }
    }
}

fn require_url(value: String, var: &'static str) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value),
        Ok(url) => Err(ConfigError::InvalidUrl {
            var,
            reason: format!("unsupported scheme {}", url.scheme()),
        }),
        Err(e) => Err(ConfigError::InvalidUrl {
            var,
            reason: e.to_string(),
        }),
    }
}
