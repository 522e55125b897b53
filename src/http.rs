//! HTTP client utilities for making requests to provider APIs.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::client::{Fetch, FetchError, FetchRequest};
use crate::options::TransportOptions;

/// Build a configured HTTP client from transport options.
pub fn build_http_client(transport_options: &TransportOptions) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    match transport_options {
        TransportOptions::Http { timeout } => {
            if let Some(t) = timeout {
                builder = builder.timeout(*t);
            }
        }
    }

    builder.build()
}

/// Extension trait for Response that logs response body.
#[async_trait]
pub trait ResponseExt {
    /// Get response text and log it. Consumes the response.
    async fn text_logged(self) -> Result<String, reqwest::Error>;
}

#[async_trait]
impl ResponseExt for reqwest::Response {
    async fn text_logged(self) -> Result<String, reqwest::Error> {
        let text = self.text().await?;
        tracing::debug!("API response ({} bytes):\n{}", text.len(), text);
        Ok(text)
    }
}

/// Check that a request can be sent at all: an absolute http(s) URL and a
/// non-zero timeout.
pub fn validate_request(request: &FetchRequest) -> Result<Url, FetchError> {
    let url = Url::parse(&request.url)
        .map_err(|e| FetchError::InvalidRequest(format!("{}: {}", request.url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidRequest(format!(
            "unsupported URL scheme: {}",
            url.scheme()
        )));
    }

    if request.timeout.is_zero() {
        return Err(FetchError::InvalidRequest(
            "timeout must be greater than zero".to_string(),
        ));
    }

    Ok(url)
}

/// [`Fetch`] implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(transport_options: TransportOptions) -> Result<Self, FetchError> {
        let client = build_http_client(&transport_options)?;
        Ok(Self { client })
    }

    async fn send(&self, url: Url, request: &FetchRequest) -> Result<Value, FetchError> {
        let mut builder = self
            .client
            .get(url)
            .query(&request.query)
            .timeout(request.timeout);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text_logged().await?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_json(&self, request: FetchRequest) -> Result<Value, FetchError> {
        let result = match validate_request(&request) {
            Ok(url) => {
                tracing::debug!("GET {} ({} query params)", url, request.query.len());
                self.send(url, &request).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            match e {
                FetchError::HttpStatus { status, body } => {
                    tracing::error!("HTTP error: {} - {}", status, body)
                }
                other => tracing::error!("API request to {} failed: {}", request.url, other),
            }
        }

        result
    }
}
