//! Private HTTP transport for BluOS device communication
//!
//! This crate provides the minimal GET-and-read-body transport used by the
//! Bluesound controller. Every control and query endpoint on a BluOS player is
//! a plain `GET http://<host>:11000/<Endpoint>[?query]` returning an XML body,
//! so the transport only has to build the URL, insist on `200 OK` and hand the
//! raw bytes back. Decoding is left to the caller.

mod error;

pub use error::TransportError;

use async_trait::async_trait;
use std::time::Duration;

/// Port the BluOS HTTP API listens on
pub const DEFAULT_PORT: u16 = 11000;

/// Something that can fetch a device endpoint
///
/// `HttpClient` is the network implementation. The controller only ever sees
/// this trait, which keeps the poller and the command surface testable
/// against in-memory transports.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET for `path` (relative to the device base URL) and return the full body
    async fn get(&self, path: &str) -> Result<Vec<u8>, TransportError>;

    /// Base URL requests are resolved against, for logging
    fn base_url(&self) -> &str;
}

/// Timeouts applied to every request
///
/// `None` leaves the corresponding reqwest default in place, which for the
/// request timeout means no timeout at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total time allowed for a single request, including reading the body
    pub request_timeout: Option<Duration>,
    /// Time allowed to establish the TCP connection
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(10)),
            connect_timeout: Some(Duration::from_secs(5)),
        }
    }
}

/// A reqwest-backed transport bound to one device
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client for `base_url` (e.g. `http://192.168.1.20:11000/`)
    ///
    /// A trailing slash is added when missing so paths can be appended directly.
    pub fn new(base_url: impl Into<String>, config: ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: normalize_base_url(base_url.into()),
            client,
        })
    }

    /// Create a client for a device host name or IP on the standard BluOS port
    pub fn for_host(host: &str, config: ClientConfig) -> Result<Self, TransportError> {
        Self::new(device_base_url(host, DEFAULT_PORT), config)
    }

    /// Full URL for an endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::trace!("{} returned {} bytes", url, body.len());
        Ok(body.to_vec())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Base URL for a device reachable at `host:port`
pub fn device_base_url(host: &str, port: u16) -> String {
    format!("http://{}:{}/", host, port)
}

fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}
