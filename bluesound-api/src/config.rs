//! Configuration for the controller and its status poller

use crate::error::ConfigError;
use http_client::{ClientConfig, DEFAULT_PORT};
use std::time::Duration;

/// Configuration for a [`Controller`](crate::Controller)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// TCP port of the BluOS HTTP API
    /// Default: 11000
    pub port: u16,

    /// Delay between two full poll cycles (`Status` then `SyncStatus`)
    /// Default: 500 milliseconds
    pub poll_interval: Duration,

    /// Timeout for a whole request, `None` for no limit
    /// Default: 10 seconds
    pub request_timeout: Option<Duration>,

    /// Timeout for establishing the connection, `None` for no limit
    /// Default: 5 seconds
    pub connect_timeout: Option<Duration>,

    /// How long `close()` waits for the poller task to exit, which includes
    /// any request still in flight
    /// Default: 15 seconds
    pub shutdown_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            poll_interval: Duration::from_millis(500),
            request_timeout: Some(Duration::from_secs(10)),
            connect_timeout: Some(Duration::from_secs(5)),
            shutdown_timeout: Duration::from_secs(15),
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Short intervals and timeouts, for tests and local development
    pub fn fast_polling() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
            request_timeout: Some(Duration::from_secs(2)),
            connect_timeout: Some(Duration::from_secs(1)),
            shutdown_timeout: Duration::from_secs(3),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }

        if self.shutdown_timeout.is_zero() {
            return Err(ConfigError::ZeroShutdownTimeout);
        }

        if self.request_timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ConfigError::ZeroRequestTimeout);
        }

        Ok(())
    }

    /// HTTP client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            request_timeout: self.request_timeout,
            connect_timeout: self.connect_timeout,
        }
    }
}
