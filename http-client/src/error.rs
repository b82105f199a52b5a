//! Error types for the HTTP transport

use thiserror::Error;

/// Errors that can occur while talking to a device over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived (connection, DNS, timeout)
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device answered with anything other than 200 OK
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body could not be read to completion
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// True for failures that happened before any response was received
    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Network(_))
    }
}
