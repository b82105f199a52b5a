use bluesound_parser::DecodeError;
use http_client::TransportError;
use std::fmt::Display;
use thiserror::Error;

/// High-level API errors for BluOS commands
///
/// Wraps the lower layers so callers of [`Controller::execute`](crate::Controller::execute)
/// can tell a device that could not be reached from one that answered with
/// something unexpected.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed
    ///
    /// Covers connection failures, timeouts, non-200 statuses and unreadable
    /// bodies. See [`TransportError`] for the exact kind.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The device answered but the body did not match the endpoint's schema
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A command parameter was rejected before any request was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),

    /// The device answered but did not confirm the requested change
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ApiError {
    /// True for failures where retrying the same request later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Parameter validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Required parameter '{parameter}' is missing")]
    MissingParameter { parameter: String },
}

impl ValidationError {
    pub fn range_error(
        parameter: &str,
        min: impl Display,
        max: impl Display,
        value: impl Display,
    ) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn missing(parameter: &str) -> Self {
        Self::MissingParameter {
            parameter: parameter.to_string(),
        }
    }
}

/// Poller lifecycle errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollerError {
    #[error("Poller has already been started")]
    AlreadyStarted,

    #[error("Poller exited before completing its first cycle")]
    ExitedBeforeReady,

    #[error("Poller did not stop within the shutdown timeout")]
    ShutdownTimeout,

    #[error("Poller task failed: {0}")]
    TaskFailed(String),
}

/// Invalid [`ControllerConfig`](crate::ControllerConfig) values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("poll_interval must be greater than zero")]
    ZeroPollInterval,

    #[error("shutdown_timeout must be greater than zero")]
    ZeroShutdownTimeout,

    #[error("request_timeout must be greater than zero when set")]
    ZeroRequestTimeout,

    #[error("port must not be zero")]
    ZeroPort,
}
