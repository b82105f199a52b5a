//! Opt-in logging setup for applications using the Bluesound SDK
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call one of the functions here once at
//! startup.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// How much the installed subscriber prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// Leave the global dispatcher untouched
    Silent,
    /// One compact line per event, `info` and above
    Development,
    /// Multi-line events at `debug`, tagged with file, line and thread
    Debug,
}

impl LoggingMode {
    /// Parse the value of `BLUESOUND_LOG_MODE`; unknown values mean `Silent`
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => LoggingMode::Development,
            "debug" => LoggingMode::Debug,
            _ => LoggingMode::Silent,
        }
    }

    fn default_level(self) -> &'static str {
        match self {
            LoggingMode::Debug => "debug",
            _ => "info",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber was already installed
    #[error("could not install tracing subscriber: {0}")]
    TracingInit(String),

    /// `BLUESOUND_LOG_LEVEL` or `RUST_LOG` is not a valid filter
    #[error("bad log filter directive: {0}")]
    InvalidFilter(String),
}

/// Install a global `tracing` subscriber for `mode`
///
/// ```rust,ignore
/// bluesound_api::logging::init_logging(LoggingMode::Development)?;
/// ```
///
/// The level comes from `BLUESOUND_LOG_LEVEL` when set, otherwise `RUST_LOG`,
/// otherwise the mode's own default. Fails if a subscriber already exists.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let layer = match mode {
        LoggingMode::Silent => return Ok(()),
        LoggingMode::Development => fmt::layer().with_target(false).compact().boxed(),
        LoggingMode::Debug => fmt::layer()
            .pretty()
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    };

    Registry::default()
        .with(layer)
        .with(create_env_filter(mode.default_level())?)
        .try_init()
        .map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Initialize logging from `BLUESOUND_LOG_MODE` (`silent`, `development`, `debug`)
///
/// Defaults to silent when the variable is missing.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var("BLUESOUND_LOG_MODE")
        .map(|value| LoggingMode::from_env_value(&value))
        .unwrap_or(LoggingMode::Silent);

    init_logging(mode)
}

/// `BLUESOUND_LOG_LEVEL`, then `RUST_LOG`, then `default_level`
fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = std::env::var("BLUESOUND_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    EnvFilter::try_new(&directives).map_err(|e| LoggingError::InvalidFilter(e.to_string()))
}

/// True once any global subscriber is in place, ours or the application's
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
