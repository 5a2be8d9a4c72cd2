//! Configuration error type.

use derive_more::{Display, Error};
use tracing::instrument;

/// Invalid or unreadable configuration, with location tracking.
///
/// Raised for unknown difficulty codes and for session config files that
/// cannot be read or parsed. Never defaulted away silently.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}
