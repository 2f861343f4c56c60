//! Error types for the CLI application.
//!
//! Parse-time command statuses and move-time engine errors are reported to
//! the player and never end a session; `CliError` covers what does.

use std::fmt;

use patience_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, reading input, config files)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
