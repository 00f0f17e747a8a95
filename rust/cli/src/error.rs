//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>` so failures can be
//! propagated with `?` and mapped to an exit code in one place.

use pokerhand_engine::errors::EngineError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Error raised by the card engine
    Engine(EngineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
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

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_engine_error_display_and_source() {
        let error = CliError::from(EngineError::EmptyDeck);
        assert_eq!(error.to_string(), "Engine error: No cards left in the deck");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_input_has_no_source() {
        let error = CliError::InvalidInput("target must be >= 1".to_string());
        assert_eq!(error.to_string(), "Invalid input: target must be >= 1");
        assert!(error.source().is_none());
    }
}
