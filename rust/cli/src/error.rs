//! Error types for the CLI application.
//!
//! ## Batch Validation Errors
//!
//! `BatchValidationError<T>` pairs a failed item with its message. The `rank`
//! command uses it to report every rejected input line at once.

use pokerhand_engine::errors::HandError;
use std::fmt;

/// Custom error type for CLI operations.
///
/// Command handlers return this so `run` can map any failure to an exit code
/// after a single `Error:` line on stderr.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input, including hands that fail validation
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

// Validation failures are the user's input; an invariant violation is ours.
impl From<HandError> for CliError {
    fn from(error: HandError) -> Self {
        match error {
            HandError::InternalInvariantViolation { .. } => CliError::Engine(error.to_string()),
            _ => CliError::InvalidInput(error.to_string()),
        }
    }
}

impl From<crate::config::ConfigError> for CliError {
    fn from(error: crate::config::ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., `usize` for a line
///   number). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use pokerhand_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "line 3",
///     message: "Duplicate card AS in hand".to_string(),
/// };
/// assert_eq!(error.to_string(), "line 3: Duplicate card AS in hand");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
