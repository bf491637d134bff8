//! Error types for the reservation wizard library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The draft failed one or more field rules
    #[error("Reservation is incomplete: {0}")]
    Validation(ValidationErrors),
    /// The submission request failed or was rejected
    #[error("Submission failed: {message}")]
    Transport { message: String },
    /// Submit was requested away from the summary step
    #[error("Submission is only available on the final step (current step: {step})")]
    NotAtTerminalStep { step: &'static str },
    /// A submission is already awaiting its response
    #[error("A submission is already in progress")]
    SubmissionInFlight,
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a transport error from any displayable cause.
    pub fn transport(message: impl fmt::Display) -> Self {
        Self::Transport {
            message: message.to_string(),
        }
    }
}

/// Extension trait for mapping I/O results onto [`WizardError::FileSystem`].
pub trait FileSystemResultExt<T> {
    /// Attach the path the failing operation touched.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| WizardError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
