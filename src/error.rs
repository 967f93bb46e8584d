//! Error types for the converter.
//!
//! Defines the error codes and types used throughout the crate for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes identifying the kinds of failure a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No usable input filename was supplied.
    /// Trigger: empty or whitespace-only filename; surfaced before any
    /// file access is attempted.
    InvalidInput,

    /// Reading the input or writing the output failed.
    /// Trigger: missing or unreadable file, input bytes that are not
    /// valid UTF-8, or a failed write to the WAV stream.
    IoFailure,

    /// The run was cancelled at the interactive prompt.
    /// A distinct exit path, not treated as an error.
    Cancelled,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::IoFailure => "IO_FAILURE",
            ErrorCode::Cancelled => "CANCELLED",
        }
    }

    /// Returns a human-readable description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "No usable input filename was supplied",
            ErrorCode::IoFailure => "The input could not be read or the output could not be written",
            ErrorCode::Cancelled => "The conversion was cancelled at the prompt",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for conversion operations.
#[derive(Debug)]
pub struct ConvertError {
    /// The error code identifying the kind of failure.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConvertError {
    /// Creates a new ConvertError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new ConvertError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_INPUT error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, reason)
    }

    /// Creates an IO_FAILURE error with an underlying cause.
    pub fn io(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(ErrorCode::IoFailure, message, source)
    }

    /// Creates the CANCELLED marker for the prompt's cancel path.
    pub fn cancelled() -> Self {
        Self::new(ErrorCode::Cancelled, "Cancelled by user")
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidInput.as_str(), "INVALID_INPUT");
        assert_eq!(ErrorCode::IoFailure.as_str(), "IO_FAILURE");
        assert_eq!(ErrorCode::Cancelled.as_str(), "CANCELLED");
    }

    #[test]
    fn error_code_descriptions_not_empty() {
        assert!(!ErrorCode::InvalidInput.description().is_empty());
        assert!(!ErrorCode::IoFailure.description().is_empty());
        assert!(!ErrorCode::Cancelled.description().is_empty());
    }

    #[test]
    fn convert_error_display() {
        let err = ConvertError::invalid_input("No input filename supplied");
        assert!(err.to_string().contains("INVALID_INPUT"));
        assert!(err.to_string().contains("No input filename supplied"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ConvertError::io("Failed to read input.txt: gone", cause);
        assert_eq!(err.code, ErrorCode::IoFailure);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn cancellation_is_its_own_code() {
        let err = ConvertError::cancelled();
        assert_eq!(err.code, ErrorCode::Cancelled);
        assert!(err.source.is_none());
    }
}
