//! Error types and handling for the CLI
//!
//! Every failure maps to a distinct process exit code. A document that fails
//! validation or a consistency check exits with `2`.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from cartparse-core
    #[error("{0}")]
    Core(#[from] cartparse_core::Error),

    /// The document broke the cart schema
    #[error("{} is not a valid cart document ({} error(s))", path.display(), count)]
    ValidationFailed { path: PathBuf, count: usize },

    /// A cart JSON document disagrees with itself or its source
    #[error("{} is inconsistent ({} issue(s))", path.display(), count)]
    Inconsistent { path: PathBuf, count: usize },

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(cartparse_core::Error::Validation(_)) => 2,
            Self::Core(cartparse_core::Error::Io { .. }) => 1,
            Self::Core(_) => 8,
            Self::ValidationFailed { .. } | Self::Inconsistent { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context with a closure (only evaluated on error)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::Other {
            message: format!("{}: {}", f(), e.into()),
        })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartparse_schemas::{ValidationError, ValidationErrors};

    #[test]
    fn test_exit_codes() {
        let failed = Error::ValidationFailed {
            path: PathBuf::from("cart.csv"),
            count: 3,
        };
        assert_eq!(failed.exit_code(), 2);
        assert_eq!(failed.to_string(), "cart.csv is not a valid cart document (3 error(s))");

        let core = Error::from(cartparse_core::Error::Validation(ValidationErrors::from(vec![
            ValidationError::empty_string(1, 0, ""),
        ])));
        assert_eq!(core.exit_code(), 2);

        assert_eq!(Error::FileNotFound { path: PathBuf::from("x") }.exit_code(), 3);
        assert_eq!(Error::config("bad").exit_code(), 5);
        assert_eq!(Error::other("boom").exit_code(), 99);
    }

    #[test]
    fn test_should_show_help() {
        assert!(Error::invalid_args("nope").should_show_help());
        assert!(!Error::other("nope").should_show_help());
    }

    #[test]
    fn test_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        let err = result
            .with_context(|| "Failed to save cart".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to save cart: IO error: disk full");
    }

    #[test]
    fn test_format_error_without_color() {
        let err = Error::config("missing section");
        assert_eq!(
            format_error(&err, false),
            "Error: Configuration error: missing section"
        );
    }
}
