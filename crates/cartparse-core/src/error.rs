//! Error types for the Cartparse core library
//!
//! Validation problems are not errors while validating; they only become an
//! [`Error::Validation`] when a caller asks for a parsed cart.

use cartparse_schemas::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Cartparse operations
#[derive(Error, Debug)]
pub enum Error {
    /// The source file could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document broke one or more schema rules; no items were built
    #[error("Cart validation failed with {} error(s)", .0.len())]
    Validation(#[from] ValidationErrors),

    /// A row could not be turned into a cart item
    #[error("Malformed line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Validation errors carried by this error, if any
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
