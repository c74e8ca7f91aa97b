//! Error types for sitelift.
//!
//! Library crates use [`SiteliftError`] via `thiserror`. Collaborators that
//! render page sections wrap their own failures with
//! [`SiteliftError::collaborator`] so they pass through the exporter untouched.

use std::path::PathBuf;

/// Top-level error type for all sitelift operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteliftError {
    /// Malformed input rejected before any mutation or I/O.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The output sink failed while a document was being written.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    /// Failure raised by an element factory or page renderer.
    #[error(transparent)]
    Collaborator(Box<dyn std::error::Error + Send + Sync>),

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SiteliftError>;

impl SiteliftError {
    /// Create an invalid-argument error from any displayable message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a collaborator's own error without altering its message or source chain.
    pub fn collaborator(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Collaborator(err.into())
    }
}
