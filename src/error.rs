use thiserror::Error;

/// Unified error type for nextver operations
#[derive(Error, Debug)]
pub enum NextverError {
    #[error("invalid semantic version format")]
    InvalidFormat,

    #[error("no version in the form \"{prefix}x.y.z\" has been found")]
    NoVersionFound { prefix: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("running \"git tag\": {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in nextver
pub type Result<T> = std::result::Result<T, NextverError>;

impl NextverError {
    /// Create a "no version found" error for the given tag prefix
    pub fn no_version(prefix: impl Into<String>) -> Self {
        NextverError::NoVersionFound {
            prefix: prefix.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextverError::Config(msg.into())
    }

    /// Create a git command error with context
    pub fn git_command(msg: impl Into<String>) -> Self {
        NextverError::GitCommand(msg.into())
    }
}
