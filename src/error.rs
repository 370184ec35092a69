use thiserror::Error;

/// Unified error type for shipit operations
#[derive(Error, Debug)]
pub enum ShipitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("External command failed: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in shipit
pub type Result<T> = std::result::Result<T, ShipitError>;

impl ShipitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ShipitError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ShipitError::Manifest(msg.into())
    }

    /// Create a changelog error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        ShipitError::Changelog(msg.into())
    }

    /// Create an external command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        ShipitError::Command(msg.into())
    }
}
