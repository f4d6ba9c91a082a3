use thiserror::Error;

/// Unified error type for release-tiers operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid reference name: {0}")]
    RefFormat(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Git operation failed: {0}")]
    Vcs(String),

    #[error("Release hosting operation failed: {0}")]
    Hosting(String),
}

/// Convenience type alias for Results in release-tiers
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a reference-format error with context
    pub fn ref_format(msg: impl Into<String>) -> Self {
        ReleaseError::RefFormat(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a subprocess error with context
    pub fn command(msg: impl Into<String>) -> Self {
        ReleaseError::Command(msg.into())
    }

    /// Create a version-control error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        ReleaseError::Vcs(msg.into())
    }

    /// Create a hosting error with context
    pub fn hosting(msg: impl Into<String>) -> Self {
        ReleaseError::Hosting(msg.into())
    }
}
