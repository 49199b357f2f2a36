//! Error types for Tipboard

use thiserror::Error;

/// Main error type for Tipboard operations
#[derive(Error, Debug)]
pub enum TipboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure retrieving the tip collection
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Reasons a tip collection could not be retrieved
#[derive(Error, Debug)]
pub enum LoadError {
    /// Transport-level failure (DNS, connection refused, reset, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// The payload was not a JSON array of tips
    #[error("malformed payload: {0}")]
    Parse(String),

    /// Local file could not be read
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The source location was not usable
    #[error("invalid source location: {0}")]
    InvalidLocation(String),
}

impl From<serde_json::Error> for TipboardError {
    fn from(e: serde_json::Error) -> Self {
        TipboardError::Serialization(e.to_string())
    }
}

/// Result type alias for Tipboard operations
pub type Result<T> = std::result::Result<T, TipboardError>;
