//! Common error types for the analysis archive services

use thiserror::Error;

/// Common result type for archive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the archive services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested analysis or audio file has no backing file
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requested name failed the path safety check
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// I/O, parse, or schema failure while reading analysis data
    #[error("Retrieval error: {0}")]
    Retrieval(String),
}
