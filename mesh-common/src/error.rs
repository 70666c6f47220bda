//! Common error types for MetaMesh plugins

use thiserror::Error;

/// Common result type for MetaMesh operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across MetaMesh plugin services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure talking to another mesh service
    #[error("Network error: {0}")]
    Network(String),

    /// Meta-core answered with a non-success status
    #[error("Metadata store error {status}: {message}")]
    Store { status: u16, message: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
