//! Error types for link checking

use thiserror::Error;

/// Errors that can occur while setting up a link check or exporting its report
///
/// Individual probe failures are not errors; see [`crate::ProbeFailure`].
#[derive(Error, Debug)]
pub enum LinkCheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Report export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
