//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file type has no extractor
    #[error("Unsupported file type: {0} (expected txt, pdf, docx or doc)")]
    UnsupportedFileType(String),

    /// An external text converter failed
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// Analyzer error
    #[error("Analysis error: {0}")]
    Analyzer(#[from] forensic_analyzer::AnalyzerError),

    /// Link check error
    #[error("Link check error: {0}")]
    LinkCheck(#[from] forensic_linkcheck::LinkCheckError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
