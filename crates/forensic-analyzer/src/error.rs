//! Error types for the analyzers

use thiserror::Error;

/// Errors that can occur during analysis
///
/// The `No*` variants are recoverable "empty result" conditions: the caller
/// reports them to the user instead of a score.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// No year in 1900..=reference year was found
    #[error("No valid years found.")]
    NoYearsFound,

    /// The text had no non-blank outcome lines
    #[error("No outcomes found.")]
    NoOutcomesFound,

    /// Strict mode dropped every line
    #[error("No outcomes with a recognized action verb found ({lines_scanned} lines scanned).")]
    NoQualifyingOutcomes {
        /// Non-blank lines that were inspected
        lines_scanned: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// True for the empty-result conditions that are warnings, not failures
    pub fn is_empty_result(&self) -> bool {
        !matches!(self, AnalyzerError::Config(_))
    }
}
