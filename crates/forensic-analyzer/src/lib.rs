//! Forensic Analyzer
//!
//! Pure text analyzers for academic documents.
//!
//! # Overview
//!
//! Two analyzers turn already-extracted document text into scored findings:
//!
//! - **Staleness**: finds the years a syllabus or reference list mentions and
//!   reports how many of them fall before a cutoff
//! - **Verifiability**: reads learning outcomes line by line and tiers each one
//!   by the strength of its leading verb
//!
//! Neither analyzer performs I/O or keeps state between calls.
//!
//! # Architecture
//!
//! ```text
//! Text → StalenessAnalyzer  → YearStatistics
//! Text → OutcomeClassifier  → VerifiabilityReport
//! ```
//!
//! # Example Usage
//!
//! ```
//! use forensic_analyzer::{OutcomeClassifier, StalenessAnalyzer, VerbVocabulary};
//! use forensic_domain::ClassifierMode;
//!
//! let stats = StalenessAnalyzer::new(10)
//!     .with_reference_year(2024)
//!     .analyze("Smith (1990); Jones (2020)")
//!     .unwrap();
//! assert_eq!(stats.oldest_year, 1990);
//!
//! let classifier = OutcomeClassifier::new(VerbVocabulary::standard(), ClassifierMode::Lenient);
//! let report = classifier.classify("1. Design a bridge\n2. Know the rules").unwrap();
//! assert_eq!(report.percentage, Some(67));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod outcomes;
mod staleness;
mod vocabulary;

#[cfg(test)]
mod tests;

pub use config::{AnalyzerConfig, VocabularyPreset};
pub use error::AnalyzerError;
pub use outcomes::{strip_list_marker, OutcomeClassifier};
pub use staleness::{extract_years, StalenessAnalyzer};
pub use vocabulary::VerbVocabulary;
