//! Forensic Hub Domain Layer
//!
//! Value types shared by the analyzers, the link checker and the presenter.
//! Like every record here, results are derived from the input text of one
//! invocation and carry no identity or lifecycle of their own.
//!
//! ## Key Concepts
//!
//! - **Staleness**: how old the years referenced by a document are
//! - **Verifiability**: how measurable stated learning outcomes are, judged by
//!   the strength tier of their leading verb
//! - **Link rot**: cited URLs that no longer resolve
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and scoring rules only
//! - Text scanning lives in `forensic-analyzer`, network probing in
//!   `forensic-linkcheck`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod link;
pub mod outcome;
pub mod staleness;
pub mod task;
pub mod tier;

// Re-exports for convenience
pub use link::{LinkCategory, LinkSummary, UrlCheckResult};
pub use outcome::{ClassifierMode, OutcomeFinding, VerifiabilityReport};
pub use staleness::YearStatistics;
pub use task::AnalysisTask;
pub use tier::VerbTier;
