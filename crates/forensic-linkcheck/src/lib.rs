//! Forensic Link Checker
//!
//! Finds the URLs a reference list cites and checks whether they still
//! resolve.
//!
//! # Overview
//!
//! - **Extraction**: `http`/`https` URLs are pulled out of raw text,
//!   deduplicated and capped (100 by default)
//! - **Probing**: each URL gets exactly one HEAD request (redirects followed)
//!   with a hard timeout; no retries
//! - **Classification**: 2xx is OK, 404/410 is DEAD, everything else,
//!   including a failed probe, is UNREACHABLE
//! - **Reporting**: per-category summary and a `url,status,category` CSV
//!
//! A failing probe never aborts the batch. Failures become an UNREACHABLE
//! result with no status and a failure reason.
//!
//! # Concurrency
//!
//! Probes run with bounded concurrency (`concurrency = 1` checks URLs one at a
//! time). Results are returned in the order the URLs were selected, and the
//! progress callback sees a strictly increasing completion count. A
//! [`CancellationToken`] stops new probes from being issued; probes already in
//! flight run to completion.
//!
//! # Usage
//!
//! ```no_run
//! use forensic_linkcheck::{LinkCheckConfig, LinkChecker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = LinkChecker::from_config(LinkCheckConfig::default())?;
//!     let report = checker
//!         .check_text("See https://example.com/paper.pdf", |p| {
//!             eprintln!("{}/{}", p.completed, p.total);
//!         })
//!         .await;
//!
//!     println!("{} dead links", report.summary.dead);
//!     print!("{}", report.to_csv());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [link_check]
//! max_urls = 100
//! timeout_secs = 5.0
//! concurrency = 8
//! max_redirects = 10
//! ```

#![warn(missing_docs)]

mod checker;
mod config;
mod error;
mod extract;
mod metrics;
mod probe;
mod report;

pub use checker::{LinkChecker, Progress};
pub use config::LinkCheckConfig;
pub use error::LinkCheckError;
pub use extract::{extract_urls, select_urls};
pub use metrics::LinkCheckMetrics;
pub use probe::{HttpProber, ProbeFailure, ProbeOutcome, Prober};
pub use report::LinkReport;

pub use tokio_util::sync::CancellationToken;
