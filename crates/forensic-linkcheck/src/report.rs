//! Batch results and CSV export

use crate::error::LinkCheckError;
use forensic_domain::{LinkSummary, UrlCheckResult};
use std::path::Path;
use tracing::info;

/// CSV header row
pub const CSV_HEADER: &str = "url,status,category";

/// Results of one link-check batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkReport {
    /// One result per probed URL, in selection order
    pub results: Vec<UrlCheckResult>,

    /// Counts per category over `results`
    pub summary: LinkSummary,

    /// URLs selected but never probed because the batch was cancelled
    pub skipped: usize,

    /// Whether the batch stopped early
    pub cancelled: bool,

    /// Wall-clock duration of the batch
    pub elapsed_ms: u64,
}

impl LinkReport {
    /// Build a report, deriving the summary from `results`
    pub fn new(results: Vec<UrlCheckResult>, skipped: usize, cancelled: bool, elapsed_ms: u64) -> Self {
        let summary = LinkSummary::from_results(&results);
        Self {
            results,
            summary,
            skipped,
            cancelled,
            elapsed_ms,
        }
    }

    /// Whether no URL was probed
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Render the results as CSV, one row per result
    ///
    /// An absent status is written as an empty field.
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + self.results.len() * 48);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for result in &self.results {
            let status = result.http_status.map(|s| s.to_string()).unwrap_or_default();
            out.push_str(&csv_field(&result.url));
            out.push(',');
            out.push_str(&status);
            out.push(',');
            out.push_str(result.category.as_str());
            out.push('\n');
        }
        out
    }

    /// Write [`to_csv`](Self::to_csv) output to `path`
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), LinkCheckError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv())?;
        info!("Wrote {} link results to {}", self.results.len(), path.display());
        Ok(())
    }
}

/// Quote a field when it contains a comma, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forensic_domain::LinkCategory;

    fn sample() -> LinkReport {
        LinkReport::new(
            vec![
                UrlCheckResult::new("https://ok.example/", Some(200)),
                UrlCheckResult::new("https://gone.example/", Some(410)),
                UrlCheckResult::failed("https://slow.example/", "timed out"),
            ],
            0,
            false,
            12,
        )
    }

    #[test]
    fn test_summary_is_derived() {
        let report = sample();
        assert_eq!(report.summary.get(LinkCategory::Ok), 1);
        assert_eq!(report.summary.get(LinkCategory::Dead), 1);
        assert_eq!(report.summary.get(LinkCategory::Unreachable), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_to_csv() {
        let csv = sample().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "url,status,category",
                "https://ok.example/,200,OK",
                "https://gone.example/,410,DEAD",
                "https://slow.example/,,UNREACHABLE",
            ]
        );
    }

    #[test]
    fn test_to_csv_quotes_special_fields() {
        let report = LinkReport::new(
            vec![UrlCheckResult::new("https://a.example/?q=1,2&t=\"x\"", Some(200))],
            0,
            false,
            0,
        );
        let csv = report.to_csv();
        assert!(csv.contains("\"https://a.example/?q=1,2&t=\"\"x\"\"\",200,OK"));
    }

    #[test]
    fn test_empty_report_csv_is_header_only() {
        assert_eq!(LinkReport::default().to_csv(), "url,status,category\n");
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv");

        sample().write_csv(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, sample().to_csv());
    }

    #[test]
    fn test_write_csv_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("links.csv");

        let err = sample().write_csv(&path).unwrap_err();
        assert!(matches!(err, LinkCheckError::Io(_)));
    }
}
