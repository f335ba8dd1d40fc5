//! Link check results and their classification

/// Health category of a probed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    /// Status in 200-299
    Ok,

    /// Status 404 or 410
    Dead,

    /// Any other status, or no status at all
    Unreachable,
}

impl LinkCategory {
    /// All categories in report order
    pub const ALL: [LinkCategory; 3] = [LinkCategory::Ok, LinkCategory::Dead, LinkCategory::Unreachable];

    /// Classify an optional HTTP status
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(200..=299) => LinkCategory::Ok,
            Some(404 | 410) => LinkCategory::Dead,
            _ => LinkCategory::Unreachable,
        }
    }

    /// Upper-case label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCategory::Ok => "OK",
            LinkCategory::Dead => "DEAD",
            LinkCategory::Unreachable => "UNREACHABLE",
        }
    }
}

impl std::fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheckResult {
    /// URL as extracted from the document
    pub url: String,

    /// Final HTTP status, absent when the probe failed
    pub http_status: Option<u16>,

    /// Category derived from `http_status`
    pub category: LinkCategory,

    /// Why the probe produced no status (timeout, connection error, ...)
    pub failure: Option<String>,
}

impl UrlCheckResult {
    /// Result for a probe that produced a status code
    pub fn new(url: impl Into<String>, http_status: Option<u16>) -> Self {
        Self {
            url: url.into(),
            http_status,
            category: LinkCategory::from_status(http_status),
            failure: None,
        }
    }

    /// Result for a probe that failed before any status was received
    pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new(url, None)
        }
    }
}

/// Count of results per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// Reachable links
    pub ok: usize,
    /// 404/410 links
    pub dead: usize,
    /// Everything else
    pub unreachable: usize,
}

impl LinkSummary {
    /// Tally a slice of results
    pub fn from_results(results: &[UrlCheckResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result.category);
        }
        summary
    }

    /// Count one more result in a category
    pub fn record(&mut self, category: LinkCategory) {
        match category {
            LinkCategory::Ok => self.ok += 1,
            LinkCategory::Dead => self.dead += 1,
            LinkCategory::Unreachable => self.unreachable += 1,
        }
    }

    /// Count for one category
    pub fn get(&self, category: LinkCategory) -> usize {
        match category {
            LinkCategory::Ok => self.ok,
            LinkCategory::Dead => self.dead,
            LinkCategory::Unreachable => self.unreachable,
        }
    }

    /// Total number of results
    pub fn total(&self) -> usize {
        self.ok + self.dead + self.unreachable
    }
}
