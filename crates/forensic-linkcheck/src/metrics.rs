//! Metrics collected across link-check batches

use forensic_domain::{LinkCategory, UrlCheckResult};
use std::collections::{BTreeMap, HashMap};

/// Counters accumulated by a [`LinkChecker`](crate::LinkChecker)
///
/// Tracks results per category, probe failures per kind and batch timings.
#[derive(Debug, Clone, Default)]
pub struct LinkCheckMetrics {
    /// Results per category
    pub categories: HashMap<LinkCategory, usize>,

    /// Probe failures per kind (`timeout`, `connect`, ...)
    pub failures: BTreeMap<String, usize>,

    /// Batches completed
    pub batch_count: usize,

    /// Total batch runtime in milliseconds
    pub total_runtime_ms: u64,
}

impl LinkCheckMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified result
    pub fn record_result(&mut self, result: &UrlCheckResult) {
        *self.categories.entry(result.category).or_insert(0) += 1;
    }

    /// Record a probe failure by kind
    pub fn record_failure(&mut self, kind: &str) {
        *self.failures.entry(kind.to_string()).or_insert(0) += 1;
    }

    /// Record a completed batch
    pub fn record_batch(&mut self, elapsed_ms: u64) {
        self.batch_count += 1;
        self.total_runtime_ms += elapsed_ms;
    }

    /// Fold another set of metrics into this one
    pub fn merge(&mut self, other: &LinkCheckMetrics) {
        for (category, count) in &other.categories {
            *self.categories.entry(*category).or_insert(0) += count;
        }
        for (kind, count) in &other.failures {
            *self.failures.entry(kind.clone()).or_insert(0) += count;
        }
        self.batch_count += other.batch_count;
        self.total_runtime_ms += other.total_runtime_ms;
    }

    /// Results recorded for a category
    pub fn count(&self, category: LinkCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    /// Results recorded across all categories
    pub fn total_checked(&self) -> usize {
        self.categories.values().sum()
    }

    /// Probe failures across all kinds
    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        self.categories.clear();
        self.failures.clear();
        self.batch_count = 0;
        self.total_runtime_ms = 0;
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Link Check Metrics Summary".to_string(),
            "==========================".to_string(),
            format!("Batches: {}", self.batch_count),
            format!("Total runtime: {}ms", self.total_runtime_ms),
            String::new(),
            "Results by category:".to_string(),
        ];

        for category in LinkCategory::ALL {
            lines.push(format!("  {}: {}", category, self.count(category)));
        }
        lines.push(format!("  Total: {}", self.total_checked()));

        if !self.failures.is_empty() {
            lines.push(String::new());
            lines.push("Probe failures:".to_string());
            for (kind, count) in &self.failures {
                lines.push(format!("  {}: {}", kind, count));
            }
        }

        lines.join("\n")
    }
}
