//! Staleness scan over the years a document mentions

use crate::error::AnalyzerError;
use chrono::Datelike;
use forensic_domain::YearStatistics;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Earliest year the scan accepts
pub const MIN_YEAR: i32 = 1900;

/// Default age (in years) beyond which a reference counts as old
pub const DEFAULT_THRESHOLD_YEARS: i32 = 10;

/// Four-digit years in 1900-2099, delimited by word boundaries
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:19\d{2}|20\d{2})\b").expect("invalid YEAR_PATTERN regex")
});

/// Extract every 1900-2099 year token from text, in document order
///
/// No range filtering against a reference year happens here.
pub fn extract_years(text: &str) -> Vec<i32> {
    YEAR_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Scans text for years and summarizes how old they are
#[derive(Debug, Clone, Copy)]
pub struct StalenessAnalyzer {
    threshold_years: i32,
    reference_year: Option<i32>,
}

impl StalenessAnalyzer {
    /// Create an analyzer; the reference year defaults to the current year
    pub fn new(threshold_years: i32) -> Self {
        Self {
            threshold_years,
            reference_year: None,
        }
    }

    /// Pin the reference year instead of using the current calendar year
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// The reference year this analyzer compares against
    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Age threshold in years
    pub fn threshold_years(&self) -> i32 {
        self.threshold_years
    }

    /// Analyze text and compute year statistics
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::NoYearsFound`] when no year within
    /// `1900..=reference_year` appears in the text.
    pub fn analyze(&self, text: &str) -> Result<YearStatistics, AnalyzerError> {
        let reference_year = self.reference_year();
        let matched = extract_years(text);
        let years: Vec<i32> = matched
            .iter()
            .copied()
            .filter(|y| (MIN_YEAR..=reference_year).contains(y))
            .collect();

        debug!(
            "Staleness scan: {} year tokens matched, {} within {}..={}",
            matched.len(),
            years.len(),
            MIN_YEAR,
            reference_year
        );

        YearStatistics::from_years(&years, reference_year, self.threshold_years)
            .ok_or(AnalyzerError::NoYearsFound)
    }
}

impl Default for StalenessAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_YEARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_years_in_order() {
        let years = extract_years("Published 2010, revised 1995 and again in 2020.");
        assert_eq!(years, vec![2010, 1995, 2020]);
    }

    #[test]
    fn test_extract_rejects_out_of_pattern_years() {
        assert!(extract_years("In 1850 and 2150 nothing happened").is_empty());
    }

    #[test]
    fn test_extract_requires_word_boundaries() {
        assert!(extract_years("ISBN 9781990123 and code x2019y").is_empty());
        assert_eq!(extract_years("(2019)"), vec![2019]);
        assert_eq!(extract_years("2019-2020"), vec![2019, 2020]);
    }

    #[test]
    fn test_future_years_are_discarded() {
        let analyzer = StalenessAnalyzer::new(10).with_reference_year(2024);
        let stats = analyzer.analyze("2020 2030 2099").unwrap();
        assert_eq!(stats.years_considered, 1);
        assert_eq!(stats.oldest_year, 2020);
    }

    #[test]
    fn test_no_years() {
        let analyzer = StalenessAnalyzer::default().with_reference_year(2024);
        assert_eq!(analyzer.analyze("no dates here, only 42"), Err(AnalyzerError::NoYearsFound));
    }

    #[test]
    fn test_only_future_years_is_empty() {
        let analyzer = StalenessAnalyzer::default().with_reference_year(2000);
        assert_eq!(analyzer.analyze("2001 2050"), Err(AnalyzerError::NoYearsFound));
    }

    #[test]
    fn test_default_reference_year_is_current() {
        let analyzer = StalenessAnalyzer::default();
        assert_eq!(analyzer.reference_year(), chrono::Local::now().year());
        assert_eq!(analyzer.threshold_years(), DEFAULT_THRESHOLD_YEARS);
    }
}
