//! Learning-outcome findings and the verifiability report

use crate::staleness::round_percent;
use crate::tier::VerbTier;

/// How lines without a recognized leading verb are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassifierMode {
    /// Every retained line is scored; unknown verbs count as weak
    #[default]
    Lenient,

    /// Only lines whose leading verb is in a vocabulary are scored
    Strict,
}

impl ClassifierMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierMode::Lenient => "lenient",
            ClassifierMode::Strict => "strict",
        }
    }

    /// Parse a mode from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lenient" => Some(ClassifierMode::Lenient),
            "strict" => Some(ClassifierMode::Strict),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClassifierMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid classifier mode: {}", s))
    }
}

/// One scored outcome line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeFinding {
    /// Line as it appeared in the document (trimmed)
    pub original_text: String,

    /// Line with list markers and outcome labels removed
    pub cleaned_text: String,

    /// Lower-cased first token of the cleaned line
    pub leading_verb: String,

    /// Tier the verb was classified into
    pub tier: VerbTier,

    /// Points awarded (derived from the tier)
    pub points: u8,
}

impl OutcomeFinding {
    /// Create a finding; points follow from the tier
    pub fn new(
        original_text: impl Into<String>,
        cleaned_text: impl Into<String>,
        leading_verb: impl Into<String>,
        tier: VerbTier,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            cleaned_text: cleaned_text.into(),
            leading_verb: leading_verb.into(),
            tier,
            points: tier.points(),
        }
    }
}

/// Ordered findings plus the aggregate verifiability percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiabilityReport {
    /// Findings in document order (duplicates kept)
    pub findings: Vec<OutcomeFinding>,

    /// `round(sum(points) / (count * 3) * 100)`, or `None` with no findings
    pub percentage: Option<u8>,
}

impl VerifiabilityReport {
    /// Build a report, computing the percentage from the findings
    pub fn new(findings: Vec<OutcomeFinding>) -> Self {
        let percentage = if findings.is_empty() {
            None
        } else {
            let total: u32 = findings.iter().map(|f| u32::from(f.points)).sum();
            let max = findings.len() as f64 * f64::from(VerbTier::MAX_POINTS);
            Some(round_percent(f64::from(total) / max * 100.0))
        };

        Self { findings, percentage }
    }

    /// True when no outcome was scored
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Sum of points over all findings
    pub fn total_points(&self) -> u32 {
        self.findings.iter().map(|f| u32::from(f.points)).sum()
    }

    /// Number of findings in a tier
    pub fn count_by_tier(&self, tier: VerbTier) -> usize {
        self.findings.iter().filter(|f| f.tier == tier).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(verb: &str, tier: VerbTier) -> OutcomeFinding {
        let text = format!("{} something", verb);
        OutcomeFinding::new(text.clone(), text, verb, tier)
    }

    #[test]
    fn test_points_follow_tier() {
        assert_eq!(finding("design", VerbTier::Strong).points, 3);
        assert_eq!(finding("know", VerbTier::Weak).points, 1);
    }

    #[test]
    fn test_percentage() {
        let report = VerifiabilityReport::new(vec![
            finding("design", VerbTier::Strong),
            finding("analyze", VerbTier::Medium),
            finding("know", VerbTier::Weak),
        ]);
        // 6 of 9 points
        assert_eq!(report.percentage, Some(67));
        assert_eq!(report.total_points(), 6);
        assert_eq!(report.count_by_tier(VerbTier::Medium), 1);
    }

    #[test]
    fn test_single_weak_finding() {
        let report = VerifiabilityReport::new(vec![finding("understand", VerbTier::Weak)]);
        assert_eq!(report.percentage, Some(33));
    }

    #[test]
    fn test_empty_report_has_no_score() {
        let report = VerifiabilityReport::new(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.percentage, None);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(ClassifierMode::parse("Strict"), Some(ClassifierMode::Strict));
        assert_eq!(ClassifierMode::default(), ClassifierMode::Lenient);
        assert!("other".parse::<ClassifierMode>().is_err());
    }
}
