//! Learning-outcome verifiability classification

use crate::error::AnalyzerError;
use crate::vocabulary::VerbVocabulary;
use forensic_domain::{ClassifierMode, OutcomeFinding, VerbTier, VerifiabilityReport};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Runs of numbering or bullets, each with an optional `.`, `)`, `-` or `:`
static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?:\d+|[•◦▪●‣*\-–])\s*[.):\-]?\s*)*").expect("invalid MARKER_PATTERN regex")
});

/// "Outcome"/"LO" label, only when a number, separator or whitespace follows it
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:outcome|lo)(?:\s*\d+(?:\.\d+)*\s*[.):\-]?|\s*[.):\-]|\s+)\s*")
        .expect("invalid LABEL_PATTERN regex")
});

/// Remove list numbering, bullets and an outcome label from the start of a line
///
/// `"1. Analyze data"`, `"LO2: Analyze data"` and `"Analyze data"` all strip
/// to `"Analyze data"`.
pub fn strip_list_marker(line: &str) -> &str {
    let rest = strip_prefix(&MARKER_PATTERN, line);
    let rest = strip_prefix(&LABEL_PATTERN, rest);
    strip_prefix(&MARKER_PATTERN, rest).trim()
}

fn strip_prefix<'a>(pattern: &Regex, text: &'a str) -> &'a str {
    match pattern.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Tiers outcome lines by the strength of their leading verb
#[derive(Debug, Clone)]
pub struct OutcomeClassifier {
    vocabulary: VerbVocabulary,
    mode: ClassifierMode,
}

impl OutcomeClassifier {
    /// Create a classifier
    pub fn new(vocabulary: VerbVocabulary, mode: ClassifierMode) -> Self {
        Self { vocabulary, mode }
    }

    /// Mode this classifier runs in
    pub fn mode(&self) -> ClassifierMode {
        self.mode
    }

    /// Vocabulary this classifier looks verbs up in
    pub fn vocabulary(&self) -> &VerbVocabulary {
        &self.vocabulary
    }

    /// Classify a single line
    ///
    /// Returns `None` for blank lines, lines that are only a list marker, and
    /// (in strict mode) lines whose leading verb is not in the vocabulary.
    pub fn classify_line(&self, line: &str) -> Option<OutcomeFinding> {
        let original = line.trim();
        if original.is_empty() {
            return None;
        }

        let cleaned = strip_list_marker(original);
        let verb = cleaned.split_whitespace().next()?.to_lowercase();

        let tier = match (self.vocabulary.tier_of(&verb), self.mode) {
            (Some(tier), _) => tier,
            (None, ClassifierMode::Lenient) => VerbTier::Weak,
            (None, ClassifierMode::Strict) => {
                trace!("Dropping line with unrecognized verb '{}'", verb);
                return None;
            }
        };

        Some(OutcomeFinding::new(original, cleaned, verb, tier))
    }

    /// Classify every line of the text
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::NoOutcomesFound`] when the text has no line left
    ///   after blank lines and bare markers are discarded
    /// - [`AnalyzerError::NoQualifyingOutcomes`] when strict mode dropped
    ///   every remaining line
    pub fn classify(&self, text: &str) -> Result<VerifiabilityReport, AnalyzerError> {
        let candidates: Vec<&str> = text
            .split(is_line_break)
            .map(str::trim)
            .filter(|line| !line.is_empty() && !strip_list_marker(line).is_empty())
            .collect();

        if candidates.is_empty() {
            return Err(AnalyzerError::NoOutcomesFound);
        }

        let findings: Vec<OutcomeFinding> = candidates
            .iter()
            .filter_map(|line| self.classify_line(line))
            .collect();

        debug!(
            "Outcome scan ({}): {} candidate lines, {} scored",
            self.mode.as_str(),
            candidates.len(),
            findings.len()
        );

        if findings.is_empty() {
            return Err(AnalyzerError::NoQualifyingOutcomes {
                lines_scanned: candidates.len(),
            });
        }

        Ok(VerifiabilityReport::new(findings))
    }
}

/// Line boundaries: `\n`, `\r` (so `\r\n` too), and the Unicode separators
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl Default for OutcomeClassifier {
    fn default() -> Self {
        Self::new(VerbVocabulary::standard(), ClassifierMode::Lenient)
    }
}
