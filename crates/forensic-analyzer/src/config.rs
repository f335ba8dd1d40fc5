//! Configuration for the analyzers

use crate::outcomes::OutcomeClassifier;
use crate::staleness::{StalenessAnalyzer, DEFAULT_THRESHOLD_YEARS, MIN_YEAR};
use crate::vocabulary::VerbVocabulary;
use forensic_domain::ClassifierMode;
use serde::{Deserialize, Serialize};

/// Which verb vocabulary the outcome classifier uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyPreset {
    /// Three verbs per tier
    #[default]
    Standard,
    /// Extended Bloom's taxonomy lists
    Bloom,
    /// Lists given in the configuration
    Custom,
}

/// Configuration for the staleness analyzer and outcome classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Years older than `reference_year - staleness_threshold_years` are old
    #[serde(default = "default_threshold")]
    pub staleness_threshold_years: i32,

    /// Reference year; the current calendar year when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,

    /// Lenient scores every line; strict drops lines without a known verb
    #[serde(default, with = "mode_serde")]
    pub classifier_mode: ClassifierMode,

    /// Verb vocabulary preset
    #[serde(default)]
    pub vocabulary: VocabularyPreset,

    /// Weak verbs (custom vocabulary only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weak_verbs: Vec<String>,

    /// Medium verbs (custom vocabulary only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medium_verbs: Vec<String>,

    /// Strong verbs (custom vocabulary only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strong_verbs: Vec<String>,
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD_YEARS
}

impl Default for AnalyzerConfig {
    /// Ten-year threshold, current year, lenient mode, standard verbs
    fn default() -> Self {
        Self {
            staleness_threshold_years: DEFAULT_THRESHOLD_YEARS,
            reference_year: None,
            classifier_mode: ClassifierMode::Lenient,
            vocabulary: VocabularyPreset::Standard,
            weak_verbs: Vec::new(),
            medium_verbs: Vec::new(),
            strong_verbs: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Strict preset: only lines led by a known verb are scored
    pub fn strict() -> Self {
        Self {
            classifier_mode: ClassifierMode::Strict,
            ..Self::default()
        }
    }

    /// Lenient preset: every line scored, against the Bloom vocabulary
    pub fn lenient() -> Self {
        Self {
            classifier_mode: ClassifierMode::Lenient,
            vocabulary: VocabularyPreset::Bloom,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.staleness_threshold_years < 0 {
            return Err("staleness_threshold_years must not be negative".to_string());
        }
        if let Some(year) = self.reference_year {
            if !(MIN_YEAR..=2099).contains(&year) {
                return Err(format!("reference_year {} outside {}..=2099", year, MIN_YEAR));
            }
        }
        if self.vocabulary == VocabularyPreset::Custom
            && self.weak_verbs.is_empty()
            && self.medium_verbs.is_empty()
            && self.strong_verbs.is_empty()
        {
            return Err("custom vocabulary requires at least one verb list".to_string());
        }
        Ok(())
    }

    /// Build the verb vocabulary this configuration selects
    pub fn build_vocabulary(&self) -> VerbVocabulary {
        match self.vocabulary {
            VocabularyPreset::Standard => VerbVocabulary::standard(),
            VocabularyPreset::Bloom => VerbVocabulary::bloom(),
            VocabularyPreset::Custom => {
                VerbVocabulary::custom(&self.weak_verbs, &self.medium_verbs, &self.strong_verbs)
            }
        }
    }

    /// Build a staleness analyzer from this configuration
    pub fn staleness_analyzer(&self) -> StalenessAnalyzer {
        let analyzer = StalenessAnalyzer::new(self.staleness_threshold_years);
        match self.reference_year {
            Some(year) => analyzer.with_reference_year(year),
            None => analyzer,
        }
    }

    /// Build an outcome classifier from this configuration
    pub fn outcome_classifier(&self) -> OutcomeClassifier {
        OutcomeClassifier::new(self.build_vocabulary(), self.classifier_mode)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// `ClassifierMode` lives in the dependency-free domain crate, so it is
/// (de)serialized here through its string form.
mod mode_serde {
    use forensic_domain::ClassifierMode;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(mode: &ClassifierMode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mode.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ClassifierMode, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClassifierMode::parse(&s).ok_or_else(|| D::Error::custom(format!("invalid classifier mode: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forensic_domain::VerbTier;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.staleness_threshold_years, 10);
        assert_eq!(config.classifier_mode, ClassifierMode::Lenient);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(AnalyzerConfig::strict().validate().is_ok());
        assert!(AnalyzerConfig::lenient().validate().is_ok());
        assert_eq!(AnalyzerConfig::strict().classifier_mode, ClassifierMode::Strict);
        assert_eq!(AnalyzerConfig::lenient().vocabulary, VocabularyPreset::Bloom);
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = AnalyzerConfig::default();
        config.staleness_threshold_years = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_reference_year() {
        let mut config = AnalyzerConfig::default();
        config.reference_year = Some(1850);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_custom_vocabulary() {
        let mut config = AnalyzerConfig::default();
        config.vocabulary = VocabularyPreset::Custom;
        assert!(config.validate().is_err());

        config.strong_verbs = vec!["Create".to_string()];
        assert!(config.validate().is_ok());
        assert_eq!(config.build_vocabulary().tier_of("create"), Some(VerbTier::Strong));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AnalyzerConfig::strict();
        config.reference_year = Some(2024);
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();

        assert_eq!(parsed.classifier_mode, ClassifierMode::Strict);
        assert_eq!(parsed.reference_year, Some(2024));
        assert_eq!(parsed.staleness_threshold_years, config.staleness_threshold_years);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = AnalyzerConfig::from_toml("classifier_mode = \"strict\"").unwrap();
        assert_eq!(parsed.classifier_mode, ClassifierMode::Strict);
        assert_eq!(parsed.staleness_threshold_years, 10);
        assert_eq!(parsed.vocabulary, VocabularyPreset::Standard);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(AnalyzerConfig::from_toml("classifier_mode = \"fuzzy\"").is_err());
    }

    #[test]
    fn test_builds_configured_analyzers() {
        let mut config = AnalyzerConfig::strict();
        config.reference_year = Some(2020);
        assert_eq!(config.staleness_analyzer().reference_year(), 2020);
        assert_eq!(config.outcome_classifier().mode(), ClassifierMode::Strict);
    }
}
