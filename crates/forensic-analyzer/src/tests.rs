//! End-to-end tests for the analyzers

#[cfg(test)]
mod tests {
    use crate::{AnalyzerConfig, AnalyzerError, OutcomeClassifier, StalenessAnalyzer, VerbVocabulary};
    use forensic_domain::{ClassifierMode, VerbTier};
    use proptest::prelude::*;

    const SYLLABUS: &str = "\
CS 101 Syllabus (Fall 2024)
Required reading: Knuth (1990), Sedgewick (1995).
Supplementary: Cormen et al. 2000; Skiena 2010; Kleinberg 2020.
Room 1850 is closed until 2150.
";

    const OUTCOMES: &str = "\
Learning Outcomes

1. Design a new system
2) Analyze the data
- Understand the theory
LO4: Evaluate competing designs
Course meets on Tuesdays

3.
";

    #[test]
    fn test_staleness_reference_scenario() {
        let analyzer = StalenessAnalyzer::new(10).with_reference_year(2024);
        let stats = analyzer.analyze("1990 1995 2000 2010 2020").unwrap();

        assert_eq!(stats.oldest_year, 1990);
        assert_eq!(stats.median_year, 2000);
        assert_eq!(stats.percent_old, 80);
        assert_eq!(stats.staleness_score, 44);
    }

    #[test]
    fn test_staleness_on_syllabus_ignores_out_of_range() {
        let analyzer = StalenessAnalyzer::new(10).with_reference_year(2024);
        let stats = analyzer.analyze(SYLLABUS).unwrap();

        // 2024 1990 1995 2000 2010 2020; 1850 and 2150 never match
        assert_eq!(stats.years_considered, 6);
        assert_eq!(stats.oldest_year, 1990);
        assert_eq!(stats.median_year, 2010);
        assert_eq!(stats.percent_old, 67);
        assert_eq!(stats.staleness_score, 53);
    }

    #[test]
    fn test_staleness_without_years() {
        let analyzer = StalenessAnalyzer::default();
        let err = analyzer.analyze("Week 1: introductions").unwrap_err();
        assert_eq!(err, AnalyzerError::NoYearsFound);
        assert!(err.is_empty_result());
        assert_eq!(err.to_string(), "No valid years found.");
    }

    #[test]
    fn test_lenient_classification() {
        let classifier = OutcomeClassifier::default();
        let report = classifier.classify(OUTCOMES).unwrap();

        let verbs: Vec<&str> = report.findings.iter().map(|f| f.leading_verb.as_str()).collect();
        assert_eq!(verbs, vec!["learning", "design", "analyze", "understand", "evaluate", "course"]);
        assert_eq!(report.count_by_tier(VerbTier::Strong), 2);
        assert_eq!(report.count_by_tier(VerbTier::Medium), 1);
        assert_eq!(report.count_by_tier(VerbTier::Weak), 3);
        // 1 + 3 + 2 + 1 + 3 + 1 = 11 of 18
        assert_eq!(report.total_points(), 11);
        assert_eq!(report.percentage, Some(61));
    }

    #[test]
    fn test_strict_classification_drops_unknown_verbs() {
        let classifier = OutcomeClassifier::new(VerbVocabulary::standard(), ClassifierMode::Strict);
        let report = classifier.classify(OUTCOMES).unwrap();

        let verbs: Vec<&str> = report.findings.iter().map(|f| f.leading_verb.as_str()).collect();
        assert_eq!(verbs, vec!["design", "analyze", "understand", "evaluate"]);
        // 3 + 2 + 1 + 3 = 9 of 12
        assert_eq!(report.percentage, Some(75));
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let classifier = OutcomeClassifier::default();
        let report = classifier.classify("Build a compiler\nKnow the syntax\nBuild a compiler").unwrap();
        assert_eq!(report.findings.len(), 3);
        assert_eq!(report.findings[0], report.findings[2]);
    }

    #[test]
    fn test_no_outcome_lines() {
        let classifier = OutcomeClassifier::default();
        assert_eq!(classifier.classify("  \n\n\t\n"), Err(AnalyzerError::NoOutcomesFound));
        assert_eq!(classifier.classify("1.\n2)\n-"), Err(AnalyzerError::NoOutcomesFound));
    }

    #[test]
    fn test_strict_with_no_recognized_verbs() {
        let classifier = OutcomeClassifier::new(VerbVocabulary::standard(), ClassifierMode::Strict);
        let err = classifier.classify("Office hours: Monday\nGrading policy").unwrap_err();
        assert_eq!(err, AnalyzerError::NoQualifyingOutcomes { lines_scanned: 2 });
    }

    #[test]
    fn test_config_drives_classifier() {
        let config = AnalyzerConfig::lenient();
        let report = config.outcome_classifier().classify("Create a portfolio").unwrap();
        assert_eq!(report.findings[0].tier, VerbTier::Strong);

        let report = AnalyzerConfig::default().outcome_classifier().classify("Create a portfolio").unwrap();
        assert_eq!(report.findings[0].tier, VerbTier::Weak);
    }

    #[test]
    fn test_crlf_input() {
        let classifier = OutcomeClassifier::default();
        let report = classifier.classify("1. Design it\r\n2. Apply it\r\n").unwrap();
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[1].cleaned_text, "Apply it");
    }

    #[test]
    fn test_lone_carriage_return_splits_lines() {
        let classifier = OutcomeClassifier::default();
        let report = classifier.classify("1. Design it\r2. Know it").unwrap();
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].leading_verb, "design");
        assert_eq!(report.findings[1].leading_verb, "know");
        assert_eq!(report.percentage, Some(67));
    }

    proptest! {
        #[test]
        fn prop_numbering_never_changes_the_verb(n in 1u32..500, sep in prop::sample::select(vec![".", ")", "-", ":", ""])) {
            let classifier = OutcomeClassifier::default();
            let line = format!("{}{} Analyze the data", n, sep);
            let finding = classifier.classify_line(&line).unwrap();
            prop_assert_eq!(finding.leading_verb, "analyze");
            prop_assert_eq!(finding.tier, VerbTier::Medium);
        }

        #[test]
        fn prop_percentage_in_range(lines in proptest::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,3}", 1..20)) {
            let classifier = OutcomeClassifier::default();
            let report = classifier.classify(&lines.join("\n")).unwrap();
            let pct = report.percentage.unwrap();
            prop_assert!((33..=100).contains(&pct));
        }
    }
}
