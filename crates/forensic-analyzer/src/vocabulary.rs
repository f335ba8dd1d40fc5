//! Verb vocabularies used to tier learning outcomes

use forensic_domain::VerbTier;
use std::collections::HashMap;

const STANDARD_WEAK: &[&str] = &["understand", "know", "appreciate"];
const STANDARD_MEDIUM: &[&str] = &["explain", "analyze", "apply"];
const STANDARD_STRONG: &[&str] = &["design", "build", "evaluate"];

// Bloom's taxonomy: remember/understand states are weak, apply/analyze
// actions medium, evaluate/create actions strong.
const BLOOM_WEAK: &[&str] = &[
    "understand", "know", "appreciate", "learn", "comprehend", "grasp",
    "recognize", "realize", "remember", "recall", "believe", "familiarize",
];
const BLOOM_MEDIUM: &[&str] = &[
    "explain", "analyze", "apply", "describe", "identify", "compare",
    "contrast", "classify", "demonstrate", "interpret", "summarize",
    "discuss", "calculate", "solve", "illustrate", "differentiate",
    "distinguish", "examine", "implement", "use", "list", "define",
    "organize", "outline",
];
const BLOOM_STRONG: &[&str] = &[
    "design", "build", "evaluate", "create", "develop", "construct",
    "formulate", "justify", "critique", "assess", "synthesize", "propose",
    "plan", "compose", "produce", "invent", "defend", "integrate",
];

/// Lexical verb-to-tier lookup
///
/// Membership is an exact match on a lower-cased token. Each verb belongs to
/// exactly one tier; when a verb is listed under several tiers the strongest
/// one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbVocabulary {
    verbs: HashMap<String, VerbTier>,
}

impl VerbVocabulary {
    /// The three-verbs-per-tier vocabulary
    pub fn standard() -> Self {
        Self::from_lists(STANDARD_WEAK, STANDARD_MEDIUM, STANDARD_STRONG)
    }

    /// Extended vocabulary following Bloom's taxonomy
    ///
    /// Every standard verb keeps its standard tier.
    pub fn bloom() -> Self {
        Self::from_lists(BLOOM_WEAK, BLOOM_MEDIUM, BLOOM_STRONG)
    }

    /// Build a vocabulary from caller-supplied lists
    pub fn custom<S: AsRef<str>>(weak: &[S], medium: &[S], strong: &[S]) -> Self {
        Self::from_lists(weak, medium, strong)
    }

    fn from_lists<S: AsRef<str>>(weak: &[S], medium: &[S], strong: &[S]) -> Self {
        let mut verbs = HashMap::new();
        // Later inserts overwrite earlier ones, so stronger tiers win.
        for (tier, list) in [(VerbTier::Weak, weak), (VerbTier::Medium, medium), (VerbTier::Strong, strong)] {
            for verb in list {
                let verb = verb.as_ref().trim().to_lowercase();
                if !verb.is_empty() {
                    verbs.insert(verb, tier);
                }
            }
        }
        Self { verbs }
    }

    /// Tier of a verb, if the verb is known
    pub fn tier_of(&self, verb: &str) -> Option<VerbTier> {
        self.verbs.get(verb).copied()
    }

    /// True if the verb belongs to any tier
    pub fn contains(&self, verb: &str) -> bool {
        self.verbs.contains_key(verb)
    }

    /// Verbs of one tier, sorted alphabetically
    pub fn verbs(&self, tier: VerbTier) -> Vec<&str> {
        let mut verbs: Vec<&str> = self
            .verbs
            .iter()
            .filter(|(_, t)| **t == tier)
            .map(|(v, _)| v.as_str())
            .collect();
        verbs.sort_unstable();
        verbs
    }

    /// Number of known verbs
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// True if no verb is known
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl Default for VerbVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
