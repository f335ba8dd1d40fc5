//! Verb tier module - strength classes for outcome verbs

/// Strength tier of a learning-outcome verb
///
/// Tiers are ordered from least to most measurable:
/// - Weak: internal states that cannot be observed ("understand", "know")
/// - Medium: observable but bounded actions ("explain", "analyze")
/// - Strong: productive or judging actions ("design", "evaluate")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbTier {
    /// Not directly measurable (1 point)
    Weak,

    /// Observable (2 points)
    Medium,

    /// Produces or judges an artifact (3 points)
    Strong,
}

impl VerbTier {
    /// All tiers, weakest first
    pub const ALL: [VerbTier; 3] = [VerbTier::Weak, VerbTier::Medium, VerbTier::Strong];

    /// Points awarded to the strongest tier
    pub const MAX_POINTS: u8 = 3;

    /// Points awarded to a finding in this tier
    pub fn points(&self) -> u8 {
        match self {
            VerbTier::Weak => 1,
            VerbTier::Medium => 2,
            VerbTier::Strong => 3,
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbTier::Weak => "weak",
            VerbTier::Medium => "medium",
            VerbTier::Strong => "strong",
        }
    }

    /// Parse a tier from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weak" => Some(VerbTier::Weak),
            "medium" => Some(VerbTier::Medium),
            "strong" => Some(VerbTier::Strong),
            _ => None,
        }
    }
}

impl std::fmt::Display for VerbTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VerbTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verb tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_points() {
        assert_eq!(VerbTier::Weak.points(), 1);
        assert_eq!(VerbTier::Medium.points(), 2);
        assert_eq!(VerbTier::Strong.points(), 3);
        assert_eq!(VerbTier::Strong.points(), VerbTier::MAX_POINTS);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(VerbTier::Weak < VerbTier::Medium);
        assert!(VerbTier::Medium < VerbTier::Strong);
        assert_eq!(VerbTier::ALL.iter().max(), Some(&VerbTier::Strong));
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(VerbTier::parse("STRONG"), Some(VerbTier::Strong));
        assert_eq!("medium".parse::<VerbTier>(), Ok(VerbTier::Medium));
        assert!("bogus".parse::<VerbTier>().is_err());
    }
}
