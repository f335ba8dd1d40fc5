//! Staleness statistics for the years a document mentions

/// Distribution statistics over the years found in a document
///
/// Built from an already-filtered list of years; immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearStatistics {
    /// Earliest year mentioned
    pub oldest_year: i32,

    /// Year at index `len / 2` of the sorted list (upper median for even lengths)
    pub median_year: i32,

    /// Share of years older than the staleness cutoff, 0-100
    pub percent_old: u8,

    /// Freshness score, 0-100 (100 = nothing old)
    pub staleness_score: u8,

    /// Number of years the statistics were computed over
    pub years_considered: usize,
}

impl YearStatistics {
    /// Weight of the old-year percentage in the score
    pub const OLD_WEIGHT: f64 = 0.7;

    /// Compute statistics from a list of years
    ///
    /// Years older than `reference_year - threshold_years` count as old.
    /// Returns `None` for an empty list. The input does not need to be sorted.
    pub fn from_years(years: &[i32], reference_year: i32, threshold_years: i32) -> Option<Self> {
        if years.is_empty() {
            return None;
        }

        let mut sorted = years.to_vec();
        sorted.sort_unstable();

        let cutoff = reference_year - threshold_years;
        let old = sorted.iter().filter(|&&y| y < cutoff).count();
        let percent_old = round_percent(old as f64 / sorted.len() as f64 * 100.0);
        let score = (100.0 - f64::from(percent_old) * Self::OLD_WEIGHT)
            .round_ties_even()
            .clamp(0.0, 100.0) as u8;

        Some(Self {
            oldest_year: sorted[0],
            median_year: sorted[sorted.len() / 2],
            percent_old,
            staleness_score: score,
            years_considered: sorted.len(),
        })
    }
}

/// Round a percentage half-to-even and clamp it to 0-100
pub(crate) fn round_percent(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 100.0) as u8
}
