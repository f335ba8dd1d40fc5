//! Analysis task selection

/// Which analysis the presenter wants run and rendered
///
/// The core keeps no notion of an "active" view; callers pass this value to
/// dispatch explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisTask {
    /// Syllabus staleness scan
    #[default]
    Staleness,

    /// Learning-outcome verifiability score
    Verifiability,

    /// Reference URL check
    Urls,
}

impl AnalysisTask {
    /// All tasks in menu order
    pub const ALL: [AnalysisTask; 3] = [AnalysisTask::Staleness, AnalysisTask::Verifiability, AnalysisTask::Urls];

    /// Get the task name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisTask::Staleness => "staleness",
            AnalysisTask::Verifiability => "verifiability",
            AnalysisTask::Urls => "urls",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisTask::Staleness => "Syllabus Staleness Scanner",
            AnalysisTask::Verifiability => "Learning Outcome Verifiability Score",
            AnalysisTask::Urls => "Reference URL Checker",
        }
    }

    /// Parse a task from a string; accepts a few short aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "staleness" | "stale" | "years" => Some(AnalysisTask::Staleness),
            "verifiability" | "outcomes" | "verbs" => Some(AnalysisTask::Verifiability),
            "urls" | "url" | "links" => Some(AnalysisTask::Urls),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnalysisTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnalysisTask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid task: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_aliases() {
        assert_eq!(AnalysisTask::parse("links"), Some(AnalysisTask::Urls));
        assert_eq!(AnalysisTask::parse("Outcomes"), Some(AnalysisTask::Verifiability));
        assert_eq!(AnalysisTask::parse("stale"), Some(AnalysisTask::Staleness));
        assert_eq!(AnalysisTask::parse("nope"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for task in AnalysisTask::ALL {
            assert_eq!(task.as_str().parse::<AnalysisTask>(), Ok(task));
        }
    }
}
