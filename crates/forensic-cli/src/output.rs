//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use forensic_domain::{LinkCategory, VerifiabilityReport, YearStatistics};
use forensic_linkcheck::{LinkReport, Progress};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format staleness statistics.
    pub fn format_staleness(&self, stats: &YearStatistics) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "oldest_year": stats.oldest_year,
                    "median_year": stats.median_year,
                    "percent_old": stats.percent_old,
                    "score": stats.staleness_score,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Oldest", "Median", "% Old", "Score", "Years"]);
                builder.push_record([
                    stats.oldest_year.to_string(),
                    stats.median_year.to_string(),
                    format!("{}%", stats.percent_old),
                    stats.staleness_score.to_string(),
                    stats.years_considered.to_string(),
                ]);
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(stats.staleness_score.to_string()),
        }
    }

    /// Format a verifiability report.
    pub fn format_verifiability(&self, report: &VerifiabilityReport) -> Result<String> {
        let percentage = match report.percentage {
            Some(p) => p,
            None => return Ok(self.empty_result("No outcomes found.")),
        };

        match self.format {
            OutputFormat::Json => {
                let outcomes: Vec<serde_json::Value> = report
                    .findings
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "outcome": f.cleaned_text,
                            "verb": f.leading_verb,
                            "tier": f.tier.as_str(),
                            "points": f.points,
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "percentage": percentage,
                    "outcomes": outcomes,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Outcome", "Verb", "Tier", "Points"]);
                for finding in &report.findings {
                    builder.push_record([
                        finding.cleaned_text.clone(),
                        finding.leading_verb.clone(),
                        finding.tier.to_string(),
                        finding.points.to_string(),
                    ]);
                }

                let header = self.colorize(&format!("Verifiability Score: {}%", percentage), "cyan");
                Ok(format!("{}\n{}", header, self.render(builder)))
            }
            OutputFormat::Quiet => Ok(percentage.to_string()),
        }
    }

    /// Format a link-check report.
    pub fn format_links(&self, report: &LinkReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let results: Vec<serde_json::Value> = report
                    .results
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "url": r.url,
                            "status": r.http_status,
                            "category": r.category.as_str(),
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "results": results,
                    "summary": {
                        "ok": report.summary.ok,
                        "dead": report.summary.dead,
                        "unreachable": report.summary.unreachable,
                    },
                    "skipped": report.skipped,
                    "cancelled": report.cancelled,
                    "elapsed_ms": report.elapsed_ms,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if report.is_empty() && !report.cancelled {
                    return Ok(self.warning("No URLs found."));
                }

                let mut builder = Builder::default();
                builder.push_record(["URL", "Status", "Category"]);
                for result in &report.results {
                    builder.push_record([
                        result.url.clone(),
                        result.http_status.map(|s| s.to_string()).unwrap_or_default(),
                        result.category.to_string(),
                    ]);
                }

                let mut lines = vec![self.render(builder), self.link_summary(report)];
                if report.cancelled {
                    lines.push(self.warning(&format!(
                        "Cancelled: {} URL(s) not checked",
                        report.skipped
                    )));
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(report
                .results
                .iter()
                .map(|r| format!("{}\t{}", r.category, r.url))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Per-category counts on one line.
    fn link_summary(&self, report: &LinkReport) -> String {
        LinkCategory::ALL
            .iter()
            .map(|&category| {
                let label = format!("{}: {}", category, report.summary.get(category));
                let color = match category {
                    LinkCategory::Ok => "green",
                    LinkCategory::Dead => "red",
                    LinkCategory::Unreachable => "yellow",
                };
                self.colorize(&label, color)
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Format an empty-result condition (not a failure).
    pub fn empty_result(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({ "warning": message }).to_string(),
            OutputFormat::Table => self.warning(message),
            OutputFormat::Quiet => String::new(),
        }
    }

    /// Format a link-check progress line.
    pub fn progress(&self, progress: Progress) -> String {
        format!(
            "Checking links: {}/{} ({}%)",
            progress.completed,
            progress.total,
            progress.percent()
        )
    }

    /// Whether live progress should be shown.
    pub fn shows_progress(&self) -> bool {
        self.format == OutputFormat::Table
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
