//! CLI command definitions and argument parsing.

use crate::extract::DocumentKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Forensic Hub - Analyze academic documents for staleness, verifiability and link rot.
#[derive(Debug, Parser)]
#[command(name = "forensic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FORENSIC_HUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (scores and categories only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Measure how outdated the years a document references are
    Staleness(StalenessArgs),

    /// Score learning outcomes by the strength of their leading verb
    Verifiability(VerifiabilityArgs),

    /// Check the URLs a document cites for link rot
    Urls(UrlsArgs),

    /// Run an analysis task chosen by name
    Run(RunArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Document input shared by the analysis commands.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Document to analyze (txt, pdf, docx, doc), or '-' for stdin
    pub file: String,

    /// Document type; inferred from the extension when omitted (stdin defaults to txt)
    #[arg(long, value_enum)]
    pub kind: Option<DocumentKind>,
}

impl InputArgs {
    /// Input from a path with its type inferred.
    pub fn from_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            kind: None,
        }
    }
}

/// Arguments for the staleness command.
#[derive(Debug, Args)]
pub struct StalenessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reference year (defaults to the current year)
    #[arg(long)]
    pub reference_year: Option<i32>,

    /// Years before the reference year after which a year counts as old
    #[arg(short, long)]
    pub threshold: Option<i32>,
}

/// Arguments for the verifiability command.
#[derive(Debug, Args)]
pub struct VerifiabilityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Whether lines without a known leading verb are scored
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Verb vocabulary
    #[arg(long, value_enum)]
    pub vocabulary: Option<VocabularyArg>,
}

/// Arguments for the urls command.
#[derive(Debug, Args)]
pub struct UrlsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of unique URLs to check
    #[arg(long)]
    pub max_urls: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Probes in flight at once (1 checks sequentially)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Also write the results as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Task to run
    #[arg(value_enum)]
    pub task: TaskArg,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Task argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TaskArg {
    /// Syllabus staleness scan
    #[value(alias = "stale")]
    Staleness,
    /// Learning-outcome verifiability score
    #[value(alias = "outcomes")]
    Verifiability,
    /// Reference URL check
    #[value(alias = "links")]
    Urls,
}

/// Classifier mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Score every non-blank line
    Lenient,
    /// Score only lines led by a known verb
    Strict,
}

/// Vocabulary argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VocabularyArg {
    /// Three verbs per tier
    Standard,
    /// Extended Bloom's taxonomy lists
    Bloom,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TaskArg> for forensic_domain::AnalysisTask {
    fn from(task: TaskArg) -> Self {
        match task {
            TaskArg::Staleness => forensic_domain::AnalysisTask::Staleness,
            TaskArg::Verifiability => forensic_domain::AnalysisTask::Verifiability,
            TaskArg::Urls => forensic_domain::AnalysisTask::Urls,
        }
    }
}

impl From<ModeArg> for forensic_domain::ClassifierMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Lenient => forensic_domain::ClassifierMode::Lenient,
            ModeArg::Strict => forensic_domain::ClassifierMode::Strict,
        }
    }
}

impl From<VocabularyArg> for forensic_analyzer::VocabularyPreset {
    fn from(vocabulary: VocabularyArg) -> Self {
        match vocabulary {
            VocabularyArg::Standard => forensic_analyzer::VocabularyPreset::Standard,
            VocabularyArg::Bloom => forensic_analyzer::VocabularyPreset::Bloom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forensic_domain::AnalysisTask;

    #[test]
    fn test_no_subcommand_defaults_to_repl() {
        let cli = Cli::parse_from(["forensic"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_staleness_command() {
        let cli = Cli::parse_from([
            "forensic",
            "staleness",
            "syllabus.pdf",
            "--reference-year",
            "2024",
            "--threshold",
            "5",
        ]);
        match cli.command {
            Some(Command::Staleness(args)) => {
                assert_eq!(args.input.file, "syllabus.pdf");
                assert_eq!(args.reference_year, Some(2024));
                assert_eq!(args.threshold, Some(5));
            }
            _ => panic!("Expected Staleness command"),
        }
    }

    #[test]
    fn test_urls_command_with_global_flags() {
        let cli = Cli::parse_from([
            "forensic",
            "urls",
            "refs.txt",
            "--concurrency",
            "1",
            "--csv",
            "out.csv",
            "--format",
            "json",
            "-v",
        ]);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Some(Command::Urls(args)) => {
                assert_eq!(args.concurrency, Some(1));
                assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("Expected Urls command"),
        }
    }

    #[test]
    fn test_run_command_accepts_aliases() {
        let cli = Cli::parse_from(["forensic", "run", "links", "refs.txt"]);
        match cli.command {
            Some(Command::Run(args)) => {
                assert_eq!(AnalysisTask::from(args.task), AnalysisTask::Urls);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_verifiability_stdin_with_kind() {
        let cli = Cli::parse_from(["forensic", "verifiability", "-", "--kind", "txt", "--mode", "strict"]);
        match cli.command {
            Some(Command::Verifiability(args)) => {
                assert_eq!(args.input.file, "-");
                assert_eq!(args.input.kind, Some(DocumentKind::Txt));
                assert!(matches!(args.mode, Some(ModeArg::Strict)));
            }
            _ => panic!("Expected Verifiability command"),
        }
    }

    #[test]
    fn test_mode_conversion() {
        let mode: forensic_domain::ClassifierMode = ModeArg::Strict.into();
        assert_eq!(mode, forensic_domain::ClassifierMode::Strict);
    }
}
