//! Staleness command implementation.

use crate::cli::StalenessArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::extract::load_document;
use crate::output::Formatter;
use forensic_analyzer::AnalyzerConfig;

/// Execute the staleness command.
pub async fn execute_staleness(args: StalenessArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analyzer_config = config.analyzer.clone();
    if let Some(year) = args.reference_year {
        analyzer_config.reference_year = Some(year);
    }
    if let Some(threshold) = args.threshold {
        analyzer_config.staleness_threshold_years = threshold;
    }
    analyzer_config.validate().map_err(CliError::InvalidInput)?;

    let text = load_document(&args.input, &config.extraction).await?;
    println!("{}", staleness_report(&text, &analyzer_config, formatter)?);
    Ok(())
}

/// Analyze `text` and render the result; "no years" is a warning, not an error.
pub fn staleness_report(text: &str, config: &AnalyzerConfig, formatter: &Formatter) -> Result<String> {
    match config.staleness_analyzer().analyze(text) {
        Ok(stats) => formatter.format_staleness(&stats),
        Err(e) if e.is_empty_result() => Ok(formatter.empty_result(&e.to_string())),
        Err(e) => Err(e.into()),
    }
}
