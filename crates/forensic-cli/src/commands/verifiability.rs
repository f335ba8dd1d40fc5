//! Verifiability command implementation.

use crate::cli::VerifiabilityArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::extract::load_document;
use crate::output::Formatter;
use forensic_analyzer::AnalyzerConfig;

/// Execute the verifiability command.
pub async fn execute_verifiability(
    args: VerifiabilityArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut analyzer_config = config.analyzer.clone();
    if let Some(mode) = args.mode {
        analyzer_config.classifier_mode = mode.into();
    }
    if let Some(vocabulary) = args.vocabulary {
        analyzer_config.vocabulary = vocabulary.into();
    }
    analyzer_config.validate().map_err(CliError::InvalidInput)?;

    let text = load_document(&args.input, &config.extraction).await?;
    println!("{}", verifiability_report(&text, &analyzer_config, formatter)?);
    Ok(())
}

/// Classify the outcomes in `text` and render the report.
pub fn verifiability_report(text: &str, config: &AnalyzerConfig, formatter: &Formatter) -> Result<String> {
    match config.outcome_classifier().classify(text) {
        Ok(report) => formatter.format_verifiability(&report),
        Err(e) if e.is_empty_result() => Ok(formatter.empty_result(&e.to_string())),
        Err(e) => Err(e.into()),
    }
}
