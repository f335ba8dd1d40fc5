//! Task dispatch by name.

use crate::cli::{InputArgs, RunArgs};
use crate::config::Config;
use crate::error::Result;
use crate::extract::load_document;
use crate::output::Formatter;
use forensic_domain::AnalysisTask;

use super::staleness::staleness_report;
use super::urls::check_links;
use super::verifiability::verifiability_report;

/// Execute the run command.
pub async fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let output = run_task(args.task.into(), &args.input, config, formatter).await?;
    println!("{}", output);
    Ok(())
}

/// Load a document and run one task on it with the configured settings.
pub async fn run_task(
    task: AnalysisTask,
    input: &InputArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let text = load_document(input, &config.extraction).await?;

    match task {
        AnalysisTask::Staleness => staleness_report(&text, &config.analyzer, formatter),
        AnalysisTask::Verifiability => verifiability_report(&text, &config.analyzer, formatter),
        AnalysisTask::Urls => {
            let report = check_links(&text, config.link_check.clone(), formatter).await?;
            formatter.format_links(&report)
        }
    }
}
