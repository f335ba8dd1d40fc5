//! URL check command implementation.

use crate::cli::UrlsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::extract::load_document;
use crate::output::Formatter;
use forensic_linkcheck::{CancellationToken, LinkCheckConfig, LinkChecker, LinkReport};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Execute the urls command.
pub async fn execute_urls(args: UrlsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut link_config = config.link_check.clone();
    if let Some(max_urls) = args.max_urls {
        link_config.max_urls = max_urls;
    }
    if let Some(timeout) = args.timeout {
        link_config.timeout_secs = timeout;
    }
    if let Some(concurrency) = args.concurrency {
        link_config.concurrency = concurrency;
    }

    let text = load_document(&args.input, &config.extraction).await?;
    let report = check_links(&text, link_config, formatter).await?;

    println!("{}", formatter.format_links(&report)?);

    if let Some(path) = args.csv {
        export_csv(&report, &path, formatter)?;
    }
    Ok(())
}

/// Check every URL in `text`, drawing progress on stderr.
///
/// Ctrl-C stops new probes; the partial report is still returned.
pub async fn check_links(text: &str, link_config: LinkCheckConfig, formatter: &Formatter) -> Result<LinkReport> {
    let checker = LinkChecker::from_config(link_config)?;

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Interrupt received, cancelling link check");
                cancel.cancel();
            }
        })
    };

    let show_progress = formatter.shows_progress();
    let report = checker
        .check_text_with_cancel(text, &cancel, |progress| {
            if show_progress {
                eprint!("\r{}", formatter.progress(progress));
                std::io::stderr().flush().ok();
            }
        })
        .await;
    interrupt.abort();

    if show_progress && !report.is_empty() {
        eprintln!();
    }
    Ok(report)
}

/// Write the report as CSV and confirm on stderr.
pub fn export_csv(report: &LinkReport, path: &Path, formatter: &Formatter) -> Result<()> {
    report.write_csv(path)?;
    eprintln!(
        "{}",
        formatter.success(&format!(
            "Wrote {} result(s) to {}",
            report.results.len(),
            path.display()
        ))
    );
    Ok(())
}
