//! Forensic Hub CLI - Command-line presenter for the academic document analyzers.

use clap::Parser;
use forensic_cli::commands;
use forensic_cli::repl;
use forensic_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> forensic_cli::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let config = Config::load(config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &formatter).await?;
        }
        Some(Command::Staleness(args)) => {
            commands::execute_staleness(args, &config, &formatter).await?;
        }
        Some(Command::Verifiability(args)) => {
            commands::execute_verifiability(args, &config, &formatter).await?;
        }
        Some(Command::Urls(args)) => {
            commands::execute_urls(args, &config, &formatter).await?;
        }
        Some(Command::Run(args)) => {
            commands::execute_run(args, &config, &formatter).await?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, config_path, &formatter)?;
        }
    }

    Ok(())
}
