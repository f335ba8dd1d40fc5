//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    config_path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config),
        ConfigAction::Path => show_path(config_path),
        ConfigAction::Init { force } => init_config(config_path, force, formatter),
    }
}

/// Print the effective configuration as TOML.
fn show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the configuration file path.
fn show_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", Config::resolve_path(config_path)?.display());
    Ok(())
}

/// Write a default configuration file.
fn init_config(config_path: Option<&Path>, force: bool, formatter: &Formatter) -> Result<()> {
    let path = Config::resolve_path(config_path)?;

    if path.exists() && !force {
        println!(
            "{}",
            formatter.warning(&format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save(&path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}
