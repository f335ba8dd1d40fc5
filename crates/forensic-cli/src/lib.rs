//! Forensic Hub CLI library.
//!
//! This library provides the presenter for the forensic analyzers: argument
//! parsing, configuration management, document text extraction, command
//! execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use extract::{DocumentKind, ExtractionConfig};
pub use output::Formatter;
