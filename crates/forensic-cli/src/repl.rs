//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL holds the selected analysis task; `run <file>` applies it.

use crate::cli::InputArgs;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use forensic_domain::AnalysisTask;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Forensic Hub REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut task = AnalysisTask::default();
    print_task(task, formatter);

    loop {
        let prompt = format!("forensic ({})> ", task);

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Tasks) => print_tasks(task),
                    Ok(ReplCommand::Use(selected)) => {
                        task = selected;
                        print_task(task, formatter);
                    }
                    Ok(ReplCommand::Run(file)) => {
                        let input = InputArgs::from_file(file);
                        match commands::run_task(task, &input, config, formatter).await {
                            Ok(output) => println!("{}", output),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Tasks,
    Use(AnalysisTask),
    Run(String),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "tasks" => Ok(ReplCommand::Tasks),
        "use" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: use <task>".to_string()));
            }
            AnalysisTask::parse(rest)
                .map(ReplCommand::Use)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown task: {}. Type 'tasks' to list them.", rest)))
        }
        "run" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: run <file>".to_string()));
            }
            // Paths with spaces are taken whole
            Ok(ReplCommand::Run(rest.to_string()))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_task(task: AnalysisTask, formatter: &Formatter) {
    println!("{}", formatter.info(&format!("Active task: {}", task.title())));
}

fn print_tasks(active: AnalysisTask) {
    for task in AnalysisTask::ALL {
        let marker = if task == active { "* " } else { "  " };
        println!("{}{:<14} {}", marker, task.as_str(), task.title());
    }
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  use <task>        - Select the analysis task (staleness|verifiability|urls)");
    println!("  run <file>        - Run the selected task on a document (txt, pdf, docx, doc)");
    println!("  tasks             - List tasks and show the active one");
    println!("  help, ?           - Show this help");
    println!("  exit, quit, q     - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_use() {
        assert_eq!(
            parse_repl_command("use links").unwrap(),
            ReplCommand::Use(AnalysisTask::Urls)
        );
        assert_eq!(
            parse_repl_command("use   Verifiability").unwrap(),
            ReplCommand::Use(AnalysisTask::Verifiability)
        );
        assert!(parse_repl_command("use").is_err());
        assert!(parse_repl_command("use charts").is_err());
    }

    #[test]
    fn test_parse_run_keeps_spaces_in_path() {
        assert_eq!(
            parse_repl_command("run my syllabus.pdf").unwrap(),
            ReplCommand::Run("my syllabus.pdf".to_string())
        );
        assert!(parse_repl_command("run").is_err());
    }

    #[test]
    fn test_parse_builtins() {
        assert_eq!(parse_repl_command("q").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("tasks").unwrap(), ReplCommand::Tasks);
        assert!(parse_repl_command("frobnicate").is_err());
    }
}
