//! Document text extraction.
//!
//! Plain text is decoded directly; PDF and Word documents are handed to an
//! external converter that prints the text on stdout. The analyzers only ever
//! see the normalized text.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Placeholder replaced by the input path in converter commands
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Supported document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentKind {
    /// Plain text
    Txt,
    /// PDF
    Pdf,
    /// Office Open XML document
    Docx,
    /// Legacy Word document
    Doc,
}

impl DocumentKind {
    /// Infer the kind from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(DocumentKind::Txt),
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "doc" => Some(DocumentKind::Doc),
            _ => None,
        }
    }

    /// Infer the kind from a path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| {
            let shown = if ext.is_empty() { "(none)" } else { ext };
            CliError::UnsupportedFileType(shown.to_string())
        })
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Txt => "txt",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Doc => "doc",
        }
    }
}

/// Converter commands for binary document types.
///
/// Each command is split on whitespace; the `{input}` token is replaced by
/// the document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// PDF converter
    #[serde(default = "default_pdf_command")]
    pub pdf_command: String,

    /// DOCX converter
    #[serde(default = "default_docx_command")]
    pub docx_command: String,

    /// DOC converter
    #[serde(default = "default_doc_command")]
    pub doc_command: String,
}

fn default_pdf_command() -> String {
    "pdftotext -layout {input} -".to_string()
}

fn default_docx_command() -> String {
    "pandoc --to plain {input}".to_string()
}

fn default_doc_command() -> String {
    "antiword {input}".to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pdf_command: default_pdf_command(),
            docx_command: default_docx_command(),
            doc_command: default_doc_command(),
        }
    }
}

impl ExtractionConfig {
    /// Converter command for a document kind; `None` for plain text.
    pub fn command_for(&self, kind: DocumentKind) -> Option<&str> {
        match kind {
            DocumentKind::Txt => None,
            DocumentKind::Pdf => Some(&self.pdf_command),
            DocumentKind::Docx => Some(&self.docx_command),
            DocumentKind::Doc => Some(&self.doc_command),
        }
    }

    /// Validate that every converter names a program and takes the input path.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, command) in [
            ("pdf_command", &self.pdf_command),
            ("docx_command", &self.docx_command),
            ("doc_command", &self.doc_command),
        ] {
            if command.split_whitespace().next().is_none() {
                return Err(format!("{} must not be empty", name));
            }
            if !command.contains(INPUT_PLACEHOLDER) {
                return Err(format!("{} must contain {}", name, INPUT_PLACEHOLDER));
            }
        }
        Ok(())
    }
}

/// Load the text of the document named by `input`.
pub async fn load_document(input: &InputArgs, config: &ExtractionConfig) -> Result<String> {
    if input.file == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        let kind = input.kind.unwrap_or(DocumentKind::Txt);
        return extract_bytes(&bytes, kind, config).await;
    }

    let path = Path::new(&input.file);
    let kind = match input.kind {
        Some(kind) => kind,
        None => DocumentKind::from_path(path)?,
    };
    extract_file(path, kind, config).await
}

/// Extract text from a file on disk.
pub async fn extract_file(path: &Path, kind: DocumentKind, config: &ExtractionConfig) -> Result<String> {
    match config.command_for(kind) {
        None => {
            let bytes = tokio::fs::read(path).await?;
            Ok(decode_text(&bytes))
        }
        Some(command) => {
            if !path.exists() {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} not found", path.display()),
                )));
            }
            run_converter(command, path).await
        }
    }
}

/// Extract text from in-memory bytes, staging them in a temporary file when a
/// converter is needed.
pub async fn extract_bytes(bytes: &[u8], kind: DocumentKind, config: &ExtractionConfig) -> Result<String> {
    match config.command_for(kind) {
        None => Ok(decode_text(bytes)),
        Some(command) => {
            let mut staged = tempfile::Builder::new()
                .prefix("forensic-")
                .suffix(&format!(".{}", kind.extension()))
                .tempfile()?;
            staged.write_all(bytes)?;
            staged.flush()?;
            // `staged` is removed on drop, whatever the converter returns
            run_converter(command, staged.path()).await
        }
    }
}

/// Run a converter command and normalize what it prints.
async fn run_converter(command: &str, path: &Path) -> Result<String> {
    let path_arg = path.to_string_lossy();
    let mut parts = command
        .split_whitespace()
        .map(|part| part.replace(INPUT_PLACEHOLDER, &path_arg));
    let program = parts
        .next()
        .ok_or_else(|| CliError::Config("empty converter command".to_string()))?;
    let args: Vec<String> = parts.collect();

    debug!("Running converter: {} {:?}", program, args);
    let output = Command::new(&program)
        .args(&args)
        .output()
        .await
        .map_err(|e| CliError::Extraction(format!("could not run '{}': {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::Extraction(format!(
            "'{}' exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    Ok(decode_text(&output.stdout))
}

/// Decode UTF-8 (replacing invalid sequences) and normalize line endings.
pub fn decode_text(bytes: &[u8]) -> String {
    normalize_text(&String::from_utf8_lossy(bytes))
}

/// Convert CRLF and lone CR to LF and trim trailing whitespace.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim_end().to_string()
}
