//! Shared CLI types: errors, exit codes and report output.

use crate::services::StageReport;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed (per-file skips included)
    Success = 0,
    /// Bad arguments, missing source directory or invalid config
    ValidationError = 1,
    /// Reading or writing failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// User input problem
    Validation,
    /// File system problem
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category, decides the exit code
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Fails with a validation error unless `source` is an existing directory.
pub fn require_source_dir(source: &Path) -> CliResult<()> {
    if source.is_dir() {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "Source directory not found: {}",
            source.display()
        )))
    }
}

/// Resolves the output directory: the explicit one, or the sibling
/// `<source name><suffix>` directory.
pub fn resolve_output_dir(
    source: &Path,
    output: Option<&PathBuf>,
    suffix: &str,
) -> CliResult<PathBuf> {
    let output = match output {
        Some(path) => path.clone(),
        None => crate::services::default_output_dir(source, suffix)
            .map_err(|e| CliError::validation(format!("{e:#}")))?,
    };

    crate::services::check_directories(source, &output)
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

    Ok(output)
}

/// Prints one stage report as JSON or human-readable text.
pub fn print_report(report: &StageReport, json: bool) -> CliResult<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
        );
        return Ok(());
    }

    let mark = if report.skipped.is_empty() { "✓" } else { "⚠" };
    println!(
        "{mark} {}: {} converted, {} skipped → {}",
        report.stage,
        report.converted.len(),
        report.skipped.len(),
        report.output_dir.display()
    );

    for item in &report.converted {
        println!("  {}", item.destination.display());
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped:");
        for item in &report.skipped {
            println!("  ✗ {}: {}", item.source.display(), item.reason);
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ⚠ {warning}");
        }
    }

    Ok(())
}
