//! Shared CLI error type, exit codes, and helpers.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::services::{FileStore, ReleaseStore};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input: unknown id, section, item, or malformed value
    ValidationError = 1,
    /// Storage or config could not be read or written
    IoError = 2,
}

/// Kind of CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid user input
    Validation,
    /// I/O failure
    Io,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure class, decides the exit code
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// I/O error.
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

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Opens the release store in the effective data directory.
///
/// # Errors
///
/// Returns an I/O error if the config cannot be loaded or no data directory
/// can be resolved.
pub fn open_store(data_dir: Option<&Path>) -> CliResult<ReleaseStore<FileStore>> {
    let config =
        Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
    let dir = config
        .data_dir(data_dir)
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;
    Ok(ReleaseStore::new(FileStore::new(dir)))
}

/// Prints `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an I/O error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Maps an `anyhow` storage failure into an I/O error.
pub fn io_error(context: &str) -> impl FnOnce(anyhow::Error) -> CliError + '_ {
    move |e| CliError::io(format!("{context}: {e:#}"))
}
