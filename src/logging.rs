//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file in the data directory.
//! CLI commands log to stderr. Ephemeral TUI sessions log nowhere.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `<dir>/labeldesk.log`
    File(PathBuf),
    /// Write to stderr
    Stderr,
    /// No subscriber is installed
    Disabled,
}

impl LogTarget {
    /// File target inside `data_dir`.
    #[must_use]
    pub fn file_in(data_dir: &Path) -> Self {
        Self::File(data_dir.join(LOG_FILE_NAME))
    }

    /// Target for a TUI session. Ephemeral sessions must not touch the disk.
    #[must_use]
    pub fn for_tui(data_dir: &Path, ephemeral: bool) -> Self {
        if ephemeral {
            Self::Disabled
        } else {
            Self::file_in(data_dir)
        }
    }

    /// Level used when neither `--verbose` nor the config picks one.
    #[must_use]
    pub const fn default_level(&self) -> &'static str {
        match self {
            Self::File(_) => "info",
            Self::Stderr => "warn",
            Self::Disabled => "off",
        }
    }
}

/// Filter directive when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(target: &LogTarget, verbose: bool, config: &Config) -> String {
    if verbose {
        return "debug".to_string();
    }
    config
        .logging
        .level
        .clone()
        .unwrap_or_else(|| target.default_level().to_string())
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// everything else.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(target: &LogTarget, verbose: bool, config: &Config) -> Result<()> {
    if *target == LogTarget::Disabled {
        return Ok(());
    }
    let filter = default_filter(target, verbose, config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    // A subscriber may already be installed (tests), which is fine
    let _ = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
        }
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::Disabled => Ok(()),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_filter_precedence() {
        let mut config = Config::new();
        assert_eq!(default_filter(&LogTarget::Stderr, false, &config), "warn");
        assert_eq!(
            default_filter(&LogTarget::file_in(Path::new("x")), false, &config),
            "info"
        );

        config.logging.level = Some("error".to_string());
        assert_eq!(default_filter(&LogTarget::Stderr, false, &config), "error");
        assert_eq!(default_filter(&LogTarget::Stderr, true, &config), "debug");
    }

    #[test]
    fn test_file_target_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let target = LogTarget::file_in(&temp_dir.path().join("nested"));
        init(&target, false, &Config::new()).unwrap();
        assert!(temp_dir.path().join("nested").join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn test_ephemeral_session_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");

        let target = LogTarget::for_tui(&data_dir, true);
        assert_eq!(target, LogTarget::Disabled);
        init(&target, true, &Config::new()).unwrap();
        assert!(!data_dir.exists());

        assert_eq!(
            LogTarget::for_tui(&data_dir, false),
            LogTarget::file_in(&data_dir)
        );
    }
}
