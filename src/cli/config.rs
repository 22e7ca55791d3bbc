//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode, LOG_LEVELS};
use crate::view_model::ViewId;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory holding the release and roadmap documents
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// View shown on startup (dashboard, releases, company, contracts, royalties, consulting)
    #[arg(long, value_name = "VIEW")]
    start_view: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    ui: UiOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<String>,
    effective_data_dir: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_hints: bool,
    start_view: ViewId,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, data_dir: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(data_dir),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, data_dir: Option<&Path>) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config, data_dir)?;

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.data_dir.is_none()
            && self.theme.is_none()
            && self.log_level.is_none()
            && self.start_view.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-dir, --theme, --log-level, or --start-view",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(path) = &self.data_dir {
            if path.is_file() {
                return Err(CliError::validation(format!(
                    "Data directory is a file: {}",
                    path.display()
                )));
            }
            config.paths.data_dir = Some(path.clone());
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = ThemeMode::from_name(theme).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level '{level}'. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = Some(level);
        }

        if let Some(view) = &self.start_view {
            config.ui.start_view = ViewId::from_id(view)
                .ok_or_else(|| CliError::validation(format!("Unknown view: {view}")))?;
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

fn build_output(config: &Config, data_dir: Option<&Path>) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;
    let effective = config
        .data_dir(data_dir)
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;

    Ok(ConfigOutput {
        config_file: config_file.to_string_lossy().to_string(),
        paths: PathsOutput {
            data_dir: config
                .paths
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            effective_data_dir: effective.to_string_lossy().to_string(),
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_hints: config.ui.show_hints,
            start_view: config.ui.start_view,
        },
        logging: LoggingOutput {
            level: config
                .logging
                .level
                .clone()
                .unwrap_or_else(|| "default".to_string()),
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("labeldesk Configuration");
    println!("=======================");
    println!();
    println!("Config file: {}", output.config_file);
    println!();

    println!("Paths:");
    match &output.paths.data_dir {
        Some(dir) => println!("  Data Directory: {dir}"),
        None => println!("  Data Directory: (default)"),
    }
    println!("  Effective:      {}", output.paths.effective_data_dir);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!("  Show Hints: {}", output.ui.show_hints);
    println!("  Start View: {}", output.ui.start_view.nav_label());
    println!();

    println!("Logging:");
    println!("  Level: {}", output.logging.level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name() {
        assert_eq!(theme_name(ThemeMode::Auto), "auto");
        assert_eq!(theme_name(ThemeMode::Light), "light");
        assert_eq!(theme_name(ThemeMode::Dark), "dark");
    }

    #[test]
    fn test_build_output_uses_explicit_data_dir() {
        let config = Config::new();
        let output = build_output(&config, Some(Path::new("/tmp/labels"))).unwrap();
        assert_eq!(output.paths.effective_data_dir, "/tmp/labels");
        assert!(output.paths.data_dir.is_none());
        assert_eq!(output.logging.level, "default");
    }
}
