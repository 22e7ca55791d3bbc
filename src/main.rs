//! labeldesk - terminal release checklist tracker and label business roadmap
//!
//! Run without a subcommand to open the TUI. Subcommands give headless,
//! scriptable access to the same data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use labeldesk::cli::{CliError, ConfigArgs, ExitCode, ReleasesArgs, RoadmapArgs};
use labeldesk::config::Config;
use labeldesk::constants::APP_NAME;
use labeldesk::logging::{self, LogTarget};
use labeldesk::services::{FileStore, KeyValueStore, MemoryStore, ReleaseStore};
use labeldesk::tui::{self, AppState};

/// labeldesk - release checklists and label business roadmap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the release and roadmap documents
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Open the TUI on in-memory data that is discarded on exit
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage releases and their checklists
    Releases(ReleasesArgs),
    /// Show and update the business roadmap
    Roadmap(RoadmapArgs),
    /// Show and change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(command) => {
            let result = run_command(command, &cli);
            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code() as i32);
            }
            std::process::exit(ExitCode::Success as i32);
        }
        None => run_tui_app(&cli),
    }
}

fn run_command(command: &Commands, cli: &Cli) -> Result<(), CliError> {
    // Logging must not stop the command from running
    let config = Config::load().unwrap_or_default();
    if let Err(e) = logging::init(&LogTarget::Stderr, cli.verbose, &config) {
        eprintln!("Warning: {e:#}");
    }

    let data_dir = cli.data_dir.as_deref();
    match command {
        Commands::Releases(args) => args.execute(data_dir),
        Commands::Roadmap(args) => args.execute(data_dir),
        Commands::Config(args) => args.execute(data_dir),
    }
}

fn run_tui_app(cli: &Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let data_dir = config.data_dir(cli.data_dir.as_deref())?;
    logging::init(&LogTarget::for_tui(&data_dir, cli.ephemeral), cli.verbose, &config)?;
    info!(data_dir = %data_dir.display(), ephemeral = cli.ephemeral, "Starting {APP_NAME}");

    let storage: Box<dyn KeyValueStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(data_dir))
    };
    let mut state = AppState::new(ReleaseStore::new(storage), config)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    info!("Exiting {APP_NAME}");
    result
}
