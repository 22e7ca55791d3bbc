//! CLI command handlers for labeldesk.
//!
//! This module provides headless, scriptable access to the release tracker
//! and the business roadmap for automation and testing.

pub mod common;
pub mod config;
pub mod releases;
pub mod roadmap;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use releases::ReleasesArgs;
pub use roadmap::RoadmapArgs;
