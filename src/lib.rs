//! labeldesk library
//!
//! This library provides the core of the labeldesk application: the release
//! and business checklist models, their JSON persistence, the view model the
//! TUI renders, and the CLI commands.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
pub mod view_model;
