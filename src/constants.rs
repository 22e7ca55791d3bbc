//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the storage keys of the two
//! persisted documents.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "labeldesk";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "labeldesk";

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "labeldesk";

/// Storage key of the release list document.
pub const RELEASES_STORAGE_KEY: &str = "jp_release_manager_v1";

/// Storage key of the business roadmap document.
pub const BUSINESS_STORAGE_KEY: &str = "jp_business_manager_v1";

/// Fallback title for releases created or stored without one.
pub const UNTITLED_RELEASE: &str = "Untitled release";

/// Fallback artist shown on dashboard cards.
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "LABELDESK_CONFIG_DIR";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LABELDESK_DATA_DIR";

/// Name of the log file written inside the data directory while the TUI runs.
pub const LOG_FILE_NAME: &str = "labeldesk.log";
