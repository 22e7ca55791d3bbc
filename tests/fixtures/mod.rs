//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use chrono::NaiveDate;
use labeldesk::constants::{BUSINESS_STORAGE_KEY, CONFIG_DIR_ENV, DATA_DIR_ENV, RELEASES_STORAGE_KEY};
use labeldesk::models::{Release, ReleaseStatus, ReleaseType};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the labeldesk binary
pub fn labeldesk_bin() -> String {
    std::env::var("CARGO_BIN_EXE_labeldesk")
        .unwrap_or_else(|_| "target/debug/labeldesk".to_string())
}

/// Isolated config and data directories for one test.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub data_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create config temp dir"),
            data_dir: TempDir::new().expect("Failed to create data temp dir"),
        }
    }

    pub fn data_path(&self) -> &Path {
        self.data_dir.path()
    }

    /// Command with config and data directories pointing into the temp dirs.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(labeldesk_bin());
        cmd.env(CONFIG_DIR_ENV, self.config_dir.path());
        cmd.env(DATA_DIR_ENV, self.data_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command that must succeed and parses its stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
    }

    pub fn releases_file(&self) -> PathBuf {
        self.data_path().join(format!("{RELEASES_STORAGE_KEY}.json"))
    }

    pub fn business_file(&self) -> PathBuf {
        self.data_path().join(format!("{BUSINESS_STORAGE_KEY}.json"))
    }

    /// Writes the release list document directly.
    pub fn write_releases(&self, releases: &[Release]) {
        let json = serde_json::to_string(releases).expect("Failed to serialize releases");
        fs::write(self.releases_file(), json).expect("Failed to write releases");
    }

    /// Reads the release list document directly.
    pub fn read_releases(&self) -> Vec<Release> {
        let json = fs::read_to_string(self.releases_file()).expect("Failed to read releases");
        serde_json::from_str(&json).expect("Failed to parse releases")
    }
}

pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid date")
}

/// Two releases with deterministic ids: one released, one in planning.
pub fn test_releases() -> Vec<Release> {
    let mut released = Release::new("rel_1000", "First Light", "Jae-P");
    released.release_type = ReleaseType::Ep;
    released.status = ReleaseStatus::Released;
    released.date = Some(date("2024-11-01"));
    released.checklists.set("basics", "recordingDone", true);
    released.checklists.set("basics", "mixApproved", true);

    let mut planned = Release::new("rel_2000", "Second Wind", "");
    planned.release_type = ReleaseType::Album;
    planned.status = ReleaseStatus::InPlanning;

    vec![released, planned]
}
