//! End-to-end tests for `labeldesk config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_json_defaults() {
    let env = TestEnv::new();
    let config = env.run_json(&["config", "show", "--json"]);

    assert!(config["config_file"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
    assert_eq!(
        config["paths"]["effective_data_dir"],
        env.data_path().to_string_lossy().as_ref()
    );
    assert!(config["paths"].get("data_dir").is_none());
    assert_eq!(config["ui"]["theme"], "auto");
    assert_eq!(config["ui"]["show_hints"], true);
    assert_eq!(config["ui"]["start_view"], "dashboard");
    assert_eq!(config["logging"]["level"], "default");
}

#[test]
fn test_config_show_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["config", "show"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("config.toml"));
}

#[test]
fn test_config_set_round_trip() {
    let env = TestEnv::new();

    assert_success(&env.run(&[
        "config",
        "set",
        "--theme",
        "light",
        "--log-level",
        "DEBUG",
        "--start-view",
        "royalties",
    ]));

    let config = env.run_json(&["config", "show", "--json"]);
    assert_eq!(config["ui"]["theme"], "light");
    assert_eq!(config["logging"]["level"], "debug");
    assert_eq!(config["ui"]["start_view"], "royalties");
    assert!(env.config_dir.path().join("config.toml").exists());
}

#[test]
fn test_global_data_dir_flag_wins() {
    let env = TestEnv::new();
    let other = tempfile::TempDir::new().unwrap();
    let config = env.run_json(&[
        "--data-dir",
        other.path().to_str().unwrap(),
        "config",
        "show",
        "--json",
    ]);
    assert_eq!(
        config["paths"]["effective_data_dir"],
        other.path().to_string_lossy().as_ref()
    );
}

#[test]
fn test_config_set_invalid_values() {
    let env = TestEnv::new();

    for args in [
        ["config", "set", "--theme", "sepia"],
        ["config", "set", "--log-level", "loud"],
        ["config", "set", "--start-view", "settings"],
    ] {
        let output = env.run(&args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
    }
    assert!(!env.config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_requires_an_option() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_data_dir_rejects_file() {
    let env = TestEnv::new();
    let file = env.data_path().join("not-a-dir");
    fs::write(&file, "x").unwrap();

    let output = env.run(&["config", "set", "--data-dir", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}
