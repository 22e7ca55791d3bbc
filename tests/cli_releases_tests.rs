//! End-to-end tests for `labeldesk releases` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// List / Show
// ============================================================================

#[test]
fn test_list_first_run_seeds_sample() {
    let env = TestEnv::new();
    let rows = env.run_json(&["releases", "list", "--json"]);

    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "sample_amame");
    assert_eq!(rows[0]["title"], "ÁMAME");
    assert_eq!(rows[0]["type"], "Single");
    assert_eq!(rows[0]["status"], "In Progress");
    assert_eq!(rows[0]["progress"], 0);
    assert!(env.releases_file().exists());
}

#[test]
fn test_list_human_readable() {
    let env = TestEnv::new();
    env.write_releases(&test_releases());
    let output = env.run(&["releases", "list"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("First Light"));
    assert!(stdout.contains("Second Wind"));
    assert!(stdout.contains("14%"), "2 of 14 items checked: {stdout}");
}

#[test]
fn test_show_json() {
    let env = TestEnv::new();
    env.write_releases(&test_releases());
    let details = env.run_json(&["releases", "show", "rel_1000", "--json"]);

    assert_eq!(details["heading"], "First Light");
    assert_eq!(details["subtitle"], "Jae-P • EP");
    assert_eq!(details["date"], "2024-11-01");
    assert_eq!(details["progress"], 14);
    let sections = details["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0]["rows"][1]["key"], "mixApproved");
    assert_eq!(sections[0]["rows"][1]["checked"], true);
}

#[test]
fn test_show_unknown_id_is_validation_error() {
    let env = TestEnv::new();
    let output = env.run(&["releases", "show", "rel_missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown release"));
}

// ============================================================================
// Add
// ============================================================================

#[test]
fn test_add_blank_title_becomes_untitled() {
    let env = TestEnv::new();
    env.write_releases(&[]);
    let created = env.run_json(&["releases", "add", "--title", "   ", "--json"]);

    assert_eq!(created["heading"], "Untitled release");
    assert_eq!(created["status"], "In Progress");
    assert_eq!(created["type"], "Single");

    let stored = env.read_releases();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Untitled release");
    assert!(stored[0].id.starts_with("rel_"));
}

#[test]
fn test_add_with_all_fields() {
    let env = TestEnv::new();
    env.write_releases(&[]);
    let output = env.run(&[
        "releases",
        "add",
        "--title",
        " Night Drive ",
        "--artist",
        "Jae-P",
        "--type",
        "album",
        "--status",
        "ready to release",
        "--date",
        "2025-09-19",
    ]);
    assert_success(&output);

    let stored = env.read_releases();
    assert_eq!(stored[0].title, "Night Drive");
    assert_eq!(stored[0].release_type.label(), "Album");
    assert_eq!(stored[0].status.label(), "Ready to Release");
    assert_eq!(stored[0].date, Some(date("2025-09-19")));
}

#[test]
fn test_add_rejects_bad_values_without_writing() {
    let env = TestEnv::new();
    env.write_releases(&[]);

    for args in [
        ["releases", "add", "--date", "19/09/2025"],
        ["releases", "add", "--type", "Mixtape"],
        ["releases", "add", "--status", "Done"],
    ] {
        let output = env.run(&args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
    }
    assert!(env.read_releases().is_empty());
}

// ============================================================================
// Check / Set
// ============================================================================

#[test]
fn test_check_and_uncheck_item() {
    let env = TestEnv::new();
    env.write_releases(&test_releases());

    assert_success(&env.run(&["releases", "check", "rel_2000", "rights", "proRegistered"]));
    assert!(env.read_releases()[1]
        .checklists
        .is_checked("rights", "proRegistered"));

    assert_success(&env.run(&[
        "releases",
        "check",
        "rel_2000",
        "rights",
        "proRegistered",
        "--off",
    ]));
    assert!(!env.read_releases()[1]
        .checklists
        .is_checked("rights", "proRegistered"));
}

#[test]
fn test_check_unknown_item_is_validation_error() {
    let env = TestEnv::new();
    env.write_releases(&test_releases());
    let output = env.run(&["releases", "check", "rel_1000", "rights", "ein"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("rights/ein"));
}

#[test]
fn test_set_fields() {
    let env = TestEnv::new();
    env.write_releases(&test_releases());

    assert_success(&env.run(&[
        "releases",
        "set",
        "rel_1000",
        "--status",
        "In Planning",
        "--date",
        "",
        "--artist",
        "Jae-P ft. Jexy",
    ]));

    let stored = env.read_releases();
    assert_eq!(stored[0].status.label(), "In Planning");
    assert_eq!(stored[0].date, None);
    assert_eq!(stored[0].artist, "Jae-P ft. Jexy");
    assert_eq!(stored[0].title, "First Light");
}

#[test]
fn test_set_requires_a_field() {
    let env = TestEnv::new();
    env.write_releases(&test_releases());
    let output = env.run(&["releases", "set", "rel_1000"]);
    assert_eq!(output.status.code(), Some(1));
}
