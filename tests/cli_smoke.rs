#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points the config and data directories at a temporary
//! directory so the user's real profiles are never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn parley(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("parley").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("NO_COLOR", "1");
    cmd
}

fn init_profile(home: &TempDir) {
    parley(home)
        .args(["init", "--endpoint", "http://localhost:5000/chat/"])
        .assert()
        .success();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal chat client"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_send_help() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .args(["send", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn test_token_help() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .args(["token", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("clear"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_profiles_list_without_config() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_send_without_profile_is_config_error() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .args(["send", "hello"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Missing required configuration"));
}

#[test]
fn test_unknown_profile_is_config_error() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .args(["--profile", "nonexistent", "session"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("- default"));
}

#[test]
fn test_invalid_endpoint_is_config_error() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .args(["--endpoint", "localhost:5000", "send", "hello"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Invalid chat endpoint"));
}

#[test]
fn test_init_creates_default_profile() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("http://localhost:5000/chat/"));

    parley(&home)
        .args(["profiles", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_message"))
        .stdout(predicate::str::contains("first attached file only"));
}

#[test]
fn test_profiles_show_nonexistent() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .args(["profiles", "nonexistent_profile_xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_token_set_status_clear() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .args(["token", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));

    parley(&home)
        .args(["token", "set", "secret-token"])
        .assert()
        .success();

    parley(&home)
        .args(["token", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set (stored)"));

    parley(&home).args(["token", "clear"]).assert().success();

    parley(&home)
        .args(["token", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn test_session_empty_then_new() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .arg("session")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    parley(&home).arg("new").assert().success();
}

#[test]
fn test_send_blank_message_is_ignored() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .args(["send", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Nothing to send"));
}

#[test]
fn test_send_missing_attachment() {
    let home = TempDir::new().unwrap();
    init_profile(&home);

    parley(&home)
        .args(["send", "look", "--file", "/nonexistent/report.pdf"])
        .assert()
        .code(exitcode::SOFTWARE)
        .stderr(predicate::str::contains("Failed to access file"));
}

#[test]
fn test_send_unreachable_endpoint_fails_turn() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .args(["--endpoint", "http://127.0.0.1:9/chat/", "send", "hello"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Error: failed to reach"));
}

#[test]
fn test_ephemeral_send_leaves_no_session_database() {
    let home = TempDir::new().unwrap();
    parley(&home)
        .args([
            "--ephemeral",
            "--endpoint",
            "http://127.0.0.1:9/chat/",
            "send",
            "hello",
        ])
        .assert()
        .code(exitcode::UNAVAILABLE);

    assert!(!home.path().join("data").join("parley").exists());
}
