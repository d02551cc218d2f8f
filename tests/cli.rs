//! Command-line behaviour of the binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense_tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path());
    cmd
}

#[test]
fn config_prints_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("expense-tracker.log"))
        .stdout(predicate::str::contains("Initialized:      no"))
        .stdout(predicate::str::contains("food, travel, bills"));
}

#[test]
fn init_writes_default_settings() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"restrict_categories\": false"));

    expense_tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      yes"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    expense_tracker(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}
