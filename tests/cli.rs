//! End-to-end tests for the habitr binary.
//!
//! Each test runs against a fresh temporary home directory so the real
//! `~/.habitr/` is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn habitr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("habitr").unwrap();
    cmd.env("HOME", home.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn first_list_shows_quickstart_once() {
    let home = TempDir::new().unwrap();

    habitr(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to habitr!"));

    habitr(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to habitr!").not());
}

#[test]
fn add_then_list_shows_habit() {
    let home = TempDir::new().unwrap();

    habitr(&home)
        .args(["add", "Read", "-d", "20 pages", "-i", "book"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created habit Read"));

    habitr(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] Read"))
        .stdout(predicate::str::contains("0 of 1 habits completed (0%)"));
}

#[test]
fn done_marks_habit_completed_today() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();
    habitr(&home)
        .args(["done", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read done for"));

    habitr(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Read"))
        .stdout(predicate::str::contains("1 of 1 habits completed (100%)"));
}

#[test]
fn done_is_idempotent_and_undo_reverts() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();
    habitr(&home).args(["done", "read"]).assert().success();
    habitr(&home).args(["done", "read"]).assert().success();

    habitr(&home)
        .args(["show", "read", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCompletions\": 1"));

    habitr(&home).args(["undo", "read"]).assert().success();

    habitr(&home)
        .args(["show", "read", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCompletions\": 0"));
}

#[test]
fn done_accepts_relative_dates() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();
    habitr(&home)
        .args(["done", "read", "--date", "yesterday"])
        .assert()
        .success();
    habitr(&home)
        .args(["done", "read", "--date", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 day streak"));
}

#[test]
fn unknown_habit_is_an_error() {
    let home = TempDir::new().unwrap();

    habitr(&home)
        .args(["done", "swim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn invalid_icon_is_rejected() {
    let home = TempDir::new().unwrap();

    habitr(&home)
        .args(["add", "Read", "-i", "rocket"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown icon"));
}

#[test]
fn remove_deletes_habit() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();
    habitr(&home)
        .args(["remove", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted habit Read"));

    habitr(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));
}

#[test]
fn stats_reports_streaks() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();
    habitr(&home).args(["done", "read"]).assert().success();

    habitr(&home)
        .args(["stats", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dayStreak\": 1"))
        .stdout(predicate::str::contains("\"totalCompletions\": 1"));
}

#[test]
fn week_outputs_seven_days() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();

    let output = habitr(&home)
        .args(["week", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let days: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(days.as_array().unwrap().len(), 7);
}

#[test]
fn list_json_is_machine_readable() {
    let home = TempDir::new().unwrap();

    habitr(&home).args(["add", "Read"]).assert().success();

    let output = habitr(&home)
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["items"][0]["name"], "Read");
    assert_eq!(parsed["items"][0]["completedToday"], false);
}

#[test]
fn icons_lists_fixed_sets() {
    let home = TempDir::new().unwrap();

    habitr(&home)
        .args(["icons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitness"))
        .stdout(predicate::str::contains("#6C5CE7"));
}
