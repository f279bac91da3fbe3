use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn glassbudget(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("glassbudget").unwrap();
    cmd.env("GLASSBUDGET_DATA_DIR", data_dir);
    cmd
}

#[test]
fn summary_runs_against_an_empty_store() {
    let dir = tempdir().unwrap();
    glassbudget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining"));
}

#[test]
fn add_then_list_shows_the_expense() {
    let dir = tempdir().unwrap();
    glassbudget(dir.path())
        .args(["add", "12.50", "Groceries", "weekly shop", "2025-08-18"])
        .assert()
        .success();
    glassbudget(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").and(predicate::str::contains("$12.50")));
}

#[test]
fn non_numeric_amount_skips_the_add() {
    let dir = tempdir().unwrap();
    glassbudget(dir.path())
        .args(["add", "abc", "Groceries"])
        .assert()
        .success();
    glassbudget(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));
}

#[test]
fn budget_setting_feeds_the_summary() {
    let dir = tempdir().unwrap();
    glassbudget(dir.path())
        .args(["budget", "80"])
        .assert()
        .success();
    glassbudget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$80.00"));
}

#[test]
fn practice_flags_first_person_speech() {
    let dir = tempdir().unwrap();
    glassbudget(dir.path())
        .args(["practice", "DelegateA", "I", "think", "we", "should", "act"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strike 1 of 3"));
    glassbudget(dir.path())
        .arg("speeches")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flagged"));
}

#[test]
fn unknown_command_prints_help() {
    let dir = tempdir().unwrap();
    glassbudget(dir.path())
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("glassbudget"));
}
