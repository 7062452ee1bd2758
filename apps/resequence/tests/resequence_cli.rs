//! Integration tests for the resequence CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn resequence_cmd() -> Command {
    cargo_bin_cmd!("resequence")
}

fn touch(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn names(dir: &Path) -> Vec<String> {
    let mut out: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    out.sort();
    out
}

#[test]
fn test_renumbers_directory() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "3.jpg", "three");
    touch(temp.path(), "1.jpg", "one");
    touch(temp.path(), "7.jpg", "seven");
    touch(temp.path(), "notes.jpg", "notes");

    let mut cmd = resequence_cmd();
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3.jpg -> 2.jpg"))
        .stdout(predicate::str::contains("7.jpg -> 3.jpg"))
        .stdout(predicate::str::contains("notes.jpg -> 4.jpg"))
        .stdout(predicate::str::contains("Resequenced 4 file(s)"));

    assert_eq!(
        names(temp.path()),
        vec!["1.jpg", "2.jpg", "3.jpg", "4.jpg"]
    );
    assert_eq!(fs::read_to_string(temp.path().join("4.jpg")).unwrap(), "notes");
}

#[test]
fn test_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "5.jpg", "five");

    let mut cmd = resequence_cmd();
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("5.jpg -> 1.jpg"));

    assert_eq!(names(temp.path()), vec!["1.jpg"]);
}

#[test]
fn test_missing_directory_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let mut cmd = resequence_cmd();
    cmd.arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_dry_run_makes_no_changes() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "3.jpg", "three");
    touch(temp.path(), "1.jpg", "one");

    let mut cmd = resequence_cmd();
    cmd.arg(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.jpg -> 2.jpg"))
        .stdout(predicate::str::contains("dry run"));

    assert_eq!(names(temp.path()), vec!["1.jpg", "3.jpg"]);
}

#[test]
fn test_ext_flag_selects_other_extensions() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "8.png", "eight");
    touch(temp.path(), "2.png", "two");
    touch(temp.path(), "9.jpg", "jpg stays");

    let mut cmd = resequence_cmd();
    cmd.arg(temp.path())
        .args(["--ext", "png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.png -> 1.png"))
        .stdout(predicate::str::contains("8.png -> 2.png"));

    assert_eq!(names(temp.path()), vec!["1.png", "2.png", "9.jpg"]);
}

#[test]
fn test_empty_directory_reports_nothing_to_do() {
    let temp = TempDir::new().unwrap();

    let mut cmd = resequence_cmd();
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to renumber"));
}

#[test]
fn test_version_flag() {
    let mut cmd = resequence_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("resequence"));
}

#[test]
fn test_help_flag() {
    let mut cmd = resequence_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gap-free"))
        .stdout(predicate::str::contains("--dry-run"));
}
