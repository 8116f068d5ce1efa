#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stash_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("stash"));
    cmd.env("STASH_DIR", dir)
        .env_remove("STASH_TEASER_LINES")
        .env_remove("RUST_LOG");
    cmd
}

/// Seeds two stashes a minute apart: "alpha" (older) and "beta" (newer).
fn seed_alpha_beta(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("2024-05-01 09:00:00.txt"), "alpha\n").unwrap();
    fs::write(dir.join("2024-05-01 09:01:00.txt"), "beta\n").unwrap();
}

fn stash_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".txt"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_create_then_take_round_trip() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("stashes");
    let content = "first line\nsecond line\n\tindented, no trailing newline";

    stash_cmd(&dir)
        .write_stdin(content)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stashed "))
        .stdout(predicate::str::contains("second line"));

    // Directory is created on first write
    assert_eq!(stash_files(&dir).len(), 1);

    let output = stash_cmd(&dir).args(["-t", "1"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, content.as_bytes());
}

#[test]
fn test_created_file_is_named_by_timestamp() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().to_path_buf();

    stash_cmd(&dir).write_stdin("hello").assert().success();

    let names = stash_files(&dir);
    assert_eq!(names.len(), 1);
    let label = names[0].strip_suffix(".txt").unwrap();
    assert!(
        chrono::NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected stash name: {}",
        names[0]
    );
    assert_eq!(fs::read_to_string(dir.join(&names[0])).unwrap(), "hello");
}

#[test]
fn test_empty_stdin_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("stashes");

    stash_cmd(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content to stash"));

    assert!(!dir.exists());
}

#[test]
fn test_take_resolves_newest_first() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    stash_cmd(temp.path())
        .args(["--take", "1"])
        .assert()
        .success()
        .stdout("beta\n");

    stash_cmd(temp.path())
        .args(["-t", "2"])
        .assert()
        .success()
        .stdout("alpha\n");
}

#[test]
fn test_take_out_of_range() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    for n in ["0", "-1", "3"] {
        stash_cmd(temp.path())
            .args(["-t", n])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(format!(
                "stash number {} is out of range: from 1 to 2",
                n
            )));
    }
}

#[test]
fn test_take_on_empty_store_fails() {
    let temp = TempDir::new().unwrap();

    stash_cmd(&temp.path().join("never-created"))
        .args(["-t", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from 1 to 0"));
}

#[test]
fn test_list_newest_first_with_countdown() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    stash_cmd(temp.path())
        .args(["-l", "2", "--no-color"])
        .assert()
        .success()
        .stdout("2) 2024-05-01 09:01:00\nbeta\n\n1) 2024-05-01 09:00:00\nalpha\n");
}

#[test]
fn test_list_limit_out_of_range() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    stash_cmd(temp.path())
        .args(["--limit", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "limit 5 is out of range: from 1 to 2",
        ));
}

#[test]
fn test_list_truncates_to_teaser() {
    let temp = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=20).map(|i| format!("line {}", i)).collect();
    fs::write(temp.path().join("2024-05-01 09:00:00.txt"), lines.join("\n")).unwrap();

    stash_cmd(temp.path())
        .args(["-l", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 10"))
        .stdout(predicate::str::contains("line 11").not());

    stash_cmd(temp.path())
        .env("STASH_TEASER_LINES", "2")
        .args(["-l", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains("line 3").not());
}

#[test]
fn test_list_ignores_non_stash_files() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());
    fs::write(temp.path().join("notes.md"), "not a stash").unwrap();
    fs::create_dir(temp.path().join("archive")).unwrap();

    stash_cmd(temp.path())
        .args(["-l", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from 1 to 2"));
}

#[test]
fn test_limit_wins_over_take() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    stash_cmd(temp.path())
        .args(["-t", "1", "-l", "1", "--no-color"])
        .assert()
        .success()
        .stdout("1) 2024-05-01 09:01:00\nbeta\n");
}

#[test]
fn test_list_json_output() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    let output = stash_cmd(temp.path())
        .args(["-l", "2", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["index"], 2);
    assert_eq!(parsed[0]["label"], "2024-05-01 09:01:00");
    assert_eq!(parsed[0]["teaser"], "beta\n");
    assert_eq!(parsed[1]["label"], "2024-05-01 09:00:00");
}

#[test]
fn test_zero_teaser_lines_rejected() {
    let temp = TempDir::new().unwrap();
    seed_alpha_beta(temp.path());

    stash_cmd(temp.path())
        .args(["-l", "1", "--teaser-lines", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("teaser lines must be at least 1"));
}

#[test]
fn test_stash_dir_that_is_a_file_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("not-a-dir");
    fs::write(&dir, "plain file").unwrap();

    for args in [&["-l", "1"][..], &["-t", "1"][..]] {
        stash_cmd(&dir)
            .args(args)
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("Error: IO error"));
    }

    stash_cmd(&dir)
        .write_stdin("x")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: IO error"));

    assert_eq!(fs::read_to_string(&dir).unwrap(), "plain file");
}
