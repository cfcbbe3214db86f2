//! Integration tests for the init command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn agentbus(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agentbus").unwrap();
    cmd.env("AGENTBUS_DIR", temp_dir.path().join(".agentbus"));
    cmd
}

#[test]
fn init_creates_storage_layout() {
    let temp_dir = TempDir::new().unwrap();

    agentbus(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized agentbus at:"));

    let root = temp_dir.path().join(".agentbus");
    assert!(root.join("messages").is_dir());
    assert_eq!(fs::read(root.join("last_seen.json")).unwrap(), b"{}");
}

#[test]
fn init_twice_is_a_no_op_success() {
    let temp_dir = TempDir::new().unwrap();

    agentbus(&temp_dir).arg("init").assert().success();

    // Seed some state, then re-init
    agentbus(&temp_dir)
        .arg("send")
        .arg("--author")
        .arg("alice")
        .arg("hello")
        .assert()
        .success();

    agentbus(&temp_dir).arg("init").assert().success();

    let root = temp_dir.path().join(".agentbus");
    let messages: Vec<_> = fs::read_dir(root.join("messages")).unwrap().collect();
    assert_eq!(messages.len(), 1, "re-init must not clobber messages");

    let cursors = fs::read_to_string(root.join("last_seen.json")).unwrap();
    assert!(cursors.contains("alice"), "re-init must not reset cursors");
}

#[test]
fn init_honors_dir_flag_over_env() {
    let temp_dir = TempDir::new().unwrap();
    let flag_root = temp_dir.path().join("elsewhere");

    agentbus(&temp_dir)
        .arg("init")
        .arg("--dir")
        .arg(&flag_root)
        .assert()
        .success();

    assert!(flag_root.join("messages").is_dir());
    assert!(!temp_dir.path().join(".agentbus").exists());
}
