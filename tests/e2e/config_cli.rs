//! E2E tests for config file and log file handling

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn listedit() -> Command {
    cargo_bin_cmd!("listedit")
}

#[test]
fn missing_explicit_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    listedit()
        .env_remove("LISTEDIT_LOG")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn malformed_explicit_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[general]\nvariant = \"tabs\"\n").unwrap();

    listedit()
        .env_remove("LISTEDIT_LOG")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn unwritable_log_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("listedit.log");

    listedit().arg("--log-file").arg(&path).assert().code(2);
}

#[test]
fn config_flag_without_path_is_invalid() {
    listedit().arg("--config").assert().code(3);
}
