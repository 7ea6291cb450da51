//! E2E tests for basic CLI behavior

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn listedit() -> Command {
    cargo_bin_cmd!("listedit")
}

#[test]
fn help_shows_usage() {
    listedit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--classic"))
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn short_help_flag() {
    listedit()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_shows_package_version() {
    listedit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_option_is_invalid() {
    listedit()
        .arg("--bogus")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option: --bogus"));
}

#[test]
fn title_without_value_is_invalid() {
    listedit()
        .arg("--title")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--title requires a value"));
}
