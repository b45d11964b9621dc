// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn larksync() -> Command {
    let mut cmd = cargo_bin_cmd!("larksync");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands_and_quickstart() {
    larksync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Remote:"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn h_and_help_produce_same_output() {
    let short = larksync().arg("-h").output().unwrap();
    let long = larksync().arg("--help").output().unwrap();
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&short.stdout),
        String::from_utf8_lossy(&long.stdout)
    );
}

#[test]
fn no_arguments_shows_usage() {
    larksync()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[parameterized(
    sync = { "sync" },
    search = { "search" },
    config = { "config" },
    completion = { "completion" },
)]
fn command_supports_help_flag(command: &str) {
    larksync()
        .args([command, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn search_help_shows_examples() {
    larksync()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("--select"))
        .stdout(predicate::str::contains("--domain"));
}

#[parameterized(
    short = { "-v" },
    upper = { "-V" },
    long = { "--version" },
)]
fn version_flag_prints_version(flag: &str) {
    larksync()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_fails() {
    larksync()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
