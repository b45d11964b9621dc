// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn larksync() -> Command {
    cargo_bin_cmd!("larksync")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = larksync().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[test]
fn completion_bash_mentions_commands() {
    let output = larksync().args(["completion", "bash"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("_larksync"));
    for command in ["sync", "search", "config"] {
        assert!(stdout.contains(command), "missing {command}");
    }
}

#[test]
fn completion_without_shell_shows_help() {
    let output = larksync().arg("completion").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn completion_invalid_shell_fails() {
    let output = larksync()
        .args(["completion", "not-a-shell"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
