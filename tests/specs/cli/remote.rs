// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sync` and `search` against an unreachable server.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens on the discard port.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

fn larksync(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("larksync");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("LARKSYNC_URL", UNREACHABLE_URL)
        .env_remove("LARKSYNC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn sync_failure_prints_log_and_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .arg("sync")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Sync log (failed):"))
        .stdout(predicate::str::contains("[error] Synchronization failed:"))
        .stdout(predicate::str::contains("[info] Starting synchronization process..."))
        .stderr(predicate::str::contains("✗ Synchronization failed:"))
        .stderr(predicate::str::contains("error: synchronization failed"));
}

#[test]
fn sync_failure_json_output() {
    let temp = TempDir::new().unwrap();

    let output = larksync(&temp).args(["sync", "-o", "json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["phase"], "failed");
    assert_eq!(value["is_open"], true);
    assert_eq!(value["log"][0]["classification"], "error");
    assert_eq!(value["log"].as_array().unwrap().len(), 3);
}

#[test]
fn search_failure_notifies_without_failing() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .args(["search", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions for \"ops\""))
        .stderr(predicate::str::contains("✗ Error loading suggestions"));
}

#[test]
fn search_error_text_comes_from_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("larksync.toml"),
        "[search]\nerror_message = \"Fehler beim Laden\"\n",
    )
    .unwrap();

    larksync(&temp)
        .arg("search")
        .assert()
        .success()
        .stderr(predicate::str::contains("✗ Fehler beim Laden"));
}

#[test]
fn select_without_suggestions_fails() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .args(["search", "ops", "--select", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no suggestion at index 1"));
}

#[test]
fn invalid_domain_is_rejected_before_connecting() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .args(["search", "--domain", "[[\"name\"]]"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--domain"));
}
