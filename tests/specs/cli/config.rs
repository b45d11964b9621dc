// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file lookup and the `config` subcommands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's config: runs in `dir` with the user
/// config directory pointed inside it.
fn larksync(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("larksync");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("LARKSYNC_CONFIG")
        .env_remove("LARKSYNC_URL");
    cmd
}

#[test]
fn init_creates_config_in_current_directory() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created larksync.toml"));

    let content = std::fs::read_to_string(temp.path().join("larksync.toml")).unwrap();
    assert!(content.contains("[remote]"));
    assert!(content.contains("/lark_project_sync/sync"));
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    larksync(&temp).args(["config", "init"]).assert().success();

    larksync(&temp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_user_writes_to_config_dir() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .args(["config", "init", "--user"])
        .assert()
        .success();

    assert!(temp.path().join("xdg/larksync/config.toml").is_file());
    larksync(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn path_finds_config_in_parent_directory() {
    let temp = TempDir::new().unwrap();
    larksync(&temp).args(["config", "init"]).assert().success();
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    larksync(&temp)
        .current_dir(&nested)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("larksync.toml"));
}

#[test]
fn show_without_config_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no configuration found"))
        .stderr(predicate::str::contains("larksync config init"));
}

#[test]
fn show_applies_url_override() {
    let temp = TempDir::new().unwrap();
    larksync(&temp).args(["config", "init"]).assert().success();

    let output = larksync(&temp)
        .env("LARKSYNC_URL", "https://odoo.example.com")
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["remote"]["url"], "https://odoo.example.com");
    assert_eq!(value["search"]["model"], "lark.tasklist");
}

#[test]
fn explicit_config_flag_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(
        &path,
        "[remote]\nurl = \"https://custom.example.com\"\n\n[search]\nlimit = 3\n",
    )
    .unwrap();

    let output = larksync(&temp)
        .args(["--config", path.to_str().unwrap(), "config", "show", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["remote"]["url"], "https://custom.example.com");
    assert_eq!(value["search"]["limit"], 3);
    assert_eq!(value["remote"]["timeout_secs"], 120);
}

#[test]
fn invalid_url_is_rejected() {
    let temp = TempDir::new().unwrap();

    larksync(&temp)
        .env("LARKSYNC_URL", "ftp://example.com")
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid remote URL"));
}
