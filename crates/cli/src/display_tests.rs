// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{TimeZone, Utc};
use yare::parameterized;

fn entry(message: &str) -> LogEntry {
    LogEntry::new(Utc.with_ymd_and_hms(2026, 3, 4, 10, 15, 2).unwrap(), message)
}

fn snapshot(query: &str, suggestions: Vec<Record>) -> SearchSnapshot {
    SearchSnapshot {
        query: query.to_string(),
        suggestions,
        loading: false,
        generation: 1,
    }
}

#[test]
fn test_format_log_line_plain() {
    assert_eq!(
        format_log_line(&entry("[info] Starting synchronization process..."), false),
        "[10:15:02] [info] Starting synchronization process..."
    );
}

#[parameterized(
    success = { "[success] done", colors::codes::SUCCESS_START },
    error = { "Synchronization failed: timeout", colors::codes::DANGER_START },
    debug = { "[debug] Initiating remote synchronization", colors::codes::MUTED_START },
)]
fn test_format_log_line_colored(message: &str, start: &str) {
    let line = format_log_line(&entry(message), true);
    assert!(line.starts_with(start));
    assert!(line.ends_with(colors::codes::RESET));
}

#[test]
fn test_format_log_panel() {
    let entries = vec![
        entry("[success] Synchronization completed successfully in 1.50 seconds"),
        entry("[debug] Initiating remote synchronization"),
    ];
    let panel = format_log_panel(Phase::Succeeded, &entries, false);
    assert_eq!(
        panel,
        "Sync log (succeeded):\n\
         \x20 [10:15:02] [success] Synchronization completed successfully in 1.50 seconds\n\
         \x20 [10:15:02] [debug] Initiating remote synchronization"
    );
}

#[test]
fn test_format_log_panel_empty() {
    let panel = format_log_panel(Phase::Idle, &[], false);
    assert_eq!(panel, "Sync log (idle):\n  (empty)");
}

#[test]
fn test_log_panel_json() {
    let entries = vec![entry("[error] Synchronization failed: timeout")];
    let value = log_panel_json(Phase::Failed, true, &entries);

    assert_eq!(value["phase"], "failed");
    assert_eq!(value["is_open"], true);
    assert_eq!(value["log"][0]["time"], "10:15:02");
    assert_eq!(value["log"][0]["classification"], "error");
    assert_eq!(
        value["log"][0]["message"],
        "[error] Synchronization failed: timeout"
    );
}

#[test]
fn test_format_suggestion() {
    let record = Record::new(3, "Platform")
        .with_member_count(12)
        .with_external_id("oc_91af");
    assert_eq!(
        format_suggestion(2, &record),
        "  2. Platform (12 members) [oc_91af]"
    );
    assert_eq!(format_suggestion(10, &Record::new(1, "Ops")), " 10. Ops");
}

#[test]
fn test_format_suggestions_lists_in_rank_order() {
    let text = format_suggestions(&snapshot(
        "p",
        vec![Record::new(1, "Platform"), Record::new(2, "Payments")],
    ));
    assert_eq!(text, "  1. Platform\n  2. Payments");
}

#[parameterized(
    with_query = { "xyz", "No suggestions for \"xyz\"" },
    without_query = { "", "No suggestions" },
)]
fn test_format_suggestions_empty(query: &str, expected: &str) {
    assert_eq!(format_suggestions(&snapshot(query, vec![])), expected);
}
