// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lks_core::{LogEntry, Record};
use serde_json::{json, Value};

use crate::colors;
use crate::search::SearchSnapshot;
use crate::trigger::Phase;

/// Format one log line as `[HH:MM:SS] message`, colored by classification.
pub fn format_log_line(entry: &LogEntry, colorize: bool) -> String {
    let line = entry.to_string();
    if colorize {
        colors::classified(entry.classification(), &line)
    } else {
        line
    }
}

/// Format the log panel, most recent entry first.
///
/// ```text
/// Sync log (succeeded):
///   [10:15:02] [success] Synchronization completed successfully in 1.50 seconds
///   [10:15:00] [debug] Initiating remote synchronization
///   [10:15:00] [info] Starting synchronization process...
/// ```
pub fn format_log_panel(phase: Phase, entries: &[LogEntry], colorize: bool) -> String {
    let title = format!("Sync log ({}):", phase);
    let mut output = vec![if colorize {
        colors::header(&title)
    } else {
        title
    }];
    if entries.is_empty() {
        output.push("  (empty)".to_string());
    }
    for entry in entries {
        output.push(format!("  {}", format_log_line(entry, colorize)));
    }
    output.join("\n")
}

/// Log panel as JSON: phase, open flag, and entries with their classes.
pub fn log_panel_json(phase: Phase, is_open: bool, entries: &[LogEntry]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "time": entry.time_label(),
                "timestamp": entry.timestamp,
                "message": entry.message,
                "classification": entry.classification(),
            })
        })
        .collect();
    json!({
        "phase": phase,
        "is_open": is_open,
        "log": entries,
    })
}

/// Format a ranked suggestion line, e.g. `  2. Platform (12 members) [oc_91af]`.
pub fn format_suggestion(rank: usize, record: &Record) -> String {
    match &record.external_id {
        Some(external_id) => format!("{:>3}. {} [{}]", rank, record, external_id),
        None => format!("{:>3}. {}", rank, record),
    }
}

/// Format the suggestion list for a search session.
pub fn format_suggestions(snapshot: &SearchSnapshot) -> String {
    if snapshot.suggestions.is_empty() {
        return if snapshot.query.is_empty() {
            "No suggestions".to_string()
        } else {
            format!("No suggestions for \"{}\"", snapshot.query)
        };
    }
    snapshot
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, record)| format_suggestion(i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
