// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help, log panel, and notification output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use lks_core::{Classification, Severity};

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Completed operations: soft green
    pub const SUCCESS: u8 = 114;
    /// Failures: soft red
    pub const DANGER: u8 = 167;
    /// Diagnostic lines: dark grey
    pub const MUTED: u8 = 240;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    pub const SUCCESS_START: &str = "\x1b[38;5;114m";
    pub const DANGER_START: &str = "\x1b[38;5;167m";
    pub const MUTED_START: &str = "\x1b[38;5;240m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color decision forced by the environment, if any.
fn env_override() -> Option<bool> {
    if env::no_color() {
        return Some(false);
    }
    if env::force_color() {
        return Some(true);
    }
    None
}

/// Check if stdout output should be colored.
pub fn should_colorize() -> bool {
    env_override().unwrap_or_else(|| std::io::stdout().is_terminal())
}

/// Check if stderr output (notifications) should be colored.
pub fn should_colorize_stderr() -> bool {
    env_override().unwrap_or_else(|| std::io::stderr().is_terminal())
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn success(text: &str) -> String {
    paint(codes::SUCCESS, text)
}

pub fn danger(text: &str) -> String {
    paint(codes::DANGER, text)
}

pub fn muted(text: &str) -> String {
    paint(codes::MUTED, text)
}

/// Color a log line by its classification. Info lines stay uncolored.
pub fn classified(classification: Classification, text: &str) -> String {
    match classification {
        Classification::Success => success(text),
        Classification::Error => danger(text),
        Classification::Debug => muted(text),
        Classification::Info => text.to_string(),
    }
}

/// Color a notification line by its severity.
pub fn severity(severity: Severity, text: &str) -> String {
    match severity {
        Severity::Success => success(text),
        Severity::Danger => danger(text),
        Severity::Info => context(text),
    }
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   larksync search ops       Search for "ops"
///   larksync sync -o json     Sync and print the log as JSON
/// ```
///
/// Section headers (lines ending with `:`) get the header color; commands
/// (text before a run of 2+ spaces) get the literal color, with `<placeholders>`
/// and quoted arguments as context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&colorize_command(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
            continue;
        }

        result.push_str(line);
    }

    result
}

/// Colorize a command, highlighting `<placeholders>` and quoted arguments as context.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut plain_start = 0;
    let mut chars = cmd.char_indices();

    while let Some((i, c)) = chars.next() {
        let close = match c {
            '"' => '"',
            '<' => '>',
            _ => continue,
        };
        if i > plain_start {
            result.push_str(&literal(&cmd[plain_start..i]));
        }
        let mut end = cmd.len();
        for (j, ch) in chars.by_ref() {
            if ch == close {
                end = j + 1;
                break;
            }
        }
        result.push_str(&context(&cmd[i..end]));
        plain_start = end;
    }

    if plain_start < cmd.len() {
        result.push_str(&literal(&cmd[plain_start..]));
    }
    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut space_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b' ' {
            if space_start.is_none() {
                space_start = Some(i);
            }
        } else if let Some(start) = space_start.take() {
            if i - start >= 2 {
                return Some(start);
            }
        }
    }

    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
