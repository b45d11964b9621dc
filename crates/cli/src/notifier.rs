// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification sink that prints to the terminal.

use std::io::Write;
use std::sync::Mutex;

use lks_core::{Notification, NotificationSink, NotifyError, Severity};

use crate::colors;

/// Prints each notification as one prefixed line (`✓`, `✗`, or `i`).
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
    colorize: bool,
}

impl TerminalNotifier {
    /// Notifier writing to stderr, colored unless disabled by the environment.
    pub fn stderr() -> Self {
        Self::with_writer(std::io::stderr(), colors::should_colorize_stderr())
    }

    pub fn with_writer(out: impl Write + Send + 'static, colorize: bool) -> Self {
        TerminalNotifier {
            out: Mutex::new(Box::new(out)),
            colorize,
        }
    }
}

/// Format a notification line without color.
pub fn format_notification(notification: &Notification) -> String {
    let prefix = match notification.severity {
        Severity::Success => "✓",
        Severity::Danger => "✗",
        Severity::Info => "i",
    };
    format!("{} {}", prefix, notification.message)
}

impl NotificationSink for TerminalNotifier {
    fn add(&self, notification: &Notification) -> Result<(), NotifyError> {
        let line = format_notification(notification);
        let line = if self.colorize {
            colors::severity(notification.severity, &line)
        } else {
            line
        };
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", line)
            .and_then(|()| out.flush())
            .map_err(|e| NotifyError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
