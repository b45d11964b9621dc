// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User notifications.
//!
//! Components never talk to a toast subsystem directly; they hand a
//! [`Notification`] to a [`NotificationSink`] supplied by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message for the user.
///
/// Sticky notifications stay visible until dismissed; the rest expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub sticky: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, sticky: bool) -> Self {
        Notification {
            message: message.into(),
            severity,
            sticky,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, false)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger, false)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, false)
    }

    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }
}

/// Error raised by a sink that could not show a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification sink unavailable: {0}")]
    Unavailable(String),
}

/// Host-provided destination for notifications.
pub trait NotificationSink: Send + Sync {
    /// Shows a notification to the user.
    fn add(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Delivers a notification, falling back to `tracing` if the sink fails.
///
/// Sink failures never reach the caller.
pub fn deliver(sink: &dyn NotificationSink, notification: Notification) {
    if let Err(e) = sink.add(&notification) {
        match notification.severity {
            Severity::Danger => tracing::error!("{} ({})", notification.message, e),
            Severity::Info | Severity::Success => {
                tracing::info!("{} ({})", notification.message, e)
            }
        }
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
