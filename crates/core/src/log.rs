// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded, classified status log.
//!
//! The log keeps at most [`LOG_CAPACITY`] entries, most recent first.
//! Rendering severity is inferred from the message text by [`classify`];
//! the [`LogLevel`] passed to [`LogBuffer::append`] only picks the
//! `tracing` level the line is mirrored at.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{ClockSource, SystemClock};

/// Maximum number of entries retained by a [`LogBuffer`].
pub const LOG_CAPACITY: usize = 50;

/// Caller intent for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
    Success,
    Error,
}

impl LogLevel {
    /// Text marker that makes a message classify as this level.
    pub fn marker(&self) -> &'static str {
        match self {
            LogLevel::Info => "[info]",
            LogLevel::Debug => "[debug]",
            LogLevel::Success => "[success]",
            LogLevel::Error => "[error]",
        }
    }

    /// Prefixes `message` with this level's marker.
    pub fn tag(&self, message: &str) -> String {
        format!("{} {}", self.marker(), message)
    }
}

/// Rendering class of a log entry, derived from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Success,
    Error,
    Debug,
    Info,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Success => "success",
            Classification::Error => "error",
            Classification::Debug => "debug",
            Classification::Info => "info",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a message by case-sensitive substring markers.
///
/// Precedence: `[success]`, then `failed` or `error`, then `[debug]`,
/// otherwise info. A message mentioning "error" in prose lands in
/// [`Classification::Error`] even when it was logged as info.
pub fn classify(message: &str) -> Classification {
    if message.contains("[success]") {
        Classification::Success
    } else if message.contains("failed") || message.contains("error") {
        Classification::Error
    } else if message.contains("[debug]") {
        Classification::Debug
    } else {
        Classification::Info
    }
}

/// A single timestamped log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        LogEntry {
            timestamp,
            message: message.into(),
        }
    }

    /// Rendering class, computed from the message on every call.
    pub fn classification(&self) -> Classification {
        classify(&self.message)
    }

    /// Wall clock time at second resolution, `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.time_label(), self.message)
    }
}

/// Ordered log, most recent first, bounded to [`LOG_CAPACITY`] entries.
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    clock: Arc<dyn ClockSource>,
}

impl LogBuffer {
    /// Creates an empty buffer stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty buffer with a custom clock source.
    pub fn with_clock(clock: Arc<dyn ClockSource>) -> Self {
        LogBuffer {
            entries: VecDeque::with_capacity(LOG_CAPACITY + 1),
            clock,
        }
    }

    /// Prepends a new entry, evicting the oldest when over capacity.
    pub fn append(&mut self, message: impl Into<String>, level: LogLevel) -> &LogEntry {
        let entry = LogEntry::new(self.clock.now(), message);
        match level {
            LogLevel::Error => tracing::error!(target: "larksync::log", "{}", entry),
            LogLevel::Debug => tracing::debug!(target: "larksync::log", "{}", entry),
            LogLevel::Info | LogLevel::Success => {
                tracing::info!(target: "larksync::log", "{}", entry)
            }
        }

        self.entries.push_front(entry);
        self.entries.truncate(LOG_CAPACITY);
        &self.entries[0]
    }

    /// Entries in rendering order, most recent first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &LogEntry> + DoubleEndedIterator {
        self.entries.iter()
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the entries out, most recent first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBuffer")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
