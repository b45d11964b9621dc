// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lks-core: Shared library for the larksync client
//!
//! This crate provides the data structures used by the sync trigger and the
//! search client: the bounded status log, remote records, filter domains,
//! notifications, and the injectable clock.

pub mod clock;
pub mod domain;
pub mod error;
pub mod log;
pub mod notify;
pub mod record;

pub use clock::{ClockSource, ManualClock, SystemClock};
pub use domain::{Domain, Operator, Predicate};
pub use error::{Error, Result};
pub use log::{classify, Classification, LogBuffer, LogEntry, LogLevel, LOG_CAPACITY};
pub use notify::{deliver, Notification, NotificationSink, NotifyError, Severity};
pub use record::{Record, RECORD_FIELDS};
