// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The sync trigger component.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use lks_core::clock::elapsed_secs;
use lks_core::{deliver, ClockSource, LogBuffer, LogEntry, LogLevel, Notification};
use lks_core::{NotificationSink, SystemClock};
use serde::Serialize;
use serde_json::Value;

use super::outside_click::{ClickTarget, ElementId};
use crate::remote::{RemoteError, RemoteService};

/// Lifecycle phase of the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a `trigger_sync()` call that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The remote job ran; carries its payload.
    Completed(Value),
    /// A sync was already in flight, so nothing was started.
    AlreadyRunning,
}

struct TriggerState {
    phase: Phase,
    is_open: bool,
    log: LogBuffer,
}

impl TriggerState {
    fn log(&mut self, level: LogLevel, message: &str) {
        self.log.append(level.tag(message), level);
    }
}

/// Fires the remote synchronization job and keeps a status log of it.
pub struct SyncTrigger {
    remote: Arc<dyn RemoteService>,
    notifier: Arc<dyn NotificationSink>,
    clock: Arc<dyn ClockSource>,
    anchor: ElementId,
    state: Mutex<TriggerState>,
}

impl SyncTrigger {
    /// Create a trigger using the system clock.
    pub fn new(
        remote: Arc<dyn RemoteService>,
        notifier: Arc<dyn NotificationSink>,
        anchor: ElementId,
    ) -> Self {
        Self::with_clock(remote, notifier, anchor, Arc::new(SystemClock))
    }

    /// Create a trigger with a custom clock (for testing).
    pub fn with_clock(
        remote: Arc<dyn RemoteService>,
        notifier: Arc<dyn NotificationSink>,
        anchor: ElementId,
        clock: Arc<dyn ClockSource>,
    ) -> Self {
        SyncTrigger {
            remote,
            notifier,
            anchor,
            state: Mutex::new(TriggerState {
                phase: Phase::Idle,
                is_open: false,
                log: LogBuffer::with_clock(Arc::clone(&clock)),
            }),
            clock,
        }
    }

    fn state(&self) -> MutexGuard<'_, TriggerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    /// Whether the log panel is expanded.
    pub fn is_open(&self) -> bool {
        self.state().is_open
    }

    /// Whether a sync is in flight (hosts disable the control while true).
    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Log entries, most recent first.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.state().log.snapshot()
    }

    /// The element the trigger is rendered in.
    pub fn anchor(&self) -> ElementId {
        self.anchor
    }

    pub fn open(&self) {
        self.state().is_open = true;
    }

    pub fn close(&self) {
        self.state().is_open = false;
    }

    pub fn toggle(&self) {
        let mut state = self.state();
        state.is_open = !state.is_open;
    }

    /// Whether a click landed on the trigger or one of its descendants.
    pub fn is_inside(&self, target: &ClickTarget) -> bool {
        target.contains(self.anchor)
    }

    /// Run the remote synchronization job.
    ///
    /// Returns `Ok(SyncOutcome::AlreadyRunning)` without side effects when a
    /// sync is already in flight. A remote failure is logged, notified, and
    /// returned.
    pub async fn trigger_sync(&self) -> Result<SyncOutcome, RemoteError> {
        let Some(run) = self.begin() else {
            tracing::debug!("sync already running, ignoring trigger");
            return Ok(SyncOutcome::AlreadyRunning);
        };

        let result = self.remote.trigger_sync().await;
        let elapsed = elapsed_secs(run.started_ms, self.clock.now_ms());

        match result {
            Ok(payload) => {
                let message = format!(
                    "Synchronization completed successfully in {:.2} seconds",
                    elapsed
                );
                {
                    let mut state = run.settle(Phase::Succeeded);
                    state.log(LogLevel::Success, &message);
                    if is_truthy(&payload) {
                        state.log(LogLevel::Debug, &format!("Sync result: {}", payload));
                    }
                    state.is_open = true;
                }
                deliver(self.notifier.as_ref(), Notification::success(message));
                Ok(SyncOutcome::Completed(payload))
            }
            Err(e) => {
                let message = format!("Synchronization failed: {}", e.user_message());
                {
                    let mut state = run.settle(Phase::Failed);
                    state.log(LogLevel::Error, &message);
                    state.is_open = true;
                }
                tracing::error!("error during synchronization: {}", e);
                deliver(self.notifier.as_ref(), Notification::danger(message).sticky());
                Err(e)
            }
        }
    }

    fn begin(&self) -> Option<RunGuard<'_>> {
        let mut state = self.state();
        if state.phase == Phase::Running {
            return None;
        }
        state.phase = Phase::Running;
        state.log(LogLevel::Info, "Starting synchronization process...");
        state.log(LogLevel::Debug, "Initiating remote synchronization");
        drop(state);

        Some(RunGuard {
            trigger: self,
            started_ms: self.clock.now_ms(),
            settled: false,
        })
    }
}

/// Holds the Running phase for one in-flight sync.
///
/// Dropping it unsettled (the caller abandoned the future) returns the
/// trigger to Idle.
struct RunGuard<'a> {
    trigger: &'a SyncTrigger,
    started_ms: u64,
    settled: bool,
}

impl<'a> RunGuard<'a> {
    fn settle(mut self, phase: Phase) -> MutexGuard<'a, TriggerState> {
        self.settled = true;
        let mut state = self.trigger.state();
        state.phase = phase;
        state
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.trigger.state();
        if state.phase == Phase::Running {
            state.phase = Phase::Idle;
            state.log(LogLevel::Info, "Synchronization cancelled before completion");
        }
    }
}

/// Whether a sync payload is worth logging (JSON-falsy values are not).
pub(super) fn is_truthy(payload: &Value) -> bool {
    match payload {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
