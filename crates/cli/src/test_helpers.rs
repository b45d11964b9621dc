// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test doubles for component tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use lks_core::{ManualClock, Notification, NotificationSink, NotifyError, Operator, Record};
use serde_json::Value;
use tokio::sync::oneshot;

use crate::remote::{RemoteError, RemoteFuture, RemoteResult, RemoteService, SearchRequest};

/// Scriptable remote service.
///
/// Sync results are served in order; search results are keyed by the text
/// of the request's `name ilike` predicate (empty string for no text).
/// Gated calls wait until the test sends their result.
#[derive(Default)]
pub struct MockRemote {
    sync_results: Mutex<VecDeque<RemoteResult<Value>>>,
    sync_gate: Mutex<Option<oneshot::Receiver<RemoteResult<Value>>>>,
    sync_advance: Mutex<Option<(ManualClock, Duration)>>,
    sync_calls: AtomicUsize,
    search_results: Mutex<HashMap<String, RemoteResult<Vec<Record>>>>,
    search_gates: Mutex<HashMap<String, oneshot::Receiver<RemoteResult<Vec<Record>>>>>,
    search_calls: Mutex<Vec<SearchRequest>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `trigger_sync` call.
    pub fn push_sync_result(&self, result: RemoteResult<Value>) {
        self.sync_results.lock().unwrap().push_back(result);
    }

    /// Make the next `trigger_sync` call wait for the returned sender.
    pub fn gate_sync(&self) -> oneshot::Sender<RemoteResult<Value>> {
        let (tx, rx) = oneshot::channel();
        *self.sync_gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Advance `clock` by `by` while each sync call is in flight.
    pub fn advance_clock_during_sync(&self, clock: ManualClock, by: Duration) {
        *self.sync_advance.lock().unwrap() = Some((clock, by));
    }

    pub fn sync_calls(&self) -> usize {
        self.sync_calls.load(Ordering::SeqCst)
    }

    /// Answer searches for `text` immediately with `result`.
    pub fn set_search_result(&self, text: &str, result: RemoteResult<Vec<Record>>) {
        self.search_results
            .lock()
            .unwrap()
            .insert(text.to_string(), result);
    }

    /// Make the next search for `text` wait for the returned sender.
    pub fn gate_search(&self, text: &str) -> oneshot::Sender<RemoteResult<Vec<Record>>> {
        let (tx, rx) = oneshot::channel();
        self.search_gates
            .lock()
            .unwrap()
            .insert(text.to_string(), rx);
        tx
    }

    pub fn search_calls(&self) -> Vec<SearchRequest> {
        self.search_calls.lock().unwrap().clone()
    }
}

fn search_text(request: &SearchRequest) -> String {
    request
        .domain
        .predicates()
        .iter()
        .find(|p| p.field == "name" && p.operator == Operator::ILike)
        .and_then(|p| p.value.as_str())
        .unwrap_or_default()
        .to_string()
}

impl RemoteService for MockRemote {
    fn trigger_sync(&self) -> RemoteFuture<'_, Value> {
        self.sync_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.sync_gate.lock().unwrap().take();
        let advance = self.sync_advance.lock().unwrap().clone();
        let queued = self.sync_results.lock().unwrap().pop_front();
        Box::pin(async move {
            if let Some((clock, by)) = advance {
                clock.advance(by);
            }
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(RemoteError::Transport("gate dropped".into()))),
                None => queued.unwrap_or(Ok(Value::Null)),
            }
        })
    }

    fn search(&self, request: SearchRequest) -> RemoteFuture<'_, Vec<Record>> {
        let text = search_text(&request);
        self.search_calls.lock().unwrap().push(request);
        let gate = self.search_gates.lock().unwrap().remove(&text);
        let immediate = self.search_results.lock().unwrap().get(&text).cloned();
        Box::pin(async move {
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(RemoteError::Transport("gate dropped".into()))),
                None => immediate.unwrap_or(Ok(Vec::new())),
            }
        })
    }
}

/// Notification sink that records everything it is given.
#[derive(Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Notification>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `add` always fails (after recording).
    pub fn failing() -> Self {
        RecordingSink {
            seen: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn add(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.seen.lock().unwrap().push(notification.clone());
        if self.fail {
            Err(NotifyError::Unavailable("toast service offline".into()))
        } else {
            Ok(())
        }
    }
}
