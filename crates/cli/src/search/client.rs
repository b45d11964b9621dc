// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use lks_core::{deliver, Domain, Notification, NotificationSink, Predicate, Record};
use serde::Serialize;

use crate::config::SearchConfig;
use crate::remote::{RemoteService, SearchRequest};

/// Callback invoked with the record the user picked.
pub type OnSelect = Box<dyn Fn(&Record) + Send + Sync>;

/// What to search and how to report failures.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub model: String,
    /// Extra predicates appended after the name filter.
    pub domain: Domain,
    pub limit: usize,
    /// Notification text when a search fails.
    pub error_message: String,
}

impl SearchOptions {
    pub fn from_config(config: &SearchConfig) -> Self {
        SearchOptions {
            model: config.model.clone(),
            domain: config.domain.clone(),
            limit: config.limit,
            error_message: config.error_message.clone(),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

/// Point-in-time copy of the client state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub suggestions: Vec<Record>,
    pub loading: bool,
    pub generation: u64,
}

#[derive(Default)]
struct SearchState {
    query: String,
    suggestions: Vec<Record>,
    loading: bool,
    generation: u64,
}

/// Holds one issued search until its response is applied.
///
/// Dropping it unsettled (the caller abandoned the future) clears `loading`
/// unless a newer search has taken over.
struct PendingSearch<'a> {
    client: &'a SearchClient,
    generation: u64,
    settled: bool,
}

impl<'a> PendingSearch<'a> {
    fn settle(mut self) -> MutexGuard<'a, SearchState> {
        self.settled = true;
        self.client.state()
    }
}

impl Drop for PendingSearch<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.client.state();
        if state.generation == self.generation && state.loading {
            state.loading = false;
            tracing::debug!(generation = self.generation, "search abandoned before completion");
        }
    }
}

/// Incremental search client that keeps only the latest response.
pub struct SearchClient {
    remote: Arc<dyn RemoteService>,
    notifier: Arc<dyn NotificationSink>,
    options: SearchOptions,
    on_select: Option<OnSelect>,
    state: Mutex<SearchState>,
}

impl SearchClient {
    pub fn new(
        remote: Arc<dyn RemoteService>,
        notifier: Arc<dyn NotificationSink>,
        options: SearchOptions,
    ) -> Self {
        SearchClient {
            remote,
            notifier,
            options,
            on_select: None,
            state: Mutex::new(SearchState::default()),
        }
    }

    /// Set the callback run by [`select_suggestion`](Self::select_suggestion).
    pub fn on_select(mut self, callback: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn query(&self) -> String {
        self.state().query.clone()
    }

    pub fn suggestions(&self) -> Vec<Record> {
        self.state().suggestions.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn generation(&self) -> u64 {
        self.state().generation
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        let state = self.state();
        SearchSnapshot {
            query: state.query.clone(),
            suggestions: state.suggestions.clone(),
            loading: state.loading,
            generation: state.generation,
        }
    }

    /// Update the query and search for it.
    ///
    /// The query, generation, and loading flag change before this returns;
    /// the returned future performs the remote call and applies the result
    /// if no newer query was issued meanwhile.
    pub fn set_query(&self, text: impl Into<String>) -> impl Future<Output = ()> + Send + '_ {
        let (pending, request) = self.issue(Some(text.into()));
        self.settle(pending, request)
    }

    /// Search with the current query (initial population).
    pub fn load(&self) -> impl Future<Output = ()> + Send + '_ {
        let (pending, request) = self.issue(None);
        self.settle(pending, request)
    }

    /// Hand `record` to the host, then reset the query and suggestions.
    pub fn select_suggestion(&self, record: &Record) {
        if let Some(callback) = &self.on_select {
            callback(record);
        }
        let mut state = self.state();
        state.query.clear();
        state.suggestions.clear();
        state.loading = false;
        state.generation += 1;
    }

    fn issue(&self, text: Option<String>) -> (PendingSearch<'_>, SearchRequest) {
        let mut state = self.state();
        if let Some(text) = text {
            state.query = text;
        }
        state.generation += 1;
        state.loading = true;

        let mut domain = Domain::new();
        if !state.query.is_empty() {
            domain.push(Predicate::contains("name", &state.query));
        }
        domain.extend(self.options.domain.predicates().iter().cloned());

        let pending = PendingSearch {
            client: self,
            generation: state.generation,
            settled: false,
        };
        (pending, SearchRequest::new(self.options.model.clone(), domain, self.options.limit))
    }

    async fn settle(&self, pending: PendingSearch<'_>, request: SearchRequest) {
        let result = self.remote.search(request).await;

        let failure = {
            let generation = pending.generation;
            let mut state = pending.settle();
            if state.generation != generation {
                tracing::debug!(
                    generation,
                    current = state.generation,
                    "discarding stale search response"
                );
                return;
            }
            state.loading = false;
            match result {
                Ok(records) => {
                    state.suggestions = records;
                    None
                }
                Err(e) => Some(e),
            }
        };

        if let Some(e) = failure {
            tracing::error!("error loading suggestions: {}", e);
            deliver(
                self.notifier.as_ref(),
                Notification::danger(self.options.error_message.clone()),
            );
        }
    }
}
