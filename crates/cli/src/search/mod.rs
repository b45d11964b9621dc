// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced search-and-select over a remote record directory.
//!
//! ```text
//! set_query("ab") ──► generation += 1, loading = true
//!        │
//!        └─ future ─► RemoteService::search ─► settle(generation)
//!                                                 │
//!                          generation is current ─┼─► suggestions / notify
//!                          generation is stale ───┴─► dropped
//! ```
//!
//! The host debounces keystrokes; every call that reaches the client issues
//! a request. Responses may arrive in any order and only the one matching
//! the latest generation is applied.

mod client;

pub use client::{OnSelect, SearchClient, SearchOptions, SearchSnapshot};
