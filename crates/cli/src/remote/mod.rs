// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote service boundary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ SyncTrigger │────►│ RemoteService │────►│   Server    │
//! │ SearchClient│◄────│    (trait)    │◄────│ (JSON-RPC)  │
//! └─────────────┘     └───────────────┘     └─────────────┘
//! ```
//!
//! Components only see the [`RemoteService`] trait. [`JsonRpcRemote`] is
//! the production implementation; tests inject mocks.

mod jsonrpc;
mod service;

pub use jsonrpc::JsonRpcRemote;
pub use service::{RemoteError, RemoteFuture, RemoteResult, RemoteService, SearchRequest};
