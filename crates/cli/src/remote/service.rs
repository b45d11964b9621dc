// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote service trait and its error type.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use lks_core::{Domain, Record, RECORD_FIELDS};
use serde_json::Value;

/// Error type for remote calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced a response (network, timeout).
    #[error("{0}")]
    Transport(String),

    /// The server answered with an HTTP error and no RPC error body.
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The server reported an RPC-level error.
    #[error("{0}")]
    Server(String),

    /// The response could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Message shown to the user, with a fallback for empty errors.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Boxed future returned by [`RemoteService`] methods.
pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = RemoteResult<T>> + Send + 'a>>;

/// A search against a named record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub model: String,
    pub domain: Domain,
    pub fields: Vec<String>,
    pub limit: usize,
}

impl SearchRequest {
    /// Creates a request for the standard record fields.
    pub fn new(model: impl Into<String>, domain: Domain, limit: usize) -> Self {
        SearchRequest {
            model: model.into(),
            domain,
            fields: RECORD_FIELDS.iter().map(|f| f.to_string()).collect(),
            limit,
        }
    }
}

/// Operations the client components need from the server.
///
/// Implementations own their timeouts; a late response is reported as an
/// ordinary error.
pub trait RemoteService: Send + Sync {
    /// Fires the synchronization job and returns its payload.
    fn trigger_sync(&self) -> RemoteFuture<'_, Value>;

    /// Reads records matching the request, ranked by the server.
    fn search(&self, request: SearchRequest) -> RemoteFuture<'_, Vec<Record>>;
}

impl<T: RemoteService + ?Sized> RemoteService for Arc<T> {
    fn trigger_sync(&self) -> RemoteFuture<'_, Value> {
        (**self).trigger_sync()
    }

    fn search(&self, request: SearchRequest) -> RemoteFuture<'_, Vec<Record>> {
        (**self).search(request)
    }
}
