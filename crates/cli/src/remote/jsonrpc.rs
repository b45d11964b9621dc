// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-RPC remote over HTTP.
//!
//! Every call is a `POST` carrying a JSON-RPC 2.0 envelope:
//!
//! ```text
//! {"jsonrpc": "2.0", "method": "call", "params": {...}, "id": 1}
//! ```
//!
//! The server answers with either `result` or an `error` object whose
//! user-facing message lives in `error.data.message` (or `error.message`).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lks_core::Record;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::service::{RemoteError, RemoteFuture, RemoteResult, RemoteService, SearchRequest};
use crate::config::RemoteConfig;

/// Longest slice of a non-JSON error body kept in [`RemoteError::Status`].
const MAX_BODY_EXCERPT: usize = 200;

/// Outgoing JSON-RPC envelope.
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'a str,
    pub method: &'a str,
    pub params: Value,
    pub id: u64,
}

impl<'a> RpcRequest<'a> {
    pub fn call(id: u64, params: Value) -> Self {
        RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            params,
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<RpcErrorData>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorData {
    #[serde(default)]
    message: Option<String>,
}

impl RpcErrorBody {
    fn into_message(self) -> String {
        self.data
            .and_then(|d| d.message)
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Interprets an HTTP response body as a JSON-RPC reply.
pub(crate) fn parse_response(status: u16, body: &str) -> RemoteResult<Value> {
    match serde_json::from_str::<RpcResponse>(body) {
        Ok(RpcResponse {
            error: Some(error), ..
        }) => Err(RemoteError::Server(error.into_message())),
        Ok(_) if status >= 400 => Err(RemoteError::Status {
            status,
            message: excerpt(body),
        }),
        Ok(RpcResponse { result, .. }) => Ok(result),
        Err(_) if status >= 400 => Err(RemoteError::Status {
            status,
            message: excerpt(body),
        }),
        Err(e) => Err(RemoteError::Decode(e.to_string())),
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Path of the `search_read` endpoint for a model.
pub(crate) fn search_path(model: &str) -> String {
    format!("/web/dataset/call_kw/{}/search_read", model)
}

/// JSON-RPC parameters for a `search_read` call.
pub(crate) fn search_params(request: &SearchRequest) -> Value {
    json!({
        "model": request.model,
        "method": "search_read",
        "args": [],
        "kwargs": {
            "domain": request.domain,
            "fields": request.fields,
            "limit": request.limit,
        },
    })
}

/// Production [`RemoteService`] speaking JSON-RPC over HTTP.
pub struct JsonRpcRemote {
    client: reqwest::Client,
    base_url: String,
    sync_path: String,
    next_id: AtomicU64,
}

impl JsonRpcRemote {
    /// Create a new client for the given server.
    pub fn new(base_url: &str, sync_path: &str, timeout: Duration) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        // Ensure base URL doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        let sync_path = if sync_path.starts_with('/') {
            sync_path.to_string()
        } else {
            format!("/{}", sync_path)
        };

        Ok(Self {
            client,
            base_url,
            sync_path,
            next_id: AtomicU64::new(1),
        })
    }

    /// Create a client from the `[remote]` configuration section.
    pub fn from_config(config: &RemoteConfig) -> RemoteResult<Self> {
        Self::new(
            &config.url,
            &config.sync_path,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the synchronization endpoint.
    pub fn sync_url(&self) -> String {
        format!("{}{}", self.base_url, self.sync_path)
    }

    async fn call(&self, path: &str, params: Value) -> RemoteResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest::call(id, params);

        tracing::debug!(%url, id, "rpc call");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(describe_transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(describe_transport_error)?;

        parse_response(status, &text)
    }
}

fn describe_transport_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Transport("request timed out".to_string())
    } else if e.is_connect() {
        RemoteError::Transport(format!("connection failed: {}", e))
    } else {
        RemoteError::Transport(e.to_string())
    }
}

impl RemoteService for JsonRpcRemote {
    fn trigger_sync(&self) -> RemoteFuture<'_, Value> {
        Box::pin(async move {
            let path = self.sync_path.clone();
            self.call(&path, json!({})).await
        })
    }

    fn search(&self, request: SearchRequest) -> RemoteFuture<'_, Vec<Record>> {
        Box::pin(async move {
            let result = self
                .call(&search_path(&request.model), search_params(&request))
                .await?;
            serde_json::from_value(result).map_err(|e| RemoteError::Decode(e.to_string()))
        })
    }
}
