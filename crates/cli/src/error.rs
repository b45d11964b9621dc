// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::remote::RemoteError;

/// All possible errors that can occur in the larksync CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration found\n  hint: run 'larksync config init' or set LARKSYNC_CONFIG")]
    ConfigNotFound,

    #[error("configuration already exists at {0}")]
    ConfigExists(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid remote URL '{0}'\n  hint: the URL must start with http:// or https://")]
    InvalidUrl(String),

    #[error("{0}")]
    Remote(#[from] RemoteError),

    #[error("synchronization failed")]
    SyncFailed,

    #[error("no suggestion at index {index}\n  hint: the search returned {count} suggestion(s)")]
    SuggestionOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Core(#[from] lks_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for larksync operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
