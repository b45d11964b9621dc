// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lks-core operations.

use thiserror::Error;

/// All possible errors that can occur in lks-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid operator: '{0}'\n  hint: valid operators are: =, !=, <, <=, >, >=, like, ilike, in, not in")]
    InvalidOperator(String),

    #[error("invalid predicate: {0}\n  hint: predicates are written as [field, operator, value]")]
    InvalidPredicate(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lks-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
