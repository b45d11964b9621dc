// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod search;
pub mod sync;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::notifier::TerminalNotifier;
use crate::remote::JsonRpcRemote;

/// Build the single-threaded runtime a command drives its components on.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Remote service and notifier for a command, built from `config`.
pub(crate) fn connect(config: &Config) -> Result<(Arc<JsonRpcRemote>, Arc<TerminalNotifier>)> {
    let remote = JsonRpcRemote::from_config(&config.remote)?;
    tracing::debug!(url = remote.base_url(), "connecting");
    Ok((Arc::new(remote), Arc::new(TerminalNotifier::stderr())))
}
