// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lksync - project synchronization trigger and record search client.
//!
//! This crate provides the components behind the `larksync` CLI:
//!
//! - [`trigger::SyncTrigger`] - runs the remote synchronization job and keeps
//!   a bounded status log with an open/closed panel
//! - [`search::SearchClient`] - incremental record search that only applies
//!   the response to the latest query
//! - [`remote::RemoteService`] - the server boundary, implemented over
//!   JSON-RPC by [`remote::JsonRpcRemote`]
//! - [`Config`] - `larksync.toml` loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lksync::remote::JsonRpcRemote;
//! use lksync::trigger::{ElementId, SyncTrigger};
//! use lksync::notifier::TerminalNotifier;
//!
//! let config = lksync::config::load_config(None)?;
//! let remote = Arc::new(JsonRpcRemote::from_config(&config.remote)?);
//! let trigger = SyncTrigger::new(remote, Arc::new(TerminalNotifier::stderr()), ElementId(1));
//! trigger.trigger_sync().await?;
//! for entry in trigger.log_entries() {
//!     println!("{entry}");
//! }
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod notifier;
pub mod remote;
pub mod search;
pub mod trigger;

pub mod config;
pub mod error;

#[cfg(test)]
mod test_helpers;

pub use cli::{Cli, Command, ConfigCommand, OutputArgs, OutputFormat};
pub use commands::search::SearchArgs;
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Sync { output } => commands::sync::run(config_path, output.output),
        Command::Search {
            query,
            domain,
            limit,
            select,
            output,
        } => commands::search::run(
            config_path,
            SearchArgs {
                query,
                domain,
                limit,
                select,
                output: output.output,
            },
        ),
        Command::Config(cmd) => commands::config::run(config_path, cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "larksync", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
