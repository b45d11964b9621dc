// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use lks_core::Domain;

use args::{parse_domain, positive};
pub use args::{OutputArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "larksync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Trigger project synchronization and search synced records")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Use this configuration file instead of searching for one
    #[arg(short = 'c', long = "config", global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the remote synchronization job and show its log
    #[command(after_help = colors::examples("\
Examples:
  larksync sync                 Synchronize and print the log panel
  larksync sync -o json         Print the log panel as JSON"))]
    Sync {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search records by name and optionally select one
    #[command(after_help = colors::examples("\
Examples:
  larksync search                               List the first suggestions
  larksync search ops                           Records whose name contains \"ops\"
  larksync search ops -n 3                      At most 3 suggestions
  larksync search ops --select 2                Select the second suggestion
  larksync search --domain '[[\"active\",\"=\",true]]'  Add a filter"))]
    Search {
        /// Text to match against record names (empty loads the first page)
        query: Option<String>,

        /// Extra filter as a JSON list of [field, operator, value] triples
        #[arg(long, value_name = "JSON", value_parser = parse_domain)]
        domain: Option<Domain>,

        /// Maximum number of suggestions
        #[arg(short = 'n', long, value_parser = positive)]
        limit: Option<usize>,

        /// Select the suggestion at this position (1-based)
        #[arg(long, value_name = "N", value_parser = positive)]
        select: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default configuration file
    ///
    /// Writes to `--config` when given, the user config directory with
    /// `--user`, and `./larksync.toml` otherwise.
    Init {
        /// Write to the user config directory
        #[arg(long)]
        user: bool,
    },

    /// Show the effective configuration
    Show {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the path of the configuration file in use
    Path,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
