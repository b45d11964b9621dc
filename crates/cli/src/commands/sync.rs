// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::colors;
use crate::config::load_config;
use crate::display::{format_log_panel, log_panel_json};
use crate::error::{Error, Result};
use crate::trigger::{ElementId, SyncTrigger};

/// The CLI has no element tree; the trigger gets a fixed anchor.
const TRIGGER_ANCHOR: ElementId = ElementId(1);

pub fn run(config_path: Option<&Path>, output: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let (remote, notifier) = super::connect(&config)?;
    let trigger = SyncTrigger::new(remote, notifier, TRIGGER_ANCHOR);

    let runtime = super::runtime()?;
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(execute(
        &trigger,
        output,
        colors::should_colorize(),
        &mut stdout,
    ))
}

/// Trigger one sync and print the log panel.
pub(crate) async fn execute(
    trigger: &SyncTrigger,
    output: OutputFormat,
    colorize: bool,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = trigger.trigger_sync().await;

    let entries = trigger.log_entries();
    match output {
        OutputFormat::Text => {
            if trigger.is_open() {
                writeln!(
                    out,
                    "{}",
                    format_log_panel(trigger.phase(), &entries, colorize)
                )?;
            }
        }
        OutputFormat::Json => {
            let value = log_panel_json(trigger.phase(), trigger.is_open(), &entries);
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::SyncFailed),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
