// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use lks_core::{Domain, Record};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::load_config;
use crate::display::{format_suggestion, format_suggestions};
use crate::error::{Error, Result};
use crate::search::{SearchClient, SearchOptions};

/// Arguments of `larksync search`.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub domain: Option<Domain>,
    pub limit: Option<usize>,
    /// 1-based position of the suggestion to select.
    pub select: Option<usize>,
    pub output: OutputFormat,
}

/// Record handed to the selection callback.
pub(crate) type Selection = Arc<Mutex<Option<Record>>>;

pub fn run(config_path: Option<&Path>, args: SearchArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let (remote, notifier) = super::connect(&config)?;

    let mut options = SearchOptions::from_config(&config.search);
    if let Some(domain) = &args.domain {
        options.domain.extend(domain.predicates().iter().cloned());
    }
    if let Some(limit) = args.limit {
        options.limit = limit;
    }

    let selection = Selection::default();
    let client = SearchClient::new(remote, notifier, options).on_select(recorder(&selection));

    let runtime = super::runtime()?;
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(execute(&client, &selection, &args, &mut stdout))
}

/// Selection callback that stores the chosen record in `selection`.
pub(crate) fn recorder(selection: &Selection) -> impl Fn(&Record) + Send + Sync + 'static {
    let selection = Arc::clone(selection);
    move |record| {
        tracing::info!(id = record.id, name = %record.name, "suggestion selected");
        *selection.lock().unwrap_or_else(|e| e.into_inner()) = Some(record.clone());
    }
}

/// Run one search session and print the suggestions (and the selection).
pub(crate) async fn execute(
    client: &SearchClient,
    selection: &Selection,
    args: &SearchArgs,
    out: &mut impl Write,
) -> Result<()> {
    match args.query.as_deref() {
        Some(query) if !query.is_empty() => client.set_query(query).await,
        _ => client.load().await,
    }
    let results = client.snapshot();

    if let Some(index) = args.select {
        let record = results
            .suggestions
            .get(index.wrapping_sub(1))
            .ok_or(Error::SuggestionOutOfRange {
                index,
                count: results.suggestions.len(),
            })?;
        client.select_suggestion(record);
    }
    let selected = selection
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone();

    match args.output {
        OutputFormat::Text => {
            writeln!(out, "{}", format_suggestions(&results))?;
            if let Some(record) = &selected {
                writeln!(out)?;
                writeln!(out, "Selected:")?;
                writeln!(out, "{}", format_suggestion(args.select.unwrap_or(1), record))?;
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "query": results.query,
                "suggestions": results.suggestions,
                "selected": selected,
                "state": client.snapshot(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
