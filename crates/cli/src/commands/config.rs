// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::{
    init_config, load_config, locate_config, user_config_path, Config, CONFIG_FILE_NAME,
};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(config_path: Option<&Path>, cmd: ConfigCommand) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match cmd {
        ConfigCommand::Init { user } => {
            let path = init_target(config_path, user)?;
            init_config(&path)?;
            writeln!(stdout, "Created {}", path.display())?;
            Ok(())
        }
        ConfigCommand::Show { output } => {
            let config = load_config(config_path)?;
            show(&config, output.output, &mut stdout)
        }
        ConfigCommand::Path => {
            let path = locate_config(config_path)?.ok_or(Error::ConfigNotFound)?;
            writeln!(stdout, "{}", path.display())?;
            Ok(())
        }
    }
}

/// Where `config init` writes: the explicit path, the user config file,
/// or `larksync.toml` in the current directory.
pub(crate) fn init_target(explicit: Option<&Path>, user: bool) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if user {
        return user_config_path().ok_or_else(|| {
            Error::Config("could not determine the user config directory".to_string())
        });
    }
    Ok(PathBuf::from(CONFIG_FILE_NAME))
}

/// Print the effective configuration as TOML or JSON.
pub(crate) fn show(config: &Config, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    match output {
        OutputFormat::Text => {
            let text = toml::to_string_pretty(config)
                .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
            write!(out, "{}", text)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
