// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Configuration is stored in a `larksync.toml` file and includes:
//! - `[remote]`: server URL, synchronization endpoint, request timeout
//! - `[search]`: record model, result limit, extra filter domain, and the
//!   (translatable) error text shown when a search fails
//!
//! The file is located by, in order: an explicit `--config` path,
//! `LARKSYNC_CONFIG`, a `larksync.toml` in the current directory or any
//! parent, and finally `larksync/config.toml` in the user config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lks_core::Domain;

use crate::env;
use crate::error::{Error, Result};

/// File name searched for in the current directory and its parents.
pub const CONFIG_FILE_NAME: &str = "larksync.toml";
const USER_CONFIG_DIR: &str = "larksync";
const USER_CONFIG_FILE: &str = "config.toml";

/// Client configuration stored in `larksync.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the server (e.g., `https://odoo.example.com`).
    #[serde(default = "default_url")]
    pub url: String,
    /// Path of the synchronization endpoint (default: `/lark_project_sync/sync`).
    #[serde(default = "default_sync_path")]
    pub sync_path: String,
    /// Request timeout in seconds (default: 120).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            url: default_url(),
            sync_path: default_sync_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Search client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Record collection to search (default: `lark.tasklist`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum number of suggestions (default: 10).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Extra predicates ANDed after the name filter.
    #[serde(default, skip_serializing_if = "Domain::is_empty")]
    pub domain: Domain,
    /// Notification text when a search fails.
    #[serde(default = "default_error_message")]
    pub error_message: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            model: default_model(),
            limit: default_limit(),
            domain: Domain::new(),
            error_message: default_error_message(),
        }
    }
}

fn default_url() -> String {
    "http://localhost:8069".to_string()
}

fn default_sync_path() -> String {
    "/lark_project_sync/sync".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_model() -> String {
    "lark.tasklist".to_string()
}

fn default_limit() -> usize {
    10
}

fn default_error_message() -> String {
    "Error loading suggestions".to_string()
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Saves configuration to the given file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Replaces the remote URL when an override is given.
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.remote.url = url;
        }
        self
    }

    /// Checks values that the deserializer accepts but the client cannot use.
    pub fn validate(&self) -> Result<()> {
        let url = &self.remote.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidUrl(url.clone()));
        }
        if self.remote.timeout_secs == 0 {
            return Err(Error::Config(
                "remote.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.search.limit == 0 {
            return Err(Error::Config("search.limit must be at least 1".to_string()));
        }
        if self.search.model.trim().is_empty() {
            return Err(Error::Config("search.model cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Find `larksync.toml` by walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Location of the per-user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    env::xdg_config_home()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
}

/// Resolve which configuration file to use, if any exists.
pub fn locate_config(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }
    if let Some(path) = env::config_path() {
        return Ok(Some(path));
    }
    let cwd = std::env::current_dir()?;
    if let Some(path) = find_config_file(&cwd) {
        return Ok(Some(path));
    }
    Ok(user_config_path().filter(|p| p.is_file()))
}

/// Load the effective configuration.
///
/// Without a config file, `LARKSYNC_URL` alone is enough to run against
/// the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let url_override = env::remote_url();
    let config = match locate_config(explicit)? {
        Some(path) => Config::load(&path)?,
        None if url_override.is_some() => Config::default(),
        None => return Err(Error::ConfigNotFound),
    };
    let config = config.with_url_override(url_override);
    config.validate()?;
    Ok(config)
}

/// Write a default configuration file, refusing to overwrite one.
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::ConfigExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Config::default().save(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
