// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, lowest first: built-in defaults, the config file, then
//! `SCREENSTATE_*` environment variables.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SCREENSTATE";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Postings catalog to use instead of the bundled one
    pub catalog: Option<PathBuf>,
    /// Colour terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            catalog: None,
            color: true,
        }
    }
}

/// Default config file location, e.g. `~/.config/screenstate/config.toml`
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "screenstate")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location) plus the
/// environment. A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default("log_level", defaults.log_level)?
        .set_default("color", defaults.color)?;

    if let Some(file) = path.map(Path::to_path_buf).or_else(default_path) {
        tracing::debug!("Reading config from {}", file.display());
        builder = builder.add_source(config::File::from(file.as_path()).required(false));
    }

    let config = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()?;

    Ok(config)
}
