//! Service endpoints and panel defaults.
//!
//! Read from `config.toml` in the platform config directory, then overridden
//! by `DESIGN_SYNC_*` environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::DEFAULT_PROMPT;
use crate::{Error, Result};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Runtime configuration shared by the desktop app and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the synced projects backend
    pub sync_url: String,
    /// Base URL of the document generation service
    pub generation_url: String,
    /// Prompt pre-filled in the AI dialog
    pub default_prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_url: DEFAULT_SERVICE_URL.to_string(),
            generation_url: DEFAULT_SERVICE_URL.to_string(),
            default_prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Load from the default path and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Platform config file, e.g. `~/.config/design-sync/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "design-sync")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parse a config file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `DESIGN_SYNC_*` overrides. Blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_blank("DESIGN_SYNC_URL") {
            self.sync_url = url;
        }
        if let Some(url) = non_blank("DESIGN_SYNC_GENERATION_URL") {
            self.generation_url = url;
        }
        if let Some(prompt) = non_blank("DESIGN_SYNC_PROMPT") {
            self.default_prompt = prompt;
        }
    }
}
