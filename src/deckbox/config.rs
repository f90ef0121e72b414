//! # Configuration
//!
//! User settings live in `<data dir>/config.json`. Every field has a serde
//! default, so a partial file or no file at all still yields a usable config.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog_path` | `<data dir>/cards.json` | Card dataset to load |
//! | `search_default_limit` | `20` | Results for a blank deck-builder search |
//! | `search_max_limit` | `50` | Cap on deck-builder search results |
//!
//! `--catalog` and `DECKBOX_CATALOG` override `catalog_path` for one run.

use crate::error::{DeckboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CATALOG_FILENAME: &str = "cards.json";
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const DEFAULT_SEARCH_MAX: usize = 50;

pub const CONFIG_KEYS: &[&str] = &["catalog_path", "search_default_limit", "search_max_limit"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckboxConfig {
    /// Relative paths resolve against the data dir. `None` means `cards.json`.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default = "default_search_limit")]
    pub search_default_limit: usize,

    #[serde(default = "default_search_max")]
    pub search_max_limit: usize,
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_search_max() -> usize {
    DEFAULT_SEARCH_MAX
}

impl Default for DeckboxConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            search_default_limit: DEFAULT_SEARCH_LIMIT,
            search_max_limit: DEFAULT_SEARCH_MAX,
        }
    }
}

impl DeckboxConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| DeckboxError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        log::debug!("Saved config to {}", config_dir.display());
        Ok(())
    }

    pub fn resolved_catalog_path(&self, data_dir: &Path) -> PathBuf {
        match &self.catalog_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_CATALOG_FILENAME),
        }
    }

    /// The search cap never drops below the blank-search default.
    pub fn search_limits(&self) -> (usize, usize) {
        let default = self.search_default_limit;
        (default, self.search_max_limit.max(default))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog_path" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_CATALOG_FILENAME.to_string()),
            ),
            "search_default_limit" => Some(self.search_default_limit.to_string()),
            "search_max_limit" => Some(self.search_max_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog_path" => {
                let value = value.trim();
                self.catalog_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "search_default_limit" => self.search_default_limit = parse_limit(key, value)?,
            "search_max_limit" => self.search_max_limit = parse_limit(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_limit(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive number, got '{}'", key, value)),
    }
}
