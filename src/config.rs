//! Configuration management
//!
//! Settings are stored at `<home>/config.toml` (see [`crate::paths`]).
//! A missing or unreadable file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::models::FeedMode;
use crate::core::ports::Keyspace;
use crate::core::services::{FeedRanker, SWAP_PROBABILITY};
use crate::paths;

/// gossup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where state is kept
    #[serde(default)]
    pub storage: StorageConfig,
    /// Feed preferences
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix for the profile and post keys
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Store file; `<home>/store.json` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Simulated round-trip delay per store call, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_namespace() -> String {
    Keyspace::DEFAULT_NAMESPACE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            file: None,
            latency_ms: 0,
        }
    }
}

impl StorageConfig {
    /// Key names for the configured namespace
    #[must_use]
    pub fn keyspace(&self) -> Keyspace {
        Keyspace::new(&self.namespace)
    }

    /// Store file in effect
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(paths::store_file)
    }

    /// Per-call delay in effect
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Feed settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Mode used when `feed` is run without `--mode`
    #[serde(default)]
    pub default_mode: FeedMode,
    /// Chance of the trending swap
    #[serde(default = "default_swap_probability")]
    pub swap_probability: f64,
}

const fn default_swap_probability() -> f64 {
    SWAP_PROBABILITY
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_mode: FeedMode::default(),
            swap_probability: SWAP_PROBABILITY,
        }
    }
}

impl FeedConfig {
    /// Ranker for these settings
    #[must_use]
    pub const fn ranker(&self) -> FeedRanker {
        FeedRanker::new(self.swap_probability)
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from the default location, or defaults if absent
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if absent or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
