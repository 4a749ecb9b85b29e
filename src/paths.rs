//! Centralized path definitions for gossup
//!
//! This module provides a single source of truth for all filesystem paths
//! used by gossup.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.gossup/                    # or $GOSSUP_HOME
//! ├── config.toml               # User preferences (storage, feed)
//! └── store.json                # Key-value store (profile, reactions, posts)
//! ```

use std::path::PathBuf;

/// Environment variable overriding the gossup home directory
pub const HOME_ENV: &str = "GOSSUP_HOME";

/// Home directory name under the user's home
const HOME_DIR: &str = ".gossup";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Store filename
const STORE_FILE: &str = "store.json";

/// Get the gossup home directory.
///
/// Returns `$GOSSUP_HOME` when set, otherwise `~/.gossup/`.
#[must_use]
pub fn home() -> PathBuf {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(
            || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR),
            PathBuf::from,
        )
}

/// Get the config file path.
///
/// Returns `<home>/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    home().join(CONFIG_FILE)
}

/// Get the default store file path.
///
/// Returns `<home>/store.json`. Overridable with `storage.file` in the config.
#[must_use]
pub fn store_file() -> PathBuf {
    home().join(STORE_FILE)
}
