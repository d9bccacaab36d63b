//! Config file discovery and loading.
//!
//! The search order is:
//!
//! 1. `$XDG_CONFIG_HOME/autocil/config.toml`
//! 2. `~/.config/autocil/config.toml`
//!
//! A missing or malformed file is not an error; defaults are used instead.

use crate::config::{Config, ConfigFile};
use crate::parse::{Format, try_parse};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Determine the config file path.
///
/// `$XDG_CONFIG_HOME/autocil/config.toml` is used when it exists, otherwise
/// `~/.config/autocil/config.toml` (which may not exist either).
pub fn default_config_path(home: &Path) -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("autocil").join("config.toml");
        if path.exists() {
            return path;
        }
    }

    home.join(".config").join("autocil").join("config.toml")
}

/// Load config from `path`, falling back to defaults.
pub fn load_config(path: &Path, home: &Path) -> Config {
    let file: Option<ConfigFile> = try_parse(path, Format::Toml);
    let config = Config::from_file(file, home);
    debug!("project root: {}", config.root.display());
    config
}
