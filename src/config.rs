//! User configuration for autocil.
//!
//! The config file is optional and has a single recognized key:
//!
//! ```toml
//! # ~/.config/autocil/config.toml
//! root = "~/src"
//! ```
//!
//! `root` is where bare target names (`autocil myapp`) and their layout
//! files (`<root>/myapp.yaml`) are looked up. It defaults to `~/code`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory under `$HOME` used when no `root` is configured.
pub const DEFAULT_ROOT: &str = "code";

/// Raw contents of the config file.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    /// Root directory for bare target names. A leading `~` expands to home.
    #[serde(default)]
    pub root: Option<String>,
}

/// Resolved configuration, loaded once and passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Absolute root directory for bare target names.
    pub root: PathBuf,
}

impl Config {
    /// Resolve a parsed (or absent) config file against the home directory.
    pub fn from_file(file: Option<ConfigFile>, home: &Path) -> Self {
        let root = file
            .and_then(|f| f.root)
            .map(|r| expand_home(&r, home))
            .unwrap_or_else(|| home.join(DEFAULT_ROOT));
        Config { root }
    }
}

/// Expand a leading `~` or `~/` to `home`. Other paths are returned as-is.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        let config = Config::from_file(None, Path::new("/home/me"));
        assert_eq!(config.root, PathBuf::from("/home/me/code"));
    }

    #[test]
    fn test_missing_key_uses_default() {
        let config = Config::from_file(Some(ConfigFile::default()), Path::new("/home/me"));
        assert_eq!(config.root, PathBuf::from("/home/me/code"));
    }

    #[test]
    fn test_root_with_tilde() {
        let file: ConfigFile = toml::from_str("root = \"~/src\"").unwrap();
        let config = Config::from_file(Some(file), Path::new("/home/me"));
        assert_eq!(config.root, PathBuf::from("/home/me/src"));
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/me");
        assert_eq!(expand_home("~", home), PathBuf::from("/home/me"));
        assert_eq!(expand_home("/opt/src", home), PathBuf::from("/opt/src"));
        assert_eq!(expand_home("~other/x", home), PathBuf::from("~other/x"));
    }
}
