//! Best-effort file parsing.
//!
//! Every file autocil reads besides the target directory itself is optional:
//! a missing file means the feature is absent, and a malformed one logs a
//! warning and is treated the same way. [`try_parse`] is the single place
//! that policy lives.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

/// Text formats autocil reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T, String> {
        match self {
            Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Read and parse `path`, returning `None` if it is missing or malformed.
///
/// A missing file is silent. Read and parse failures emit one warning naming
/// the file.
pub fn try_parse<T: DeserializeOwned>(path: &Path, format: Format) -> Option<T> {
    if !path.is_file() {
        return None;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("could not read {}: {}", path.display(), e);
            return None;
        }
    };

    match format.parse(&contents) {
        Ok(value) => {
            debug!("parsed {}", path.display());
            Some(value)
        }
        Err(e) => {
            warn!("ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let parsed: Option<Named> = try_parse(&dir.path().join("nope.json"), Format::Json);
        assert!(parsed.is_none());
    }

    #[test]
    fn test_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("a.json");
        let yaml = dir.path().join("a.yaml");
        let toml = dir.path().join("a.toml");
        std::fs::write(&json, r#"{"name": "j"}"#).unwrap();
        std::fs::write(&yaml, "name: y\n").unwrap();
        std::fs::write(&toml, "name = \"t\"\n").unwrap();

        assert_eq!(try_parse::<Named>(&json, Format::Json).unwrap().name, "j");
        assert_eq!(try_parse::<Named>(&yaml, Format::Yaml).unwrap().name, "y");
        assert_eq!(try_parse::<Named>(&toml, Format::Toml).unwrap().name, "t");
    }

    #[test]
    fn test_malformed_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(try_parse::<Named>(&path, Format::Json).is_none());
    }

    #[test]
    fn test_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(try_parse::<Named>(dir.path(), Format::Toml).is_none());
    }
}
