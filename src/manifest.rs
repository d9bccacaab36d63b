//! On-disk project files read by the profiler.
//!
//! ```json
//! // package.json
//! { "name": "@acme/web", "scripts": { "dev": "vite", "test:watch": "vitest" } }
//! ```
//!
//! ```toml
//! # pyproject.toml
//! [tool.autocil.scripts]
//! dev = "uvicorn app:app --reload"
//! "test:watch" = "ptw"
//! ```
//!
//! ```yaml
//! # .autocil.yaml
//! commands:
//!   - cargo watch -x check
//!   - cargo run
//! ```

use serde::Deserialize;

/// Node-style manifest file name.
pub const PACKAGE_JSON: &str = "package.json";
/// Python build configuration file name.
pub const PYPROJECT_TOML: &str = "pyproject.toml";
/// Project-local override file name.
pub const OVERRIDE_FILE: &str = ".autocil.yaml";

/// The subset of `package.json` autocil cares about.
///
/// `scripts` keeps declaration order (`serde_json` is built with
/// `preserve_order`).
#[derive(Debug, Deserialize, Default)]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scripts: serde_json::Map<String, serde_json::Value>,
}

impl PackageJson {
    /// Script names in declaration order.
    pub fn script_names(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }
}

/// The subset of `pyproject.toml` autocil cares about.
#[derive(Debug, Deserialize, Default)]
pub struct PyProject {
    #[serde(default)]
    pub tool: PyProjectTools,
}

/// The `[tool]` table.
#[derive(Debug, Deserialize, Default)]
pub struct PyProjectTools {
    #[serde(default)]
    pub autocil: Option<ToolTable>,
}

/// The `[tool.autocil]` table.
#[derive(Debug, Deserialize, Default)]
pub struct ToolTable {
    #[serde(default)]
    pub scripts: toml::Table,
}

impl PyProject {
    /// `(name, command)` pairs from `[tool.autocil.scripts]` in file order.
    ///
    /// Entries whose value is not a string are skipped.
    pub fn scripts(&self) -> Vec<(&str, &str)> {
        self.tool
            .autocil
            .as_ref()
            .map(|t| {
                t.scripts
                    .iter()
                    .filter_map(|(name, value)| value.as_str().map(|cmd| (name.as_str(), cmd)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `.autocil.yaml`: either a bare list or a mapping with `commands`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OverrideFile {
    /// `- cmd1` / `- cmd2`
    List(Vec<String>),
    /// `commands: [cmd1, cmd2]`
    Table { commands: Vec<String> },
}

impl OverrideFile {
    /// The command lines in file order.
    pub fn into_commands(self) -> Vec<String> {
        match self {
            OverrideFile::List(v) => v,
            OverrideFile::Table { commands } => commands,
        }
    }
}
