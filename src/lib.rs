//! # autocil
//!
//! Open a tmux development session tailored to a project.
//!
//! autocil looks at a project directory, works out how it is developed, and
//! hands a generated [tmuxp](https://github.com/tmux-python/tmuxp) layout to
//! `tmuxp load`.
//!
//! ## What gets detected
//!
//! - **package.json**: `dev`, every `*:watch` script and `db:studio`
//! - **pyproject.toml**: the same task names under `[tool.autocil.scripts]`
//! - **Lockfiles**: pnpm, yarn or npm (the default)
//! - **Docker**: a compose file adds a `services` window
//! - **.autocil.yaml**: a list of commands that replaces the generated panes
//!
//! ## Quick Example
//!
//! ```
//! use autocil::compose::compose;
//! use autocil::profile::{ProjectProfile, Task};
//! use std::path::Path;
//!
//! let profile = ProjectProfile {
//!     session_name: "web".into(),
//!     dev_task: Some(Task::script("dev")),
//!     ..ProjectProfile::default()
//! };
//! let doc = compose(&profile, Path::new("/home/me/code/web"));
//! assert_eq!(
//!     doc.windows[0].pane_commands(),
//!     vec!["vim .", "npm run dev", "sleep 1 && ls -la"]
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line argument parsing with clap
//! - [`config`] / [`loader`]: User config and its discovery
//! - [`parse`]: Best-effort JSON/YAML/TOML parsing
//! - [`target`]: Path and bare-name resolution
//! - [`manifest`]: `package.json`, `pyproject.toml` and `.autocil.yaml` shapes
//! - [`profile`]: Project introspection
//! - [`compose`]: Profile to layout rendering
//! - [`layout`]: tmuxp document types
//! - [`session`]: Launch planning and execution
//! - [`runner`] / [`tmux`]: External process glue
//! - [`error`]: Error types and exit codes

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod manifest;
pub mod parse;
pub mod profile;
pub mod runner;
pub mod session;
pub mod target;
pub mod tmux;

pub use config::Config;
pub use error::{AutocilError, Result};
pub use layout::{LayoutDocument, Pane, Window, WindowLayout};
pub use profile::ProjectProfile;
