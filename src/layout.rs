//! tmuxp layout documents.
//!
//! A [`LayoutDocument`] serializes to the YAML that `tmuxp load` expects:
//!
//! ```yaml
//! session_name: my-app
//! windows:
//! - window_name: dev
//!   start_directory: /home/me/code/my-app
//!   layout: main-vertical
//!   panes:
//!   - shell_command:
//!     - vim .
//!   - shell_command:
//!     - sleep 1 && ls -la
//!     focus: true
//! ```

use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

/// A whole tmuxp session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDocument {
    #[serde(rename = "session_name")]
    pub name: String,
    pub windows: Vec<Window>,
}

/// One tmux window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    #[serde(rename = "window_name")]
    pub name: String,
    /// Absolute working directory for every pane.
    #[serde(rename = "start_directory")]
    pub root: PathBuf,
    pub layout: WindowLayout,
    pub panes: Vec<Pane>,
}

/// tmux's built-in window layouts used by autocil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowLayout {
    /// One large pane on the left, the rest stacked on the right.
    MainVertical,
    /// Side-by-side panes.
    EvenHorizontal,
}

/// One tmux pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pane {
    #[serde(rename = "shell_command")]
    pub commands: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub focus: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Pane {
    /// An unfocused pane running a single command.
    pub fn new(command: impl Into<String>) -> Self {
        Pane {
            commands: vec![command.into()],
            focus: false,
        }
    }

    /// A focused pane running a single command.
    pub fn focused(command: impl Into<String>) -> Self {
        Pane {
            focus: true,
            ..Pane::new(command)
        }
    }
}

impl LayoutDocument {
    /// Render as tmuxp YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up a window by name.
    pub fn window(&self, name: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.name == name)
    }
}

impl Window {
    /// The first command of every pane, in order.
    pub fn pane_commands(&self) -> Vec<&str> {
        self.panes
            .iter()
            .filter_map(|p| p.commands.first().map(String::as_str))
            .collect()
    }
}
