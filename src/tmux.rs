//! Tmux session management.
//!
//! autocil never builds panes itself; tmuxp does that from the layout
//! document. This module only handles the session around it: clearing out an
//! old session with the same name and attaching to the new one.

use crate::error::{AutocilError, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Check if we're running inside a tmux session.
///
/// Checks for the `TMUX` environment variable, which tmux sets when active.
pub fn in_tmux() -> bool {
    std::env::var("TMUX").is_ok()
}

/// Kill the session named `name`, if there is one.
///
/// A missing session (or a missing tmux server) is not an error.
pub fn kill_session(name: &str) {
    let target = session_target(name);
    let killed = Command::new("tmux")
        .args(["kill-session", "-t", &target])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false);

    debug!("kill-session {}: {}", name, if killed { "killed" } else { "none" });
}

/// Attach the terminal to session `name`. Blocks until the user detaches.
pub fn attach_session(name: &str) -> Result<()> {
    let target = session_target(name);
    let status = Command::new("tmux")
        .args(["attach-session", "-t", &target])
        .status()
        .map_err(|e| AutocilError::TmuxError(e.to_string()))?;

    if !status.success() {
        return Err(AutocilError::TmuxError(format!(
            "attach-session {} failed",
            name
        )));
    }

    Ok(())
}

/// Exact-match target so `web` never matches `web-admin`.
fn session_target(name: &str) -> String {
    format!("={}", name)
}
