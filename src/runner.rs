//! tmuxp invocation and layout persistence.

use crate::error::{AutocilError, Result};
use crate::layout::LayoutDocument;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// The layout runner binary.
pub const RUNNER: &str = "tmuxp";

/// Fail early if tmuxp is not installed.
pub fn ensure_available() -> Result<()> {
    let path = which::which(RUNNER).map_err(|_| AutocilError::RunnerNotFound(RUNNER.to_string()))?;
    debug!("using {}", path.display());
    Ok(())
}

/// File name for a persisted layout: session, timestamp and a random suffix.
pub fn document_file_name(session: &str, now: DateTime<Local>, suffix: u32) -> String {
    format!(
        "autocil-{}-{}-{:08x}.yaml",
        session,
        now.format("%Y%m%d%H%M%S"),
        suffix
    )
}

/// Write `doc` to a fresh file in `dir` and return its path.
pub fn persist_in(dir: &Path, doc: &LayoutDocument) -> Result<PathBuf> {
    let path = dir.join(document_file_name(&doc.name, Local::now(), rand::random()));
    std::fs::write(&path, doc.to_yaml()?)?;
    debug!("wrote layout to {}", path.display());
    Ok(path)
}

/// Write `doc` to the system temp directory.
pub fn persist(doc: &LayoutDocument) -> Result<PathBuf> {
    persist_in(&std::env::temp_dir(), doc)
}

/// Create detached session `session` from the layout at `path`.
pub fn load(path: &Path, session: &str) -> Result<()> {
    info!("loading {} as session {}", path.display(), session);
    let status = Command::new(RUNNER)
        .arg("load")
        .args(["-d", "-y", "-s", session])
        .arg(path)
        .status()
        .map_err(|e| AutocilError::RunnerError(e.to_string()))?;

    if !status.success() {
        return Err(AutocilError::RunnerError(format!(
            "load {} failed",
            path.display()
        )));
    }

    Ok(())
}
