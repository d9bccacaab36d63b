//! Per-target launch planning and execution.
//!
//! Targets are profiled and composed up front by [`plan`], then launched one
//! after another by [`launch`]. Only the last launch may attach, since
//! attaching blocks until the user detaches.

use crate::compose::compose;
use crate::error::{AutocilError, Result};
use crate::layout::LayoutDocument;
use crate::profile::{DEFAULT_SESSION_NAME, profile, sanitize_session_name};
use crate::target::TargetSpec;
use crate::{runner, tmux};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Pause between creating a session and attaching to it.
pub const ATTACH_DELAY: Duration = Duration::from_millis(500);

/// Where a session's layout comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSource {
    /// Composed from a project profile.
    Generated(LayoutDocument),
    /// A layout file found under the root, loaded as-is.
    Existing(PathBuf),
}

/// One session to create.
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub session_name: String,
    pub source: LayoutSource,
    pub attach: bool,
}

/// Build a [`Launch`] for a single target.
///
/// # Errors
///
/// [`AutocilError::NotADirectory`] if the target path is a file, and
/// [`AutocilError::TargetNotFound`] if it has vanished since resolution.
pub fn prepare(target: &TargetSpec, explicit_name: Option<&str>, attach: bool) -> Result<Launch> {
    if let Some(file) = &target.layout_file {
        debug!("using layout file {}", file.display());
        return Ok(Launch {
            session_name: sanitize_session_name(explicit_name.unwrap_or(&target.requested))
                .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
            source: LayoutSource::Existing(file.clone()),
            attach,
        });
    }

    if !target.path.exists() {
        return Err(AutocilError::TargetNotFound(target.requested.clone()));
    }
    if !target.path.is_dir() {
        return Err(AutocilError::NotADirectory(target.path.clone()));
    }

    let profile = profile(&target.path, explicit_name);
    info!("{} -> session {}", profile.display_name, profile.session_name);
    let doc = compose(&profile, &target.path);

    Ok(Launch {
        session_name: profile.session_name,
        source: LayoutSource::Generated(doc),
        attach,
    })
}

/// Plan every target in order. Only the last one attaches, and only when
/// `attach` is set.
pub fn plan(targets: &[TargetSpec], explicit_name: Option<&str>, attach: bool) -> Result<Vec<Launch>> {
    if explicit_name.is_some() && targets.len() > 1 {
        return Err(AutocilError::NameWithMultipleTargets(targets.len()));
    }

    let last = targets.len().saturating_sub(1);
    targets
        .iter()
        .enumerate()
        .map(|(i, target)| prepare(target, explicit_name, attach && i == last))
        .collect()
}

/// Create the session for `launch`, replacing any session with the same name.
pub fn launch(launch: &Launch) -> Result<()> {
    let path = match &launch.source {
        LayoutSource::Generated(doc) => runner::persist(doc)?,
        LayoutSource::Existing(path) => path.clone(),
    };

    tmux::kill_session(&launch.session_name);
    runner::load(&path, &launch.session_name)?;

    if launch.attach {
        std::thread::sleep(ATTACH_DELAY);
        tmux::attach_session(&launch.session_name)?;
    }

    Ok(())
}

/// Text printed for `--dry-run`.
pub fn preview(launch: &Launch) -> Result<String> {
    match &launch.source {
        LayoutSource::Generated(doc) => doc.to_yaml(),
        LayoutSource::Existing(path) => Ok(std::fs::read_to_string(path)?),
    }
}
