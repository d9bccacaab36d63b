//! Target resolution.
//!
//! A target is either a path (`.`, `../api`, `~/src/web`, `/abs/dir`) or a
//! bare name. Paths resolve against the working directory. Bare names
//! resolve under the configured root, where a `<name>.yaml` layout file takes
//! precedence over the `<name>` directory.

use crate::config::{Config, expand_home};
use crate::error::{AutocilError, Result};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// One resolved command-line target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSpec {
    /// The argument as given.
    pub requested: String,
    /// Absolute project directory. May not exist when `layout_file` is set.
    pub path: PathBuf,
    /// A ready-made tmuxp layout to load instead of profiling `path`.
    pub layout_file: Option<PathBuf>,
}

/// Whether `requested` names a path rather than a project under the root.
pub fn is_bare_name(requested: &str) -> bool {
    !(requested.starts_with('.')
        || requested.starts_with('~')
        || requested.contains('/')
        || requested.contains(MAIN_SEPARATOR)
        || Path::new(requested).is_absolute())
}

/// Resolve one target.
///
/// # Errors
///
/// [`AutocilError::TargetNotFound`] if neither a directory (or file) nor a
/// layout file exists for it.
pub fn resolve(requested: &str, cwd: &Path, home: &Path, config: &Config) -> Result<TargetSpec> {
    if is_bare_name(requested) {
        let root = cwd.join(&config.root);
        let path = root.join(requested);
        let layout = root.join(format!("{}.yaml", requested));
        let layout_file = layout.is_file().then_some(layout);

        if layout_file.is_none() && !path.exists() {
            return Err(AutocilError::TargetNotFound(requested.to_string()));
        }
        return Ok(TargetSpec {
            requested: requested.to_string(),
            path,
            layout_file,
        });
    }

    let joined = cwd.join(expand_home(requested, home));
    if !joined.exists() {
        return Err(AutocilError::TargetNotFound(requested.to_string()));
    }
    let path = joined.canonicalize()?;

    Ok(TargetSpec {
        requested: requested.to_string(),
        path,
        layout_file: None,
    })
}

/// Resolve every target before any work starts.
pub fn resolve_all(
    requested: &[String],
    cwd: &Path,
    home: &Path,
    config: &Config,
) -> Result<Vec<TargetSpec>> {
    requested
        .iter()
        .map(|r| resolve(r, cwd, home, config))
        .collect()
}
