//! Error types for autocil.
//!
//! All fatal errors are represented by [`AutocilError`]. Each variant belongs
//! to one exit-status class (see [`exit_codes`]); recoverable problems such as
//! a malformed manifest never reach this type, they are logged and skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit statuses, one per error class.
pub mod exit_codes {
    /// Every target launched.
    pub const SUCCESS: i32 = 0;
    /// I/O, serialization or subprocess failure.
    pub const FAILURE: i32 = 1;
    /// Bad arguments or targets.
    pub const VALIDATION: i32 = 2;
    /// The environment does not allow the run (tmux, tmuxp, home dir).
    pub const ENVIRONMENT: i32 = 3;
}

/// All fatal errors that can occur in autocil.
#[derive(Error, Debug)]
pub enum AutocilError {
    /// Could not determine the user's home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// `--name` was combined with more than one target.
    #[error("--name can only be used with a single target (got {0})")]
    NameWithMultipleTargets(usize),

    /// A target is neither a directory nor a known layout file.
    #[error("No project directory or layout file found for '{0}'")]
    TargetNotFound(String),

    /// A target path exists but is a file.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Attach was requested from inside tmux.
    #[error("Already inside a tmux session; use --detach to launch without attaching")]
    InsideTmux,

    /// The layout runner is not installed.
    #[error("'{0}' not found on PATH")]
    RunnerNotFound(String),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Layout document serialization failed.
    #[error("Failed to serialize layout: {0}")]
    SerializeError(#[from] serde_yaml::Error),

    /// A tmux command failed to execute.
    #[error("Tmux error: {0}")]
    TmuxError(String),

    /// The layout runner failed.
    #[error("tmuxp error: {0}")]
    RunnerError(String),
}

impl AutocilError {
    /// Exit status for this error's class.
    pub fn exit_code(&self) -> i32 {
        match self {
            AutocilError::NameWithMultipleTargets(_)
            | AutocilError::TargetNotFound(_)
            | AutocilError::NotADirectory(_) => exit_codes::VALIDATION,
            AutocilError::NoHomeDir
            | AutocilError::InsideTmux
            | AutocilError::RunnerNotFound(_) => exit_codes::ENVIRONMENT,
            AutocilError::IoError(_)
            | AutocilError::SerializeError(_)
            | AutocilError::TmuxError(_)
            | AutocilError::RunnerError(_) => exit_codes::FAILURE,
        }
    }
}

/// Convenient Result type alias for autocil operations.
pub type Result<T> = std::result::Result<T, AutocilError>;
