//! Command-line interface for autocil.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use clap::Parser;

/// Command-line arguments for autocil.
///
/// # Examples
///
/// ```bash
/// # Launch and attach to the project in the current directory
/// autocil
///
/// # Launch ~/code/api and ~/code/web, attach to web
/// autocil api web
///
/// # Print the generated layout without starting anything
/// autocil --dry-run ./web
/// ```
#[derive(Parser, Debug)]
#[command(name = "autocil")]
#[command(version)]
#[command(about = "Open a tmux dev session tailored to a project")]
#[command(long_about = "autocil inspects a project (package.json, pyproject.toml, lockfiles,\n\
    Docker Compose, .autocil.yaml), generates a tmuxp layout for it and loads it\n\
    into a fresh tmux session.")]
pub struct Cli {
    /// Project directories or names under the configured root.
    #[arg(value_name = "TARGET", default_value = ".")]
    pub targets: Vec<String>,

    /// Session name to use instead of the detected one (single target only).
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Create the session(s) without attaching.
    #[arg(short, long)]
    pub detach: bool,

    /// Print the layout(s) instead of launching.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the last session should be attached.
    pub fn attach(&self) -> bool {
        !self.detach && !self.dry_run
    }
}
