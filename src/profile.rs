//! Project introspection.
//!
//! [`profile`] looks at a project directory and records what it finds: the
//! session name, the package manager, the `dev`/`*:watch`/`db:studio` tasks,
//! Docker files and an optional `.autocil.yaml` override. Probes run in a
//! fixed order and never fail; an unreadable file just means the feature is
//! absent.
//!
//! Any parseable `pyproject.toml` marks the project as
//! [`EcosystemKind::DeclarativeBuildFile`], with or without a
//! `[tool.autocil]` table; the table only adds tasks.

use crate::manifest::{OVERRIDE_FILE, OverrideFile, PACKAGE_JSON, PYPROJECT_TOML, PackageJson, PyProject};
use crate::parse::{Format, try_parse};
use std::path::Path;
use tracing::debug;

/// Suffix marking a task that runs continuously.
pub const WATCH_SUFFIX: &str = ":watch";
/// Development server task.
pub const DEV_TASK: &str = "dev";
/// Test runner in watch mode.
pub const TEST_WATCH_TASK: &str = "test:watch";
/// Type checker in watch mode.
pub const TYPES_WATCH_TASK: &str = "types:watch";
/// Database browser task.
pub const DB_STUDIO_TASK: &str = "db:studio";

/// Lockfiles in detection order.
const LOCKFILES: [(&str, PackageManager); 3] = [
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

/// Recognized Docker Compose file names.
pub const COMPOSE_FILES: [&str; 3] = ["docker-compose.yml", "docker-compose.yaml", "compose.yaml"];

/// JavaScript package manager used to run manifest scripts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Shell command that runs `script` with this manager.
    pub fn run(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            PackageManager::Yarn => format!("yarn {}", script),
            PackageManager::Pnpm => format!("pnpm {}", script),
        }
    }
}

/// Which manifest convention supplied task information.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EcosystemKind {
    /// `package.json` scripts.
    GenericManifest,
    /// `pyproject.toml` with a `[tool.autocil.scripts]` table.
    DeclarativeBuildFile,
    #[default]
    None,
}

/// How a task is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A manifest script, run through the package manager.
    Script,
    /// A literal shell command.
    Verbatim(String),
}

/// A named project task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub invocation: Invocation,
}

impl Task {
    /// A `package.json` script.
    pub fn script(name: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            invocation: Invocation::Script,
        }
    }

    /// A task with a literal command line.
    pub fn verbatim(name: impl Into<String>, command: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            invocation: Invocation::Verbatim(command.into()),
        }
    }

    /// The shell command that starts this task.
    pub fn command(&self, pm: PackageManager) -> String {
        match &self.invocation {
            Invocation::Script => pm.run(&self.name),
            Invocation::Verbatim(cmd) => cmd.clone(),
        }
    }

    /// Whether the task name carries the watch suffix.
    pub fn is_watch(&self) -> bool {
        is_watch_name(&self.name)
    }
}

fn is_watch_name(name: &str) -> bool {
    name.ends_with(WATCH_SUFFIX)
}

/// Everything the composer needs to know about a project.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectProfile {
    /// Identifier safe to use as a tmux session name.
    pub session_name: String,
    /// Human-readable name.
    pub display_name: String,
    pub package_manager: PackageManager,
    pub ecosystem: EcosystemKind,
    pub dev_task: Option<Task>,
    /// `*:watch` tasks, manifest first, each source in declaration order.
    pub watch_tasks: Vec<Task>,
    pub db_studio_task: Option<Task>,
    pub docker_compose_present: bool,
    pub dockerfile_present: bool,
    /// Commands from `.autocil.yaml`; when non-empty they replace the task panes.
    pub override_commands: Vec<String>,
}

impl ProjectProfile {
    pub fn dev_task_present(&self) -> bool {
        self.dev_task.is_some()
    }

    pub fn db_studio_task_present(&self) -> bool {
        self.db_studio_task.is_some()
    }

    /// Look up a watch task by exact name.
    pub fn watch_task(&self, name: &str) -> Option<&Task> {
        self.watch_tasks.iter().find(|t| t.name == name)
    }
}

/// Fallback session name when nothing usable is left.
pub const DEFAULT_SESSION_NAME: &str = "session";

/// Make a name usable as a tmux session name.
///
/// `@` and `/` become `-`, as do `.` and `:` which tmux would otherwise
/// rewrite behind our back. Leading `-` are then dropped, so `@scope/name`
/// becomes `scope-name`. Returns `None` when nothing is left.
pub fn sanitize_session_name(name: &str) -> Option<String> {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '@' | '/' | '.' | ':' => '-',
            c => c,
        })
        .collect();
    let trimmed = replaced.trim_start_matches('-');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Profile the project at `dir`.
///
/// `explicit_name`, when given, is used for both names and wins over any
/// manifest name.
pub fn profile(dir: &Path, explicit_name: Option<&str>) -> ProjectProfile {
    let base_name = explicit_name
        .map(str::to_string)
        .or_else(|| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string());

    let mut profile = ProjectProfile {
        session_name: sanitize_session_name(&base_name)
            .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
        display_name: base_name,
        ..ProjectProfile::default()
    };

    probe_package_json(dir, explicit_name.is_some(), &mut profile);
    probe_pyproject(dir, &mut profile);
    profile.package_manager = detect_package_manager(dir);
    profile.docker_compose_present = COMPOSE_FILES.iter().any(|f| dir.join(f).is_file());
    profile.dockerfile_present = dir.join("Dockerfile").is_file();
    profile.override_commands = try_parse::<OverrideFile>(&dir.join(OVERRIDE_FILE), Format::Yaml)
        .map(OverrideFile::into_commands)
        .unwrap_or_default();

    debug!(
        "profiled {}: {:?}, {:?}, {} watch task(s), {} override command(s)",
        dir.display(),
        profile.ecosystem,
        profile.package_manager,
        profile.watch_tasks.len(),
        profile.override_commands.len()
    );

    profile
}

fn probe_package_json(dir: &Path, explicit_name: bool, profile: &mut ProjectProfile) {
    let Some(pkg) = try_parse::<PackageJson>(&dir.join(PACKAGE_JSON), Format::Json) else {
        return;
    };
    profile.ecosystem = EcosystemKind::GenericManifest;

    if !explicit_name {
        if let Some(name) = pkg.name.as_deref().filter(|n| !n.is_empty()) {
            profile.display_name = name.to_string();
            if let Some(session) = sanitize_session_name(name) {
                profile.session_name = session;
            }
        }
    }

    for name in pkg.script_names() {
        add_task(profile, Task::script(name));
    }
}

fn probe_pyproject(dir: &Path, profile: &mut ProjectProfile) {
    let Some(py) = try_parse::<PyProject>(&dir.join(PYPROJECT_TOML), Format::Toml) else {
        return;
    };
    profile.ecosystem = EcosystemKind::DeclarativeBuildFile;

    for (name, command) in py.scripts() {
        add_task(profile, Task::verbatim(name, command));
    }
}

/// Sort a task into the profile. The first source to declare `dev` or
/// `db:studio` keeps it.
fn add_task(profile: &mut ProjectProfile, task: Task) {
    match task.name.as_str() {
        DEV_TASK => {
            profile.dev_task.get_or_insert(task);
        }
        DB_STUDIO_TASK => {
            profile.db_studio_task.get_or_insert(task);
        }
        _ if task.is_watch() => profile.watch_tasks.push(task),
        _ => {}
    }
}

fn detect_package_manager(dir: &Path) -> PackageManager {
    LOCKFILES
        .iter()
        .find(|(file, _)| dir.join(file).is_file())
        .map(|(_, pm)| *pm)
        .unwrap_or_default()
}
