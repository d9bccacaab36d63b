//! Layout composition.
//!
//! [`compose`] turns a [`ProjectProfile`] into a [`LayoutDocument`]. The
//! pane order is fixed:
//!
//! 1. editor
//! 2. either the `.autocil.yaml` commands, or `test:watch`, `types:watch`,
//!    the other `*:watch` tasks and finally `dev`
//! 3. a focused directory listing
//!
//! A `services` window running Docker Compose follows when the project has
//! a compose file.

use crate::layout::{LayoutDocument, Pane, Window, WindowLayout};
use crate::profile::{DEV_TASK, ProjectProfile, TEST_WATCH_TASK, TYPES_WATCH_TASK};
use std::path::Path;

/// Editor pane command.
pub const EDITOR_COMMAND: &str = "vim .";
/// Listing pane command; the delay lets the other panes draw first.
pub const LISTING_COMMAND: &str = "sleep 1 && ls -la";
/// Prefix for the test watcher so it starts after the rest of the window.
pub const TEST_WATCH_DELAY: &str = "sleep 2 && ";
/// Stop any previous stack before starting a new one.
pub const COMPOSE_DOWN_UP: &str = "docker compose down && docker compose up";

/// Render the layout for `profile`, rooted at `root`.
pub fn compose(profile: &ProjectProfile, root: &Path) -> LayoutDocument {
    let mut windows = vec![dev_window(profile, root)];
    if profile.docker_compose_present {
        windows.push(services_window(profile, root));
    }

    LayoutDocument {
        name: profile.session_name.clone(),
        windows,
    }
}

fn dev_window(profile: &ProjectProfile, root: &Path) -> Window {
    let mut panes = vec![Pane::new(EDITOR_COMMAND)];

    if profile.override_commands.is_empty() {
        panes.extend(task_panes(profile));
    } else {
        panes.extend(profile.override_commands.iter().map(Pane::new));
    }

    panes.push(Pane::focused(LISTING_COMMAND));

    Window {
        name: "dev".into(),
        root: root.to_path_buf(),
        layout: WindowLayout::MainVertical,
        panes,
    }
}

/// Watch and dev panes. `dev` is always last so its output starts after the
/// watchers are up.
fn task_panes(profile: &ProjectProfile) -> Vec<Pane> {
    let pm = profile.package_manager;
    let mut panes = Vec::new();

    if let Some(task) = profile.watch_task(TEST_WATCH_TASK) {
        panes.push(Pane::new(format!("{}{}", TEST_WATCH_DELAY, task.command(pm))));
    }
    if let Some(task) = profile.watch_task(TYPES_WATCH_TASK) {
        panes.push(Pane::new(task.command(pm)));
    }

    let mut emitted = vec![TEST_WATCH_TASK, TYPES_WATCH_TASK, DEV_TASK];
    for task in &profile.watch_tasks {
        if emitted.contains(&task.name.as_str()) {
            continue;
        }
        emitted.push(task.name.as_str());
        panes.push(Pane::new(task.command(pm)));
    }

    if let Some(dev) = &profile.dev_task {
        panes.push(Pane::new(dev.command(pm)));
    }

    panes
}

fn services_window(profile: &ProjectProfile, root: &Path) -> Window {
    let up = if profile.dockerfile_present {
        format!("{} --build", COMPOSE_DOWN_UP)
    } else {
        COMPOSE_DOWN_UP.to_string()
    };

    let mut panes = vec![Pane::new(up)];
    if let Some(studio) = &profile.db_studio_task {
        panes.push(Pane::new(studio.command(profile.package_manager)));
    }

    Window {
        name: "services".into(),
        root: root.to_path_buf(),
        layout: WindowLayout::EvenHorizontal,
        panes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{PackageManager, Task};

    fn root() -> &'static Path {
        Path::new("/work/app")
    }

    fn base() -> ProjectProfile {
        ProjectProfile {
            session_name: "app".into(),
            display_name: "app".into(),
            ..ProjectProfile::default()
        }
    }

    fn focused_count(doc: &LayoutDocument) -> usize {
        doc.windows
            .iter()
            .flat_map(|w| &w.panes)
            .filter(|p| p.focus)
            .count()
    }

    #[test]
    fn test_minimal_project() {
        let doc = compose(&base(), root());
        assert_eq!(doc.name, "app");
        assert_eq!(doc.windows.len(), 1);

        let dev = &doc.windows[0];
        assert_eq!(dev.name, "dev");
        assert_eq!(dev.root, root());
        assert_eq!(dev.pane_commands(), vec![EDITOR_COMMAND, LISTING_COMMAND]);
        assert!(!dev.panes[0].focus);
        assert!(dev.panes[1].focus);
    }

    #[test]
    fn test_dev_is_last_task_pane() {
        let profile = ProjectProfile {
            package_manager: PackageManager::Pnpm,
            dev_task: Some(Task::script("dev")),
            watch_tasks: vec![
                Task::script("css:watch"),
                Task::script("types:watch"),
                Task::script("test:watch"),
                Task::verbatim("api:watch", "ptw api"),
            ],
            ..base()
        };

        let doc = compose(&profile, root());
        assert_eq!(
            doc.windows[0].pane_commands(),
            vec![
                EDITOR_COMMAND,
                "sleep 2 && pnpm test:watch",
                "pnpm types:watch",
                "pnpm css:watch",
                "ptw api",
                "pnpm dev",
                LISTING_COMMAND,
            ]
        );
        assert_eq!(focused_count(&doc), 1);
    }

    #[test]
    fn test_override_replaces_task_panes() {
        let profile = ProjectProfile {
            dev_task: Some(Task::script("dev")),
            watch_tasks: vec![Task::script("test:watch")],
            override_commands: vec!["make watch".into(), "make serve".into()],
            ..base()
        };

        let doc = compose(&profile, root());
        let dev = &doc.windows[0];
        assert_eq!(dev.panes.len(), 1 + profile.override_commands.len() + 1);
        assert_eq!(
            dev.pane_commands(),
            vec![EDITOR_COMMAND, "make watch", "make serve", LISTING_COMMAND]
        );
    }

    #[test]
    fn test_override_keeps_services_window() {
        let profile = ProjectProfile {
            override_commands: vec!["make serve".into()],
            docker_compose_present: true,
            ..base()
        };
        assert!(compose(&profile, root()).window("services").is_some());
    }

    #[test]
    fn test_services_window() {
        let profile = ProjectProfile {
            docker_compose_present: true,
            ..base()
        };
        let doc = compose(&profile, root());
        let services = doc.window("services").unwrap();
        assert_eq!(services.pane_commands(), vec![COMPOSE_DOWN_UP]);
        assert_eq!(services.layout, WindowLayout::EvenHorizontal);

        let profile = ProjectProfile {
            docker_compose_present: true,
            dockerfile_present: true,
            package_manager: PackageManager::Yarn,
            db_studio_task: Some(Task::script("db:studio")),
            ..base()
        };
        let doc = compose(&profile, root());
        assert_eq!(
            doc.window("services").unwrap().pane_commands(),
            vec![
                "docker compose down && docker compose up --build",
                "yarn db:studio",
            ]
        );
        assert_eq!(focused_count(&doc), 1);
    }

    #[test]
    fn test_dockerfile_alone_has_no_services() {
        let profile = ProjectProfile {
            dockerfile_present: true,
            ..base()
        };
        assert!(compose(&profile, root()).window("services").is_none());
    }

    #[test]
    fn test_compose_is_deterministic() {
        let profile = ProjectProfile {
            dev_task: Some(Task::script("dev")),
            watch_tasks: vec![Task::script("test:watch")],
            docker_compose_present: true,
            ..base()
        };
        let a = compose(&profile, root()).to_yaml().unwrap();
        let b = compose(&profile, root()).to_yaml().unwrap();
        assert_eq!(a, b);
    }
}
