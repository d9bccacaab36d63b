//! End-to-end checks from project directory to layout document.

use autocil::compose::{COMPOSE_DOWN_UP, EDITOR_COMMAND, LISTING_COMMAND, compose};
use autocil::config::Config;
use autocil::profile::{PackageManager, profile};
use autocil::session::{LayoutSource, plan};
use autocil::target::resolve_all;
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn manifest_with_dev_and_test_watch() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{"scripts": {"dev": "x", "test:watch": "y"}}"#,
    );

    let p = profile(dir.path(), None);
    assert_eq!(p.package_manager, PackageManager::Npm);

    let doc = compose(&p, dir.path());
    assert_eq!(doc.windows.len(), 1);
    let dev = &doc.windows[0];
    assert_eq!(dev.name, "dev");
    assert_eq!(
        dev.pane_commands(),
        vec![
            EDITOR_COMMAND,
            "sleep 2 && npm run test:watch",
            "npm run dev",
            LISTING_COMMAND,
        ]
    );
    assert!(dev.panes.last().unwrap().focus);
}

#[test]
fn yarn_project_with_docker() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "yarn.lock", "");
    write(dir.path(), "docker-compose.yml", "services: {}\n");
    write(dir.path(), "Dockerfile", "FROM node:20\n");
    write(dir.path(), "package.json", r#"{"name": "shop"}"#);

    let p = profile(dir.path(), None);
    assert_eq!(p.package_manager, PackageManager::Yarn);

    let doc = compose(&p, dir.path());
    assert_eq!(doc.name, "shop");
    assert_eq!(
        doc.window("dev").unwrap().pane_commands(),
        vec![EDITOR_COMMAND, LISTING_COMMAND]
    );
    let services = doc.window("services").unwrap();
    assert_eq!(services.panes.len(), 1);
    assert_eq!(
        services.pane_commands(),
        vec![format!("{} --build", COMPOSE_DOWN_UP).as_str()]
    );
}

#[test]
fn override_file_replaces_manifest_scripts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), ".autocil.yaml", "- cmd1\n- cmd2\n");
    write(dir.path(), "package.json", r#"{"scripts": {"dev": "vite"}}"#);

    let doc = compose(&profile(dir.path(), None), dir.path());
    assert_eq!(
        doc.windows[0].pane_commands(),
        vec![EDITOR_COMMAND, "cmd1", "cmd2", LISTING_COMMAND]
    );
}

#[test]
fn two_directories_only_second_attaches() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().canonicalize().unwrap();
    let root = base.join("code");
    fs::create_dir_all(root.join("api")).unwrap();
    fs::create_dir_all(root.join("web")).unwrap();
    write(&root.join("web"), "package.json", r#"{"name": "@acme/web"}"#);

    let config = Config { root: root.clone() };
    let requested = vec!["api".to_string(), "web".to_string()];
    let targets = resolve_all(&requested, &base, &base, &config).unwrap();
    let launches = plan(&targets, None, true).unwrap();

    assert_eq!(launches.len(), 2);
    assert_eq!(launches[0].session_name, "api");
    assert!(!launches[0].attach);
    assert_eq!(launches[1].session_name, "acme-web");
    assert!(launches[1].attach);

    for launch in &launches {
        match &launch.source {
            LayoutSource::Generated(doc) => {
                assert_eq!(doc.windows.len(), 1);
                assert!(doc.window("services").is_none());
            }
            LayoutSource::Existing(path) => panic!("unexpected layout file {}", path.display()),
        }
    }
}

#[test]
fn rendered_yaml_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{"name": "@acme/web", "scripts": {"dev": "vite", "types:watch": "tsc -w"}}"#,
    );
    write(dir.path(), "compose.yaml", "services: {}\n");

    let first = compose(&profile(dir.path(), None), dir.path()).to_yaml().unwrap();
    let second = compose(&profile(dir.path(), None), dir.path()).to_yaml().unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("session_name: acme-web\n"));
}
