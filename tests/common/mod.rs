#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use cmake_new::Config;
use tempfile::TempDir;

pub const CMAKE_LISTS: &str = "cmake_minimum_required(VERSION 3.10)\n\
project(@PROJECT_NAME@)\n\
add_executable(@PROJECT_NAME@ src/main.cpp)\n";

pub const LAUNCH_JSON: &str = r#"{
    "version": "0.2.0",
    "configurations": [
        { "name": "Debug", "program": "${workspaceFolder}/build/@PROJECT_NAME@" }
    ]
}
"#;

pub fn git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Builds a committed template repository under `root/template` and returns its path.
pub fn template_repo(root: &Path, files: &[(&str, &str)]) -> PathBuf {
    let dir = root.join("template");
    for (rel, content) in files {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    assert!(git(&dir, &["init"]));
    assert!(git(&dir, &["add", "-A"]));
    assert!(git(&dir, &["commit", "-m", "template"]));
    dir
}

pub fn full_template(root: &Path) -> PathBuf {
    template_repo(
        root,
        &[
            ("CMakeLists.txt", CMAKE_LISTS),
            (".vscode/launch.json", LAUNCH_JSON),
            ("build/.gitkeep", ""),
            ("src/main.cpp", "int main() { return 0; }\n"),
        ],
    )
}

/// A config that clones `template` and uses `cmake` as the configure command.
pub fn config(template: &Path, cmake: &str) -> Config {
    Config {
        template_url: template.display().to_string(),
        cmake: cmake.to_string(),
        ..Config::default()
    }
}

/// Scratch space holding the template and a separate working directory.
pub struct Sandbox {
    pub root: TempDir,
    pub work: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let work = root.path().join("work");
        fs::create_dir(&work).unwrap();
        Self { root, work }
    }
}
