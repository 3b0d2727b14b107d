#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use devaudit::core::git::StatusChecker;
use devaudit::core::inventory::InventorySource;
use devaudit::core::metadata::LastUsedLookup;
use devaudit::errors::{AppError, AppResult};
use devaudit::models::ApplicationDescriptor;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub fn dva() -> Command {
    cargo_bin_cmd!("devaudit")
}

/// Create `<root>/<group>/<name>`, with an empty `.git` directory when `git` is set.
pub fn make_project(root: &Path, group: &str, name: &str, git: bool) -> PathBuf {
    let path = root.join(group).join(name);
    fs::create_dir_all(&path).expect("create project dir");
    if git {
        fs::create_dir_all(path.join(".git")).expect("create .git");
    }
    path
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> String {
    let path = dir.join("devaudit.conf");
    fs::write(&path, yaml).expect("write config");
    path.to_string_lossy().to_string()
}

/// Status checker answering from fixed tables; every other repo is clean.
#[derive(Default)]
pub struct FakeChecker {
    pub dirty: Vec<PathBuf>,
    pub failing: Vec<PathBuf>,
    pub calls: RefCell<Vec<PathBuf>>,
}

impl StatusChecker for FakeChecker {
    fn porcelain_status(&self, repo: &Path) -> AppResult<String> {
        self.calls.borrow_mut().push(repo.to_path_buf());
        if self.failing.iter().any(|p| p == repo) {
            return Err(AppError::CommandFailed {
                program: "git".to_string(),
                code: Some(128),
                stderr: "fatal: not a git repository".to_string(),
            });
        }
        if self.dirty.iter().any(|p| p == repo) {
            Ok(" M src/main.rs\n?? notes.txt\n".to_string())
        } else {
            Ok(String::new())
        }
    }
}

pub struct FakeInventory(pub Vec<ApplicationDescriptor>);

impl InventorySource for FakeInventory {
    fn applications(&self) -> AppResult<Vec<ApplicationDescriptor>> {
        Ok(self.0.clone())
    }
}

pub struct FailingInventory;

impl InventorySource for FailingInventory {
    fn applications(&self) -> AppResult<Vec<ApplicationDescriptor>> {
        Err(AppError::CommandFailed {
            program: "system_profiler".to_string(),
            code: Some(1),
            stderr: "boom".to_string(),
        })
    }
}

/// Lookup returning canned raw output per path, counting invocations.
/// Unknown paths fail like a missing tool would.
#[derive(Default)]
pub struct FakeLookup {
    pub answers: HashMap<PathBuf, String>,
    pub calls: Cell<usize>,
}

impl FakeLookup {
    pub fn with(mut self, path: &str, raw: &str) -> Self {
        self.answers.insert(PathBuf::from(path), raw.to_string());
        self
    }
}

impl LastUsedLookup for FakeLookup {
    fn lookup(&self, path: &Path) -> AppResult<String> {
        self.calls.set(self.calls.get() + 1);
        self.answers
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::Other(format!("no metadata for {}", path.display())))
    }
}

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}
