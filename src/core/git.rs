use crate::core::command::run_capture;
use crate::errors::AppResult;
use std::path::Path;

/// Name of the metadata directory that marks a Git checkout.
pub const GIT_DIR: &str = ".git";

/// Capability to report the working-tree status of a checkout.
pub trait StatusChecker {
    /// Machine-readable status of the working tree rooted at `repo`.
    /// An empty (or whitespace-only) string means the tree is clean.
    fn porcelain_status(&self, repo: &Path) -> AppResult<String>;
}

/// True when `folder` contains a `.git` directory.
pub fn is_git_repo(folder: &Path) -> bool {
    folder.join(GIT_DIR).is_dir()
}

/// [`StatusChecker`] backed by the `git` executable.
pub struct GitStatusChecker {
    program: String,
}

impl GitStatusChecker {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for GitStatusChecker {
    fn default() -> Self {
        Self::new("git")
    }
}

impl StatusChecker for GitStatusChecker {
    fn porcelain_status(&self, repo: &Path) -> AppResult<String> {
        run_capture(&self.program, &["status", "--porcelain"], Some(repo))
    }
}
