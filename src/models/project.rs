use std::path::PathBuf;

/// Outcome of auditing one project folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatus {
    /// No `.git` directory in the folder
    NotARepository,
    Clean,
    /// `git status --porcelain` printed something
    Dirty,
    /// The status command could not be run or exited non-zero.
    /// Counts as not-clean.
    StatusFailed(String),
}

impl ProjectStatus {
    pub fn is_clean(&self) -> bool {
        matches!(self, ProjectStatus::Clean)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectFolder {
    pub path: PathBuf,
    pub status: ProjectStatus,
}

/// Counters collected over one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub groups: usize,
    pub projects: usize,
    pub not_repositories: usize,
    pub dirty: usize,
    pub failed_checks: usize,
}

impl AuditSummary {
    pub fn record(&mut self, status: &ProjectStatus) {
        self.projects += 1;
        match status {
            ProjectStatus::NotARepository => self.not_repositories += 1,
            ProjectStatus::Clean => {}
            ProjectStatus::Dirty => self.dirty += 1,
            ProjectStatus::StatusFailed(_) => {
                self.failed_checks += 1;
                self.dirty += 1;
            }
        }
    }

    /// Number of projects that produced a warning line.
    pub fn findings(&self) -> usize {
        self.not_repositories + self.dirty
    }
}
