//! Two-level repository hygiene scan.
//!
//! ```text
//! <root>/<group>/<project>
//! ```
//!
//! Every `<project>` directory is classified as not a repository, dirty or
//! clean. Only the non-clean cases are printed.

use crate::core::git::{StatusChecker, is_git_repo};
use crate::errors::{AppError, AppResult};
use crate::models::{AuditSummary, ProjectFolder, ProjectStatus};
use crate::ui::messages::{ICON_ERR, ICON_WARN};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of one audit run.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub projects: Vec<ProjectFolder>,
    pub summary: AuditSummary,
}

pub struct RepoAuditor<'a> {
    checker: &'a dyn StatusChecker,
}

impl<'a> RepoAuditor<'a> {
    pub fn new(checker: &'a dyn StatusChecker) -> Self {
        Self { checker }
    }

    /// Classify a single project folder.
    pub fn classify(&self, project: &Path) -> ProjectStatus {
        if !is_git_repo(project) {
            return ProjectStatus::NotARepository;
        }

        match self.checker.porcelain_status(project) {
            Ok(out) if out.trim().is_empty() => ProjectStatus::Clean,
            Ok(_) => ProjectStatus::Dirty,
            Err(e) => ProjectStatus::StatusFailed(e.to_string()),
        }
    }

    /// Scan `root` two levels deep and write findings to `out`.
    ///
    /// Only an unreadable `root` aborts the scan; every other failure is
    /// reported and the scan moves on.
    pub fn audit<W: Write>(&self, root: &Path, out: &mut W) -> AppResult<AuditReport> {
        info!("Auditing projects under {}", root.display());
        let mut report = AuditReport::default();

        for group in list_dirs(root)? {
            report.summary.groups += 1;
            writeln!(out)?;
            writeln!(out, "Checking in {}...", group.display())?;

            let projects = match list_dirs(&group) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Skipping group: {}", e);
                    crate::ui::messages::warning(&e);
                    continue;
                }
            };

            for project in projects {
                let status = self.classify(&project);
                debug!(project = %project.display(), ?status, "classified");
                write_finding(out, &project, &status)?;
                report.summary.record(&status);
                report.projects.push(ProjectFolder {
                    path: project,
                    status,
                });
            }
        }

        info!(
            groups = report.summary.groups,
            projects = report.summary.projects,
            findings = report.summary.findings(),
            "Audit completed"
        );
        Ok(report)
    }
}

fn write_finding<W: Write>(out: &mut W, project: &Path, status: &ProjectStatus) -> AppResult<()> {
    match status {
        ProjectStatus::Clean => {}
        ProjectStatus::NotARepository => {
            writeln!(
                out,
                "{} {} is not a Git repository.",
                ICON_ERR,
                project.display()
            )?;
        }
        ProjectStatus::Dirty => {
            writeln!(
                out,
                "{} {} has uncommitted changes.",
                ICON_WARN,
                project.display()
            )?;
        }
        ProjectStatus::StatusFailed(err) => {
            writeln!(
                out,
                "Error checking repository at {}: {}",
                project.display(),
                err
            )?;
            writeln!(
                out,
                "{} {} has uncommitted changes.",
                ICON_WARN,
                project.display()
            )?;
        }
    }
    Ok(())
}

/// Immediate subdirectories of `dir` (symlinks followed), sorted by name.
fn list_dirs(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let read_err = |source| AppError::ReadDir {
        path: dir.display().to_string(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
