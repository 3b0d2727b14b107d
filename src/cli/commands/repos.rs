use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::RepoAuditor;
use crate::core::git::GitStatusChecker;
use crate::errors::AppResult;
use crate::utils::expand_tilde;
use std::io::{self, Write};

/// Handle the `repos` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Repos { root } = cmd {
        let root = match root {
            Some(r) => expand_tilde(r),
            None => cfg.scan_root_path(),
        };

        let checker = GitStatusChecker::new(&cfg.git_command);
        let auditor = RepoAuditor::new(&checker);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        auditor.audit(&root, &mut out)?;
        out.flush()?;
    }
    Ok(())
}
