//! Thin wrapper around `std::process::Command` shared by the external
//! collaborators (git, system_profiler, mdls).

use crate::errors::{AppError, AppResult};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Run `program args...` (optionally inside `cwd`) and wait for it.
/// Only a spawn failure is an error; the exit status is left to the caller.
pub fn run_output<S>(program: &str, args: &[S], cwd: Option<&Path>) -> AppResult<Output>
where
    S: AsRef<OsStr> + fmt::Debug,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    debug!(program = %program, ?args, cwd = ?cwd, "spawning");

    cmd.output().map_err(|source| AppError::Spawn {
        program: program.to_string(),
        source,
    })
}

/// Like [`run_output`], returning stdout regardless of the exit status.
pub fn run_stdout<S>(program: &str, args: &[S], cwd: Option<&Path>) -> AppResult<String>
where
    S: AsRef<OsStr> + fmt::Debug,
{
    let output = run_output(program, args, cwd)?;
    if !output.status.success() {
        debug!(program = %program, status = %output.status, "non-zero exit ignored");
    }
    stdout_text(program, output)
}

/// Like [`run_output`], but a non-zero exit becomes
/// [`AppError::CommandFailed`] carrying stderr.
pub fn run_capture<S>(program: &str, args: &[S], cwd: Option<&Path>) -> AppResult<String>
where
    S: AsRef<OsStr> + fmt::Debug,
{
    let output = run_output(program, args, cwd)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        let stderr = if stderr.is_empty() {
            format!("'{}' exited with {}", program, output.status)
        } else {
            stderr
        };
        return Err(AppError::CommandFailed {
            program: program.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    stdout_text(program, output)
}

fn stdout_text(program: &str, output: Output) -> AppResult<String> {
    String::from_utf8(output.stdout).map_err(|_| AppError::InvalidOutput(program.to_string()))
}
