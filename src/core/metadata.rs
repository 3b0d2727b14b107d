//! Per-application "last used" lookup through Spotlight metadata.

use crate::core::command::run_stdout;
use crate::errors::AppResult;
use crate::models::LastUsed;
use crate::utils::date::parse_mdls_timestamp;
use std::ffi::OsStr;
use std::path::Path;

/// Spotlight attribute holding the last launch time of a bundle.
pub const LAST_USED_ATTRIBUTE: &str = "kMDItemLastUsedDate";

/// Marker `mdls` prints when the attribute is unset.
pub const NULL_MARKER: &str = "(null)";

/// Capability to fetch the raw last-used attribute of a path.
pub trait LastUsedLookup {
    /// Raw tool output, e.g. `kMDItemLastUsedDate = 2024-01-02 03:04:05 +0000`.
    fn lookup(&self, path: &Path) -> AppResult<String>;
}

/// [`LastUsedLookup`] backed by `mdls`.
pub struct MdlsLookup {
    program: String,
}

impl MdlsLookup {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for MdlsLookup {
    fn default() -> Self {
        Self::new("mdls")
    }
}

impl LastUsedLookup for MdlsLookup {
    fn lookup(&self, path: &Path) -> AppResult<String> {
        let args = [
            OsStr::new("-name"),
            OsStr::new(LAST_USED_ATTRIBUTE),
            path.as_os_str(),
        ];
        // mdls exits non-zero for bundles Spotlight has not indexed; its
        // stdout is then empty, which reads as never opened.
        run_stdout(&self.program, &args, None)
    }
}

/// Interpret raw `mdls` output.
///
/// Only the text after the last `=` is considered. `(null)` or nothing means
/// the application was never opened.
pub fn parse_last_used(raw: &str) -> LastUsed {
    let value = raw.trim().rsplit('=').next().unwrap_or("").trim();

    if value == NULL_MARKER || value.is_empty() {
        return LastUsed::NeverOpened;
    }

    let value = value.replace('"', "");
    match parse_mdls_timestamp(value.trim()) {
        Ok(dt) => LastUsed::At(dt),
        Err(e) => LastUsed::Error(e.to_string()),
    }
}

/// Resolve the last-used value of one application path. Never fails: lookup
/// errors become [`LastUsed::Error`].
pub fn resolve_last_used(lookup: &dyn LastUsedLookup, path: &Path) -> LastUsed {
    match lookup.lookup(path) {
        Ok(raw) => parse_last_used(&raw),
        Err(e) => LastUsed::Error(e.to_string()),
    }
}
