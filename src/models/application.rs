use chrono::NaiveDateTime;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use crate::utils::date::format_display;

pub const NEVER_OPENED: &str = "Never Opened";
pub const PATH_NOT_AVAILABLE: &str = "Path Not Available";

/// One entry of the OS application inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationDescriptor {
    #[serde(rename = "_name", default = "unknown_name")]
    pub name: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

impl ApplicationDescriptor {
    pub fn new(name: &str, path: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            path: path.map(PathBuf::from),
        }
    }
}

/// Last-used value shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastUsed {
    At(NaiveDateTime),
    NeverOpened,
    PathNotAvailable,
    /// Lookup or parse failure, shown as `Error: <text>`
    Error(String),
}

impl LastUsed {
    /// Rank used by the chronological sort: timestamps first, then sentinels.
    fn rank(&self) -> u8 {
        match self {
            LastUsed::At(_) => 0,
            LastUsed::NeverOpened => 1,
            LastUsed::PathNotAvailable => 2,
            LastUsed::Error(_) => 3,
        }
    }
}

impl fmt::Display for LastUsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastUsed::At(dt) => f.write_str(&format_display(dt)),
            LastUsed::NeverOpened => f.write_str(NEVER_OPENED),
            LastUsed::PathNotAvailable => f.write_str(PATH_NOT_AVAILABLE),
            LastUsed::Error(e) => write!(f, "Error: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub name: String,
    pub last_used: LastUsed,
}

impl ApplicationRecord {
    pub fn display_last_used(&self) -> String {
        self.last_used.to_string()
    }
}

/// How the report rows are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Descending on the displayed string.
    #[default]
    Lexical,
    /// Newest timestamp first, then Never Opened, Path Not Available, errors.
    Chronological,
}

pub fn sort_records(records: &mut [ApplicationRecord], order: SortOrder) {
    match order {
        SortOrder::Lexical => {
            // stable: equal strings keep inventory order
            records.sort_by_cached_key(|r| std::cmp::Reverse(r.display_last_used()));
        }
        SortOrder::Chronological => records.sort_by(|a, b| {
            match a.last_used.rank().cmp(&b.last_used.rank()) {
                Ordering::Equal => match (&a.last_used, &b.last_used) {
                    (LastUsed::At(x), LastUsed::At(y)) => y.cmp(x),
                    _ => Ordering::Equal,
                },
                other => other,
            }
        }),
    }
}
