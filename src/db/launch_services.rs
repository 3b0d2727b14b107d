//! Fallback application source reading the LaunchServices store directly.
//!
//! Recent macOS releases no longer keep this store as SQLite, so the source
//! is only used when explicitly requested (`apps --source launch-services`).

use crate::db::pool::DbPool;
use crate::models::{ApplicationRecord, LastUsed};
use crate::ui::messages;
use crate::utils::date::from_epoch_local;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, warn};

pub const LAST_USED_QUERY: &str =
    "SELECT name, lastused FROM LSApplicationData WHERE lastused IS NOT NULL";

/// Map a stored epoch value to the displayed last-used value.
/// Missing or zero values mean the application was never opened.
pub fn last_used_from_epoch(value: Option<f64>) -> LastUsed {
    match value {
        Some(secs) if secs != 0.0 => match from_epoch_local(secs) {
            Some(dt) => LastUsed::At(dt),
            None => LastUsed::Error(format!("timestamp out of range: {secs}")),
        },
        _ => LastUsed::NeverOpened,
    }
}

/// Read application records from the database at `db_path`.
///
/// Never fails: a missing file is reported once and yields an empty list,
/// a query error is reported and yields the rows read so far.
pub fn load_applications(db_path: &Path) -> Vec<ApplicationRecord> {
    if !db_path.exists() {
        messages::warning(format!(
            "LaunchServices database not found at: {}",
            db_path.display()
        ));
        return Vec::new();
    }

    let mut applications = Vec::new();

    let result = DbPool::open_read_only(db_path)
        .and_then(|mut pool| pool.with_conn(|conn| query_into(conn, &mut applications)));

    if let Err(e) = result {
        warn!("LaunchServices query failed: {}", e);
        messages::error(format!("Error querying LaunchServices database: {}", e));
    }

    debug!(
        "Loaded {} applications from {}",
        applications.len(),
        db_path.display()
    );
    applications
}

fn query_into(conn: &mut Connection, out: &mut Vec<ApplicationRecord>) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare(LAST_USED_QUERY)?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        let name: Option<String> = row.get(0)?;
        let last_used: Option<f64> = row.get(1)?;
        out.push(ApplicationRecord {
            name: name.unwrap_or_else(|| "Unknown".to_string()),
            last_used: last_used_from_epoch(last_used),
        });
    }
    Ok(())
}
