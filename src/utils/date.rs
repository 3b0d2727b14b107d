use crate::errors::AppResult;
use chrono::{DateTime, Local, NaiveDateTime};

/// Timestamp layout printed by `mdls` (e.g. `2024-01-02 03:04:05 +0000`).
pub const MDLS_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Layout used everywhere a last-used timestamp is displayed.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an `mdls` timestamp and return its wall-clock time in the offset it
/// was written with.
pub fn parse_mdls_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    Ok(DateTime::parse_from_str(s, MDLS_FORMAT)?.naive_local())
}

/// Convert epoch seconds to local wall-clock time.
/// Returns `None` for values chrono cannot represent.
pub fn from_epoch_local(secs: f64) -> Option<NaiveDateTime> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor() as i64;
    let nanos = ((secs - secs.floor()) * 1e9).round().clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(whole, nanos).map(|utc| utc.with_timezone(&Local).naive_local())
}

pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
