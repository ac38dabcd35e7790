//! Timestamp helpers for the `created_at` / `updated_at` columns.

use chrono::{Local, NaiveDateTime};

/// Local wall-clock time as `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn now_iso() -> String {
    format_iso(&Local::now().naive_local())
}

pub fn format_iso(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
