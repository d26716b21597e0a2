//! Modification-time fallback strategy.

use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::path::Path;

/// Last-modified date of `path` in local time.
pub fn modified_date(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let datetime: DateTime<Local> = modified.into();
    Some(datetime.date_naive())
}
