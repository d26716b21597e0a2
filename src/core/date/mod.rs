//! # Date Module
//!
//! Works out the "effective date" of a file.
//!
//! ## Strategies
//! Tried in a fixed order, first hit wins:
//! 1. EXIF capture date (`DateTime`, `DateTimeOriginal`, `DateTimeDigitized`)
//! 2. A date embedded in the file name (`YYYYMMDD`, `YYYY-MM-DD`, ...)
//! 3. The filesystem modification time, in local time
//!
//! A disabled strategy is never consulted, even if it would have succeeded.
//! Strategy failures are not errors; they fall through to the next strategy.

mod exif_date;
mod file_name;
mod modified;

pub use exif_date::{parse_exif_date, read_exif_date, ExifField};
pub use file_name::FileNameMask;
pub use modified::modified_date;

#[cfg(test)]
pub(crate) use exif_date::fixtures;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which strategy produced a [`ResolvedDate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    Exif(ExifField),
    FileName,
    ModifiedTime,
}

impl fmt::Display for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSource::Exif(field) => write!(f, "EXIF data ({})", field),
            DateSource::FileName => write!(f, "file name"),
            DateSource::ModifiedTime => write!(f, "modified time"),
        }
    }
}

/// A calendar date plus the strategy that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub source: DateSource,
}

/// The enabled strategies of a validated profile
#[derive(Debug, Clone, Default)]
pub struct DateStrategies {
    /// EXIF fields to check, in order. Empty disables the EXIF strategy.
    pub exif_fields: Vec<ExifField>,
    /// File name masks to try, in order. Empty disables the file name strategy.
    pub file_name_masks: Vec<FileNameMask>,
    pub modified_time: bool,
}

impl DateStrategies {
    pub fn any_enabled(&self) -> bool {
        !self.exif_fields.is_empty() || !self.file_name_masks.is_empty() || self.modified_time
    }
}

/// Runs the detection chain for one file at a time
pub struct DateResolver<'a> {
    strategies: &'a DateStrategies,
}

impl<'a> DateResolver<'a> {
    pub fn new(strategies: &'a DateStrategies) -> Self {
        Self { strategies }
    }

    /// Resolve the effective date of `path`, or `None` if every enabled
    /// strategy came up empty.
    pub fn resolve(&self, path: &Path) -> Option<ResolvedDate> {
        if !self.strategies.exif_fields.is_empty() {
            if let Some((date, field)) = read_exif_date(path, &self.strategies.exif_fields) {
                return Some(ResolvedDate {
                    date,
                    source: DateSource::Exif(field),
                });
            }
        }

        if !self.strategies.file_name_masks.is_empty() {
            if let Some(date) = self.file_name_date(path) {
                return Some(ResolvedDate {
                    date,
                    source: DateSource::FileName,
                });
            }
        }

        if self.strategies.modified_time {
            if let Some(date) = modified_date(path) {
                return Some(ResolvedDate {
                    date,
                    source: DateSource::ModifiedTime,
                });
            }
        }

        None
    }

    fn file_name_date(&self, path: &Path) -> Option<NaiveDate> {
        let stem = path.file_stem()?.to_str()?;
        self.strategies
            .file_name_masks
            .iter()
            .find_map(|mask| mask.find_date(stem))
    }
}
