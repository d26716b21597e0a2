//! File-name date strategy.

use crate::error::ConfigError;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;

/// A date pattern searched for inside file names.
///
/// `YYYY`, `MM` and `DD` stand for the year, month and day digits; every
/// other character must appear literally. Each component appears exactly
/// once with exactly that many letters, so two-digit years (`YYMMDD`) are
/// not expressible.
///
/// ```rust,ignore
/// let mask = FileNameMask::parse("YYYY-MM-DD")?;
/// assert!(mask.find_date("beach_2016-07-05_003").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct FileNameMask {
    mask: String,
    pattern: Regex,
}

impl FileNameMask {
    pub fn parse(mask: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidFileNameMask {
            mask: mask.to_string(),
            reason: reason.to_string(),
        };

        let mut regex = String::new();
        let (mut year, mut month, mut day) = (false, false, false);
        let mut chars = mask.chars().peekable();

        while let Some(c) = chars.next() {
            let (seen, name, width) = match c {
                'Y' => (&mut year, "year", 4),
                'M' => (&mut month, "month", 2),
                'D' => (&mut day, "day", 2),
                other => {
                    regex.push_str(&regex::escape(other.encode_utf8(&mut [0; 4])));
                    continue;
                }
            };

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }

            if run != width {
                return Err(invalid(&format!(
                    "{} needs exactly {} '{}' characters, found {}",
                    name, width, c, run
                )));
            }
            if *seen {
                return Err(invalid(&format!("{} appears more than once", name)));
            }
            *seen = true;
            regex.push_str(&format!("(?P<{}>[0-9]{{{}}})", name, width));
        }

        if !(year && month && day) {
            return Err(invalid("mask must contain YYYY, MM and DD"));
        }

        let pattern = Regex::new(&regex).map_err(|e| invalid(&e.to_string()))?;
        Ok(Self {
            mask: mask.to_string(),
            pattern,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.mask
    }

    /// Find the first substring of `name` that matches the mask and forms a
    /// real calendar date.
    ///
    /// Matching is a substring search, so `IMG_20160705_1234` matches
    /// `YYYYMMDD`. Candidates that are not valid dates (`20161345`) are
    /// passed over and the search continues one character further on.
    pub fn find_date(&self, name: &str) -> Option<NaiveDate> {
        let mut start = 0;
        while start <= name.len() {
            let caps = self.pattern.captures_at(name, start)?;
            let whole = caps.get(0)?;

            let date = (|| {
                let year = caps.name("year")?.as_str().parse().ok()?;
                let month = caps.name("month")?.as_str().parse().ok()?;
                let day = caps.name("day")?.as_str().parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            })();
            if date.is_some() {
                return date;
            }

            start = next_char_boundary(name, whole.start());
        }
        None
    }
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    s[index..]
        .chars()
        .next()
        .map(|c| index + c.len_utf8())
        .unwrap_or(s.len() + 1)
}

impl PartialEq for FileNameMask {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

impl Eq for FileNameMask {}

impl fmt::Display for FileNameMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mask)
    }
}
