//! Target directory masks.

use crate::error::ConfigError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    /// `Y` - four-digit year
    Year,
    /// `y` - two-digit year
    ShortYear,
    /// `m` - two-digit month
    Month,
    /// `d` - two-digit day
    Day,
}

/// Template for the date-derived part of a destination path.
///
/// `Y`, `y`, `m` and `d` become the year, short year, month and day; a
/// backslash makes the next character literal; everything else, including
/// `/`, passes through unchanged. `Y/Y-m-d` renders 2016-07-05 as
/// `2016/2016-07-05`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMask {
    mask: String,
    tokens: Vec<Token>,
}

impl TargetMask {
    pub fn parse(mask: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidTargetMask {
            mask: mask.to_string(),
            reason: reason.to_string(),
        };

        let mut tokens = Vec::new();
        let mut chars = mask.chars();
        while let Some(c) = chars.next() {
            let token = match c {
                'Y' => Token::Year,
                'y' => Token::ShortYear,
                'm' => Token::Month,
                'd' => Token::Day,
                '\\' => match chars.next() {
                    Some(escaped) => Token::Literal(escaped),
                    None => return Err(invalid("dangling escape at end of mask")),
                },
                other => Token::Literal(other),
            };
            tokens.push(token);
        }

        if tokens.is_empty() {
            return Err(invalid("mask is empty"));
        }
        if tokens.iter().all(|t| matches!(t, Token::Literal(_))) {
            return Err(invalid("mask needs at least one of Y, y, m or d"));
        }

        let parsed = Self {
            mask: mask.to_string(),
            tokens,
        };

        // Digits can never form "..", so checking one rendering covers all dates
        let sample = parsed.render_string(NaiveDate::MIN);
        if Path::new(&sample)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(invalid("mask must not contain '..'"));
        }

        Ok(parsed)
    }

    pub fn as_str(&self) -> &str {
        &self.mask
    }

    /// Relative directory for `date`. Leading and doubled separators are
    /// dropped so the result always stays under the target directory.
    pub fn render(&self, date: NaiveDate) -> PathBuf {
        self.render_string(date)
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }

    fn render_string(&self, date: NaiveDate) -> String {
        let mut out = String::with_capacity(self.mask.len() + 8);
        for token in &self.tokens {
            match token {
                Token::Literal(c) => out.push(*c),
                Token::Year => out.push_str(&format!("{:04}", date.year())),
                Token::ShortYear => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
                Token::Month => out.push_str(&format!("{:02}", date.month())),
                Token::Day => out.push_str(&format!("{:02}", date.day())),
            }
        }
        out
    }
}

impl fmt::Display for TargetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mask)
    }
}
