//! Results of organizing runs.

use crate::core::date::DateSource;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a profile run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ProfileStatus {
    /// Every candidate was attempted
    Completed,
    /// Validation failed; nothing was scanned or moved
    Invalid { reason: String },
    /// Stopped between files by the cancel flag
    Cancelled,
}

/// One file that reached its destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub date: NaiveDate,
    pub source: DateSource,
}

/// Tally for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub name: String,
    pub status: ProfileStatus,
    /// Candidates returned by the scan
    pub files_found: usize,
    /// Candidates that went through the pipeline
    pub attempted: usize,
    pub moved: usize,
    /// Unreadable files and files without a date
    pub skipped: usize,
    /// Files whose move failed
    pub failed: usize,
    /// Directories that could not be read during the scan
    pub scan_errors: usize,
    pub moves: Vec<MovedFile>,
}

impl ProfileReport {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: ProfileStatus::Completed,
            files_found: 0,
            attempted: 0,
            moved: 0,
            skipped: 0,
            failed: 0,
            scan_errors: 0,
            moves: Vec::new(),
        }
    }

    pub(crate) fn invalid(name: &str, reason: String) -> Self {
        Self {
            status: ProfileStatus::Invalid { reason },
            ..Self::new(name)
        }
    }

    pub(crate) fn cancelled(name: &str) -> Self {
        Self {
            status: ProfileStatus::Cancelled,
            ..Self::new(name)
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self.status, ProfileStatus::Invalid { .. })
    }
}

/// Tally for a whole run, one entry per profile in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub profiles: Vec<ProfileReport>,
}

impl RunReport {
    pub fn total_moved(&self) -> usize {
        self.profiles.iter().map(|p| p.moved).sum()
    }

    pub fn total_attempted(&self) -> usize {
        self.profiles.iter().map(|p| p.attempted).sum()
    }

    pub fn profile(&self, name: &str) -> Option<&ProfileReport> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Pretty-printed JSON, for saving alongside the organized tree
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
