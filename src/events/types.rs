//! Event type definitions for progress reporting.

use crate::core::date::DateSource;
use crate::core::runner::{ProfileReport, RunReport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted while organizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Whole-run events
    Run(RunEvent),
    /// Events for a single profile
    Profile(ProfileEvent),
}

/// Events bracketing a run over several profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEvent {
    Started { profiles: usize },
    Completed(RunReport),
}

/// Events while a profile is processed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProfileEvent {
    /// Processing of the named profile has begun
    Started { name: String },
    /// Validation failed; the profile is skipped
    Invalid { name: String, reason: String },
    /// Scan finished
    FilesFound { name: String, count: usize },
    /// A file reached its destination
    FileMoved {
        from: PathBuf,
        to: PathBuf,
        date: NaiveDate,
        source: DateSource,
    },
    /// A file was left in place before any move was attempted
    FileSkipped { path: PathBuf, reason: String },
    /// A move was attempted and failed; the source is untouched
    MoveFailed { path: PathBuf, reason: String },
    /// Profile finished (or was cancelled)
    Completed(ProfileReport),
}
