//! # Error Module
//!
//! Error types for the media organizer.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, masks, what went wrong
//! - **Scope failures** - a bad profile stops that profile, a bad file stops that file

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Move error: {0}")]
    Move(#[from] MoveError),

    #[error("Run was cancelled")]
    Cancelled,
}

/// Errors that make a profile unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{role} directory is not set")]
    MissingDirectory { role: DirectoryRole },

    #[error("{role} directory does not exist or is unwritable: {path}: {reason}")]
    DirectoryUnusable {
        role: DirectoryRole,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid target mask '{mask}': {reason}")]
    InvalidTargetMask { mask: String, reason: String },

    #[error("Invalid file name mask '{mask}': {reason}")]
    InvalidFileNameMask { mask: String, reason: String },

    #[error("No scanning options enabled. Please check the profile options.")]
    NoStrategyEnabled,

    #[error("Unknown log level '{value}' (expected debug, info, warn, error or none)")]
    UnknownLogLevel { value: String },
}

/// Which profile directory a [`ConfigError`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    Source,
    Target,
}

impl std::fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryRole::Source => write!(f, "Source"),
            DirectoryRole::Target => write!(f, "Target"),
        }
    }
}

/// Errors that occur while listing a source tree (non-fatal, collected)
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single file was left where it is before any move was attempted
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("{path} is unreadable or not a regular file: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Could not determine date of file: {path}")]
    DateUndetermined { path: PathBuf },
}

/// Errors that occur while relocating a single file
#[derive(Error, Debug)]
pub enum MoveError {
    #[error("Target directory does not exist or is unwritable: {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Could not find an available target to move {path} to (tried {} variations)",
        thousands(*attempts)
    )]
    CollisionsExhausted { path: PathBuf, attempts: usize },

    #[error("Could not move {from} to {to}: {source}")]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Move of {from} to {to} could not be confirmed: {reason}")]
    Unverified {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
}

/// `10000` -> `10,000`
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, OrganizerError>;
