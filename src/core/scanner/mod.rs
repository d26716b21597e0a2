//! # Scanner Module
//!
//! Turns a source directory into the list of files a profile will process.
//!
//! ## Rules
//! - Only regular files are candidates; directories never are
//! - Symbolic links are skipped entirely: not listed, not followed
//! - Sub-directories are descended only when the profile is recursive
//! - Extensions are matched exactly; an empty set accepts everything
//! - An unreadable directory contributes nothing and is reported, the scan
//!   carries on
//!
//! ## Example
//! ```rust,ignore
//! use media_organizer::core::scanner::{ExtensionFilter, PathClassifier};
//!
//! let classifier = PathClassifier::new(true, ExtensionFilter::new(["jpg"]));
//! let result = classifier.classify(Path::new("/Users/me/Incoming"));
//! ```

mod filter;
mod walker;

pub use filter::ExtensionFilter;
pub use walker::PathClassifier;

use crate::error::ScanError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A regular, non-symlink file found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    path: PathBuf,
}

impl CandidateFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for CandidateFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Result of a scan operation
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidates in depth-first, name-sorted order
    pub files: Vec<CandidateFile>,
    /// Errors that occurred during scanning (non-fatal)
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files.iter().map(CandidateFile::path)
    }
}
