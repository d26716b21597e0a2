//! Directory walking implementation using walkdir.

use super::{filter::ExtensionFilter, CandidateFile, ScanResult};
use crate::error::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the candidate files under a source directory
#[derive(Debug, Clone)]
pub struct PathClassifier {
    recursive: bool,
    filter: ExtensionFilter,
    excluded: Option<PathBuf>,
}

impl PathClassifier {
    pub fn new(recursive: bool, filter: ExtensionFilter) -> Self {
        Self {
            recursive,
            filter,
            excluded: None,
        }
    }

    /// Never descend into `path`.
    ///
    /// Used to keep a target directory nested inside the source from being
    /// scanned again.
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded = Some(path.into());
        self
    }

    pub fn classify(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();

        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let excluded = self.excluded.as_deref();
        let entries = walker
            .into_iter()
            .filter_entry(|entry| Some(entry.path()) != excluded);

        for entry_result in entries {
            match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_symlink() || !file_type.is_file() {
                        continue;
                    }
                    if !self.filter.accepts(entry.path()) {
                        continue;
                    }
                    result.files.push(CandidateFile::new(entry.into_path()));
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());

                    let error = if e.io_error().map(|e| e.kind())
                        == Some(std::io::ErrorKind::PermissionDenied)
                    {
                        ScanError::PermissionDenied { path }
                    } else {
                        ScanError::ReadDirectory {
                            path,
                            source: std::io::Error::other(e.to_string()),
                        }
                    };
                    result.errors.push(error);
                }
            }
        }

        result
    }
}
