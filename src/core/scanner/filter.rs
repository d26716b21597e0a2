//! Extension filtering for the classifier.

use std::collections::HashSet;
use std::path::Path;

/// Accepts files whose extension is in the set.
///
/// Matching is exact and case-sensitive (`JPG` is not `jpg`). An empty set
/// accepts every file, including files with no extension.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    extensions: HashSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter that accepts everything
    pub fn any() -> Self {
        Self::default()
    }

    pub fn accepts_all(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.accepts_all() {
            return true;
        }

        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.contains(e))
            .unwrap_or(false)
    }
}
