//! Destination file names and collision suffixes.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Longest file name most filesystems accept, in bytes
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Room kept free for `_` plus a counter of up to four digits, and the `.`
/// before the extension
pub const SUFFIX_RESERVE: usize = 6;

/// Counter suffixes tried before giving up (`_0` through `_9999`)
pub const MAX_COLLISION_ATTEMPTS: usize = 10_000;

/// A file name split into a (possibly truncated) stem and its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    stem: OsString,
    extension: Option<OsString>,
}

impl TargetName {
    pub fn from_path(path: &Path) -> Self {
        let stem = path.file_stem().unwrap_or_else(|| OsStr::new("file"));
        let extension = path.extension().map(OsStr::to_os_string);

        let ext_len = extension.as_ref().map_or(0, |e| e.len());
        let limit = MAX_FILE_NAME_BYTES.saturating_sub(ext_len + SUFFIX_RESERVE);

        Self {
            stem: truncate_stem(stem, limit),
            extension,
        }
    }

    /// The name with no collision suffix
    pub fn plain(&self) -> OsString {
        self.compose(None)
    }

    /// The name with `_{counter}` appended to the stem
    pub fn numbered(&self, counter: usize) -> OsString {
        self.compose(Some(counter))
    }

    fn compose(&self, counter: Option<usize>) -> OsString {
        let mut name = self.stem.clone();
        if let Some(counter) = counter {
            name.push(format!("_{}", counter));
        }
        if let Some(ref extension) = self.extension {
            name.push(".");
            name.push(extension);
        }
        name
    }
}

fn truncate_stem(stem: &OsStr, limit: usize) -> OsString {
    if stem.len() <= limit {
        return stem.to_os_string();
    }

    let lossy = stem.to_string_lossy();
    let mut end = limit.min(lossy.len());
    while !lossy.is_char_boundary(end) {
        end -= 1;
    }
    OsString::from(&lossy[..end])
}
