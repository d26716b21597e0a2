//! Turning a [`Profile`] into something the runner can act on.

use super::types::Profile;
use crate::core::date::{DateStrategies, FileNameMask};
use crate::core::mover::TargetMask;
use crate::core::scanner::{ExtensionFilter, PathClassifier};
use crate::error::{ConfigError, DirectoryRole};
use std::fs;
use std::path::{Path, PathBuf};

/// A profile whose directories exist and are writable and whose masks
/// compiled. Directories are canonical absolute paths.
#[derive(Debug, Clone)]
pub struct ValidatedProfile {
    pub source_directory: PathBuf,
    pub target_directory: PathBuf,
    pub search_recursive: bool,
    pub extensions: ExtensionFilter,
    pub target_mask: TargetMask,
    pub overwrite: bool,
    pub strategies: DateStrategies,
}

impl ValidatedProfile {
    /// Classifier for this profile's source tree.
    ///
    /// A target nested inside the source is excluded from recursive scans.
    pub fn classifier(&self) -> PathClassifier {
        let classifier = PathClassifier::new(self.search_recursive, self.extensions.clone());
        if self.target_directory != self.source_directory
            && self.target_directory.starts_with(&self.source_directory)
        {
            classifier.excluding(self.target_directory.clone())
        } else {
            classifier
        }
    }
}

/// Check a profile and compile its masks.
///
/// Missing source and target directories are created. Checks run in order:
/// source directory, target directory, target mask, file name masks,
/// enabled strategies.
pub fn validate(profile: &Profile) -> Result<ValidatedProfile, ConfigError> {
    let source_directory = usable_directory(&profile.source_directory, DirectoryRole::Source)?;
    let target_directory = usable_directory(&profile.target_directory, DirectoryRole::Target)?;

    let target_mask = TargetMask::parse(&profile.target_mask)?;

    let file_name_masks = profile
        .file_name_masks
        .iter()
        .map(|mask| FileNameMask::parse(mask))
        .collect::<Result<Vec<_>, _>>()?;

    let exif_fields = if profile.scan_exif {
        profile.exif_fields.clone()
    } else {
        Vec::new()
    };

    let strategies = DateStrategies {
        exif_fields,
        file_name_masks,
        modified_time: profile.modified_time,
    };
    if !strategies.any_enabled() {
        return Err(ConfigError::NoStrategyEnabled);
    }

    Ok(ValidatedProfile {
        source_directory,
        target_directory,
        search_recursive: profile.search_recursive,
        extensions: ExtensionFilter::new(profile.valid_extensions.iter().cloned()),
        target_mask,
        overwrite: profile.overwrite,
        strategies,
    })
}

/// Make sure `path` is an existing, writable directory, creating it if
/// needed, and return its canonical form.
fn usable_directory(path: &Path, role: DirectoryRole) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingDirectory { role });
    }

    let unusable = |reason: String| ConfigError::DirectoryUnusable {
        role,
        path: path.to_path_buf(),
        reason,
    };

    if fs::symlink_metadata(path).is_err() {
        fs::create_dir_all(path).map_err(|e| unusable(e.to_string()))?;
    }
    if !path.is_dir() {
        return Err(unusable("not a directory".to_string()));
    }

    // Writable means we can actually create a file in it
    tempfile::Builder::new()
        .prefix(".media-organizer-probe-")
        .tempfile_in(path)
        .map_err(|e| unusable(format!("not writable: {}", e)))?;

    fs::canonicalize(path).map_err(|e| unusable(e.to_string()))
}
