//! Types for the profile module.

use crate::core::date::ExifField;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Organization rules for one source/target directory pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Directory to search for files. Must be set.
    pub source_directory: PathBuf,
    /// Look in all sub-directories of the source as well
    pub search_recursive: bool,
    /// Extensions to accept, matched case-sensitively. Empty accepts all files.
    pub valid_extensions: Vec<String>,
    /// Parent directory to place moved files in. Must be set.
    pub target_directory: PathBuf,
    /// `Y` = 4-digit year, `y` = 2-digit year, `m` = month, `d` = day
    pub target_mask: String,
    /// Replace same-named files in the target instead of adding `_N`
    pub overwrite: bool,
    /// Read the date from EXIF metadata first
    pub scan_exif: bool,
    /// EXIF fields to consult, in order
    pub exif_fields: Vec<ExifField>,
    /// Date patterns searched for in file names. Empty disables the strategy.
    pub file_name_masks: Vec<String>,
    /// Fall back to the modification time when nothing else matched
    pub modified_time: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::new(),
            search_recursive: false,
            valid_extensions: vec!["jpg".to_string(), "jpeg".to_string()],
            target_directory: PathBuf::new(),
            target_mask: "Y/Y-m-d".to_string(),
            overwrite: false,
            scan_exif: true,
            exif_fields: ExifField::DEFAULT_ORDER.to_vec(),
            file_name_masks: vec!["YYYYMMDD".to_string(), "YYYY-MM-DD".to_string()],
            modified_time: false,
        }
    }
}

impl Profile {
    /// Defaults with every `Some` field of `overrides` applied wholesale
    pub fn from_overrides(overrides: ProfileOverrides) -> Self {
        let mut profile = Self::default();
        overrides.apply_to(&mut profile);
        profile
    }

    pub fn new(source_directory: impl Into<PathBuf>, target_directory: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            target_directory: target_directory.into(),
            ..Self::default()
        }
    }
}

/// Caller-supplied changes to the default [`Profile`].
///
/// A set field replaces the default outright; lists are not merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverrides {
    pub source_directory: Option<PathBuf>,
    pub search_recursive: Option<bool>,
    pub valid_extensions: Option<Vec<String>>,
    pub target_directory: Option<PathBuf>,
    pub target_mask: Option<String>,
    pub overwrite: Option<bool>,
    pub scan_exif: Option<bool>,
    pub exif_fields: Option<Vec<ExifField>>,
    pub file_name_masks: Option<Vec<String>>,
    pub modified_time: Option<bool>,
}

impl ProfileOverrides {
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(v) = self.source_directory {
            profile.source_directory = v;
        }
        if let Some(v) = self.search_recursive {
            profile.search_recursive = v;
        }
        if let Some(v) = self.valid_extensions {
            profile.valid_extensions = v;
        }
        if let Some(v) = self.target_directory {
            profile.target_directory = v;
        }
        if let Some(v) = self.target_mask {
            profile.target_mask = v;
        }
        if let Some(v) = self.overwrite {
            profile.overwrite = v;
        }
        if let Some(v) = self.scan_exif {
            profile.scan_exif = v;
        }
        if let Some(v) = self.exif_fields {
            profile.exif_fields = v;
        }
        if let Some(v) = self.file_name_masks {
            profile.file_name_masks = v;
        }
        if let Some(v) = self.modified_time {
            profile.modified_time = v;
        }
    }
}

/// Named profiles, processed in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSet {
    profiles: Vec<(String, Profile)>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, profile: Profile) {
        self.profiles.push((name.into(), profile));
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, name: impl Into<String>, profile: Profile) -> Self {
        self.push(name, profile);
        self
    }

    /// Add a profile built from defaults plus `overrides`
    pub fn with_overrides(self, name: impl Into<String>, overrides: ProfileOverrides) -> Self {
        self.with(name, Profile::from_overrides(overrides))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> + '_ {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }
}

impl<N: Into<String>> FromIterator<(N, Profile)> for ProfileSet {
    fn from_iter<I: IntoIterator<Item = (N, Profile)>>(iter: I) -> Self {
        Self {
            profiles: iter
                .into_iter()
                .map(|(name, profile)| (name.into(), profile))
                .collect(),
        }
    }
}
