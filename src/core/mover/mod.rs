//! # Mover Module
//!
//! Relocates a dated file into the target tree without clobbering
//! anything unless the profile asks for it.
//!
//! ## Steps
//! 1. Render the target mask for the date and create that directory
//! 2. Truncate the stem so a `_NNNN` suffix always fits in 255 bytes
//! 3. Pick the destination: the plain name, or `_0`, `_1`, ... on collision
//! 4. Rename (or copy + verify + delete across filesystems)
//! 5. Confirm the source is gone and the destination holds the same size

mod mask;
mod naming;
mod transfer;

pub use mask::TargetMask;
pub use naming::{TargetName, MAX_COLLISION_ATTEMPTS, MAX_FILE_NAME_BYTES, SUFFIX_RESERVE};

use crate::error::MoveError;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Final destination on success, or why the file stayed put
pub type MoveOutcome = Result<PathBuf, MoveError>;

/// Moves files under a target directory according to a mask
pub struct CollisionSafeMover<'a> {
    target_directory: &'a Path,
    mask: &'a TargetMask,
    overwrite: bool,
}

impl<'a> CollisionSafeMover<'a> {
    pub fn new(target_directory: &'a Path, mask: &'a TargetMask, overwrite: bool) -> Self {
        Self {
            target_directory,
            mask,
            overwrite,
        }
    }

    /// Directory a file dated `date` belongs in
    pub fn destination_directory(&self, date: NaiveDate) -> PathBuf {
        self.target_directory.join(self.mask.render(date))
    }

    /// Move `source` into the directory for `date`.
    ///
    /// A file that already sits at its computed destination is left alone
    /// and reported as moved there.
    pub fn relocate(&self, source: &Path, date: NaiveDate) -> MoveOutcome {
        let directory = self.destination_directory(date);
        fs::create_dir_all(&directory).map_err(|e| MoveError::CreateDirectory {
            path: directory.clone(),
            source: e,
        })?;

        let name = TargetName::from_path(source);
        let destination = self.choose_destination(source, &directory, &name)?;
        if destination == source {
            return Ok(destination);
        }

        let size = fs::metadata(source)
            .map(|m| m.len())
            .map_err(|e| MoveError::Transfer {
                from: source.to_path_buf(),
                to: destination.clone(),
                source: e,
            })?;

        transfer::transfer(source, &destination)?;
        verify(source, &destination, size)?;
        Ok(destination)
    }

    fn choose_destination(
        &self,
        source: &Path,
        directory: &Path,
        name: &TargetName,
    ) -> Result<PathBuf, MoveError> {
        let plain = directory.join(name.plain());
        if plain == source || self.overwrite || !occupied(&plain) {
            return Ok(plain);
        }

        (0..MAX_COLLISION_ATTEMPTS)
            .map(|counter| directory.join(name.numbered(counter)))
            .find(|candidate| !occupied(candidate))
            .ok_or_else(|| MoveError::CollisionsExhausted {
                path: source.to_path_buf(),
                attempts: MAX_COLLISION_ATTEMPTS,
            })
    }
}

/// Anything at `path`, including a dangling symlink, blocks the name
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn verify(source: &Path, destination: &Path, expected_size: u64) -> Result<(), MoveError> {
    let unverified = |reason: String| MoveError::Unverified {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        reason,
    };

    if occupied(source) {
        return Err(unverified("source still exists".to_string()));
    }
    match fs::metadata(destination) {
        Ok(meta) if meta.is_file() && meta.len() == expected_size => Ok(()),
        Ok(meta) => Err(unverified(format!(
            "destination holds {} bytes, expected {}",
            meta.len(),
            expected_size
        ))),
        Err(e) => Err(unverified(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 7, 5).unwrap()
    }

    fn write(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn moves_into_rendered_hierarchy() {
        let src = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let mask = TargetMask::parse("Y/Y-m-d").unwrap();
        let source = src.path().join("photo.jpg");
        write(&source, b"test content");

        let mover = CollisionSafeMover::new(target.path(), &mask, false);
        let destination = mover.relocate(&source, date()).unwrap();

        assert_eq!(destination, target.path().join("2016/2016-07-05/photo.jpg"));
        assert!(!source.exists());
        assert_eq!(fs::read(&destination).unwrap(), b"test content");
    }

    #[test]
    fn collisions_get_counter_suffix_starting_at_zero() {
        let src = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let mask = TargetMask::parse("Y-m-d").unwrap();
        let existing_dir = target.path().join("2016-07-05");
        write(&existing_dir.join("photo.jpg"), b"first");
        write(&existing_dir.join("photo_0.jpg"), b"second");
        let source = src.path().join("photo.jpg");
        write(&source, b"third");

        let mover = CollisionSafeMover::new(target.path(), &mask, false);
        let destination = mover.relocate(&source, date()).unwrap();

        assert_eq!(destination, existing_dir.join("photo_1.jpg"));
        assert_eq!(fs::read(existing_dir.join("photo.jpg")).unwrap(), b"first");
        assert_eq!(fs::read(existing_dir.join("photo_0.jpg")).unwrap(), b"second");
    }

    #[test]
    fn overwrite_replaces_existing_file() {
        let src = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let mask = TargetMask::parse("Y").unwrap();
        write(&target.path().join("2016/photo.jpg"), b"old");
        let source = src.path().join("photo.jpg");
        write(&source, b"new content");

        let mover = CollisionSafeMover::new(target.path(), &mask, true);
        let destination = mover.relocate(&source, date()).unwrap();

        assert_eq!(destination, target.path().join("2016/photo.jpg"));
        assert_eq!(fs::read(&destination).unwrap(), b"new content");
        assert!(!target.path().join("2016/photo_0.jpg").exists());
    }

    #[test]
    fn exhausted_counters_leave_source_in_place() {
        let src = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let mask = TargetMask::parse("Y").unwrap();
        let dir = target.path().join("2016");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("x"), b"").unwrap();
        for counter in 0..MAX_COLLISION_ATTEMPTS {
            fs::write(dir.join(format!("x_{}", counter)), b"").unwrap();
        }
        let source = src.path().join("x");
        write(&source, b"keep");

        let mover = CollisionSafeMover::new(target.path(), &mask, false);
        let err = mover.relocate(&source, date()).unwrap_err();

        assert!(matches!(
            err,
            MoveError::CollisionsExhausted { attempts: MAX_COLLISION_ATTEMPTS, .. }
        ));
        assert_eq!(fs::read(&source).unwrap(), b"keep");
    }

    #[test]
    fn uncreatable_directory_is_reported() {
        let src = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        // A file where the year directory should go
        fs::write(target.path().join("2016"), b"").unwrap();
        let mask = TargetMask::parse("Y/m").unwrap();
        let source = src.path().join("photo.jpg");
        write(&source, b"keep");

        let mover = CollisionSafeMover::new(target.path(), &mask, false);
        let err = mover.relocate(&source, date()).unwrap_err();

        assert!(matches!(err, MoveError::CreateDirectory { .. }));
        assert!(source.exists());
    }

    #[test]
    fn file_already_at_destination_is_left_alone() {
        let target = TempDir::new().unwrap();
        let mask = TargetMask::parse("Y").unwrap();
        let source = target.path().join("2016/photo.jpg");
        write(&source, b"settled");

        let mover = CollisionSafeMover::new(target.path(), &mask, false);
        let destination = mover.relocate(&source, date()).unwrap();

        assert_eq!(destination, source);
        assert_eq!(fs::read(&source).unwrap(), b"settled");
        assert!(!target.path().join("2016/photo_0.jpg").exists());
    }
}
