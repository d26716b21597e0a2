//! Moving bytes from one path to another.

use crate::error::MoveError;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Rename `source` to `destination`, falling back to copy + verify + delete
/// when the two paths live on different filesystems.
///
/// The source is only removed once the copy is confirmed complete.
pub(crate) fn transfer(source: &Path, destination: &Path) -> Result<(), MoveError> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_then_remove(source, destination)
        }
        Err(e) => Err(transfer_error(source, destination, e)),
    }
}

pub(crate) fn copy_then_remove(source: &Path, destination: &Path) -> Result<(), MoveError> {
    let source_meta = fs::metadata(source).map_err(|e| transfer_error(source, destination, e))?;
    let preexisting = fs::symlink_metadata(destination).is_ok();
    if let Err(e) = fs::copy(source, destination) {
        // Never leave a partial copy under a fresh name
        if !preexisting {
            let _ = fs::remove_file(destination);
        }
        return Err(transfer_error(source, destination, e));
    }

    // Verify destination size matches source before deleting
    let dest_size = fs::metadata(destination)
        .map(|m| m.len())
        .map_err(|e| transfer_error(source, destination, e))?;
    if dest_size != source_meta.len() {
        let _ = fs::remove_file(destination);
        return Err(MoveError::Unverified {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            reason: format!(
                "copy verification failed: source {} bytes, destination {} bytes",
                source_meta.len(),
                dest_size
            ),
        });
    }

    // Carry the modification time over
    if let Ok(modified) = source_meta.modified() {
        if let Ok(file) = File::options().write(true).open(destination) {
            let _ = file.set_modified(modified);
        }
    }

    if let Err(e) = fs::remove_file(source) {
        // Leave exactly one copy behind: the original
        let _ = fs::remove_file(destination);
        return Err(transfer_error(source, destination, e));
    }

    Ok(())
}

fn transfer_error(source: &Path, destination: &Path, source_err: io::Error) -> MoveError {
    MoveError::Transfer {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: source_err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn rename_moves_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("b.jpg");
        fs::write(&source, b"test content").unwrap();

        transfer(&source, &destination).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read(&destination).unwrap(), b"test content");
    }

    #[test]
    fn copy_fallback_preserves_content_and_mtime() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let source = src_dir.path().join("a.jpg");
        let destination = dest_dir.path().join("a.jpg");
        fs::write(&source, b"test content").unwrap();
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_467_720_000);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        copy_then_remove(&source, &destination).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read(&destination).unwrap(), b"test content");
        assert_eq!(fs::metadata(&destination).unwrap().modified().unwrap(), mtime);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_copy_leaves_no_partial_file() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("IMG_20160705.jpg");

        // Opens fine but fails on read, after the destination was created
        let result = copy_then_remove(Path::new("/proc/self/mem"), &destination);

        assert!(matches!(result, Err(MoveError::Transfer { .. })));
        assert!(!destination.exists());
    }

    #[test]
    fn missing_source_is_reported_and_nothing_created() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("gone.jpg");
        let destination = dir.path().join("b.jpg");

        let err = transfer(&source, &destination).unwrap_err();

        assert!(matches!(err, MoveError::Transfer { .. }));
        assert!(!destination.exists());
    }

    #[test]
    fn copy_into_missing_directory_keeps_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.jpg");
        let destination = dir.path().join("no/such/dir/a.jpg");
        fs::write(&source, b"keep me").unwrap();

        let err = copy_then_remove(&source, &destination).unwrap_err();

        assert!(matches!(err, MoveError::Transfer { .. }));
        assert_eq!(fs::read(&source).unwrap(), b"keep me");
    }
}
