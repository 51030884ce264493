//! One-generation `.bak` backups
//!
//! A backup lives next to its file as `<path>.bak`. Each new backup overwrites
//! the previous one; there is no history chain.

use crate::{Error, Result, io};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the full file name of a backed-up file.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Returns `<path>.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Write `content` to the backup slot of `path`, replacing any previous backup.
pub fn create_backup(path: &Path, content: &[u8]) -> Result<PathBuf> {
    let backup = backup_path(path);
    io::write_atomic(&backup, content)?;
    tracing::debug!(path = %path.display(), backup = %backup.display(), "backup written");
    Ok(backup)
}

/// Copy the backup of `path` back over `path`.
///
/// Uses a plain copy rather than an atomic write: this runs after the atomic
/// path has already failed once.
pub fn restore_backup(path: &Path) -> Result<()> {
    let backup = backup_path(path);
    fs::copy(&backup, path).map_err(|e| Error::io(&backup, e))?;
    tracing::debug!(path = %path.display(), "restored from backup");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/etc/docker/daemon.json")),
            PathBuf::from("/etc/docker/daemon.json.bak")
        );
        assert_eq!(
            backup_path(Path::new("/home/u/.npmrc")),
            PathBuf::from("/home/u/.npmrc.bak")
        );
    }

    #[test]
    fn second_backup_overwrites_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg");

        create_backup(&path, b"first").unwrap();
        let backup = create_backup(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(backup).unwrap(), "second");
    }

    #[test]
    fn restore_copies_backup_over_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg");
        fs::write(&path, "broken").unwrap();
        create_backup(&path, b"good").unwrap();

        restore_backup(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "good");
    }

    #[test]
    fn restore_without_backup_fails() {
        let dir = TempDir::new().unwrap();
        assert!(restore_backup(&dir.path().join("cfg")).is_err());
    }
}
