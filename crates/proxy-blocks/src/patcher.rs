//! File-level block patching with backup and restore.
//!
//! Every mutation follows the same protocol:
//!
//! 1. Read the current content (a missing file is not an error).
//! 2. If the file existed, copy its content to `<path>.bak`, overwriting any
//!    previous backup.
//! 3. Write the new content atomically.
//! 4. If the write fails, restore from the backup just taken and report
//!    [`Error::WriteFailure`] regardless of whether the restore succeeded.
//!
//! [`Snapshot`] exposes the protocol to callers that compute content
//! themselves (structured formats) or mutate the file through another library.

use crate::error::{Error, Result};
use crate::parser::extract_block;
use crate::writer::{remove_block, upsert_block};
use proxy_fs::{backup, io};
use std::path::{Path, PathBuf};

/// What a successful mutation touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// The file that was written.
    pub path: PathBuf,
    /// The backup taken before writing; `None` if the file did not exist.
    pub backup: Option<PathBuf>,
}

/// Result of [`extract`]. None of the variants is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The block bytes, verbatim, including the marker.
    Found(Vec<u8>),
    FileMissing,
    MarkerMissing,
}

/// Result of [`remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Removed(PatchReport),
    FileMissing,
    MarkerMissing,
}

/// The state of a file captured before mutating it.
#[derive(Debug)]
pub struct Snapshot {
    path: PathBuf,
    content: Option<Vec<u8>>,
    backup: Option<PathBuf>,
}

impl Snapshot {
    /// Read the current content of `path`. A missing file yields an empty snapshot.
    pub fn read(path: &Path) -> Result<Self> {
        let content = io::read_optional_bytes(path).map_err(|source| Error::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
            backup: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content at read time, or `None` if the file did not exist.
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Write `<path>.bak` from the captured content.
    ///
    /// Does nothing if the file did not exist or a backup was already taken.
    pub fn back_up(&mut self) -> Result<()> {
        if self.backup.is_some() {
            return Ok(());
        }
        if let Some(content) = &self.content {
            let backup = backup::create_backup(&self.path, content).map_err(|source| {
                Error::BackupFailure {
                    path: self.path.clone(),
                    source,
                }
            })?;
            self.backup = Some(backup);
        }
        Ok(())
    }

    /// Back up (if not done yet) and atomically write `new_content`.
    pub fn commit(mut self, new_content: &[u8]) -> Result<PatchReport> {
        self.back_up()?;

        if let Err(source) = io::write_atomic(&self.path, new_content) {
            let restore = self.restore();
            return Err(Error::WriteFailure {
                path: self.path,
                source,
                restore,
            });
        }

        tracing::debug!(path = %self.path.display(), bytes = new_content.len(), "file written");
        Ok(self.report())
    }

    /// Best-effort rollback after a failed write.
    ///
    /// Copies the backup back if one was taken. If the file did not exist before,
    /// anything left at the path is removed. Returns the reason the rollback
    /// failed, if it did; the failure is also logged.
    pub fn restore(&self) -> Option<String> {
        let outcome = match (&self.backup, &self.content) {
            (Some(_), _) => backup::restore_backup(&self.path).map_err(|e| e.to_string()),
            (None, None) if self.path.is_file() => {
                std::fs::remove_file(&self.path).map_err(|e| e.to_string())
            }
            _ => Ok(()),
        };

        match outcome {
            Ok(()) => {
                tracing::warn!(path = %self.path.display(), "write failed, previous content restored");
                None
            }
            Err(reason) => {
                tracing::error!(path = %self.path.display(), %reason, "write failed and restore failed");
                Some(reason)
            }
        }
    }

    pub fn report(&self) -> PatchReport {
        PatchReport {
            path: self.path.clone(),
            backup: self.backup.clone(),
        }
    }
}

fn check_marker(marker: &str) -> Result<()> {
    if marker.is_empty() {
        return Err(Error::EmptyMarker);
    }
    Ok(())
}

/// Insert or replace the block starting at `marker` in the file at `path`.
///
/// Creates the file (and its parent directories) if it does not exist. Calling
/// this twice with the same arguments leaves the file byte-identical.
pub fn upsert(path: &Path, marker: &str, block_text: &str) -> Result<PatchReport> {
    check_marker(marker)?;

    let snapshot = Snapshot::read(path)?;
    let new_content = upsert_block(snapshot.content().unwrap_or_default(), marker, block_text);
    snapshot.commit(&new_content)
}

/// Return the block starting at `marker`, distinguishing a missing file from a
/// missing marker. Never modifies anything.
pub fn extract(path: &Path, marker: &str) -> Result<Extraction> {
    check_marker(marker)?;

    let snapshot = Snapshot::read(path)?;
    let Some(content) = snapshot.content() else {
        return Ok(Extraction::FileMissing);
    };

    Ok(match extract_block(content, marker) {
        Some(block) => Extraction::Found(block.to_vec()),
        None => Extraction::MarkerMissing,
    })
}

/// Delete the block starting at `marker`.
///
/// The file is only backed up and rewritten when the marker is present.
pub fn remove(path: &Path, marker: &str) -> Result<Removal> {
    check_marker(marker)?;

    let snapshot = Snapshot::read(path)?;
    let Some(content) = snapshot.content() else {
        return Ok(Removal::FileMissing);
    };
    let Some(new_content) = remove_block(content, marker) else {
        return Ok(Removal::MarkerMissing);
    };

    snapshot.commit(&new_content).map(Removal::Removed)
}
