//! Error types for proxy-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The existing file could not be read. Nothing was modified.
    #[error("Failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: proxy_fs::Error,
    },

    /// The backup copy could not be written. The original was not modified.
    #[error("Failed to back up {path}: {source}")]
    BackupFailure {
        path: PathBuf,
        #[source]
        source: proxy_fs::Error,
    },

    /// The new content could not be persisted. `restore` carries the reason a
    /// restore from backup also failed, when it did.
    #[error("Failed to write {path}: {source}{}", restore_note(.restore))]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: proxy_fs::Error,
        restore: Option<String>,
    },

    #[error("Block marker must not be empty")]
    EmptyMarker,
}

fn restore_note(restore: &Option<String>) -> String {
    match restore {
        Some(reason) => format!(" (restore from backup failed: {reason})"),
        None => String::new(),
    }
}
