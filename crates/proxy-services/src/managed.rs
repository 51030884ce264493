//! Shared plumbing for services stored as a marker block in a text file.

use crate::error::Result;
use crate::outcome::{ApplyOutcome, Inspection};
use proxy_blocks::{Extraction, Removal};
use std::path::Path;

pub(crate) fn apply(path: &Path, marker: &str, block: &str) -> Result<ApplyOutcome> {
    Ok(proxy_blocks::upsert(path, marker, block)?.into())
}

pub(crate) fn inspect(path: &Path, marker: &str) -> Result<Inspection> {
    let path = path.to_path_buf();
    Ok(match proxy_blocks::extract(&path, marker)? {
        Extraction::Found(block) => Inspection::Found {
            path,
            text: String::from_utf8_lossy(&block).into_owned(),
        },
        Extraction::FileMissing => Inspection::FileMissing { path },
        Extraction::MarkerMissing => Inspection::NotConfigured { path },
    })
}

pub(crate) fn clear(path: &Path, marker: &str) -> Result<ApplyOutcome> {
    Ok(match proxy_blocks::remove(path, marker)? {
        Removal::Removed(report) => report.into(),
        Removal::FileMissing | Removal::MarkerMissing => ApplyOutcome::NothingToClear {
            path: path.to_path_buf(),
        },
    })
}
