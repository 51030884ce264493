//! Per-target results of service operations.

use proxy_blocks::PatchReport;
use std::path::{Path, PathBuf};

/// Result of applying or clearing proxy settings for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The file was written. `backup` is set when it existed beforehand.
    Written {
        path: PathBuf,
        backup: Option<PathBuf>,
    },
    /// Clearing found no settings to remove; nothing was written.
    NothingToClear { path: PathBuf },
    /// The service has no configuration file for the requested scope.
    Unsupported,
}

impl ApplyOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written { path, .. } | Self::NothingToClear { path } => Some(path),
            Self::Unsupported => None,
        }
    }
}

impl From<PatchReport> for ApplyOutcome {
    fn from(report: PatchReport) -> Self {
        Self::Written {
            path: report.path,
            backup: report.backup,
        }
    }
}

/// Result of reading proxy settings back for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// Settings are present; `text` is what was found.
    Found { path: PathBuf, text: String },
    /// The configuration file does not exist.
    FileMissing { path: PathBuf },
    /// The file exists but holds no proxy settings.
    NotConfigured { path: PathBuf },
    /// The service has no configuration file for the requested scope.
    Unsupported,
}

impl Inspection {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
