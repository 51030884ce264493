//! Resolution of target configuration paths.

use crate::error::{Error, Result};
use crate::scope::Scope;
use std::path::{Path, PathBuf};

/// The two roots every target path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePaths {
    system_root: PathBuf,
    home: PathBuf,
}

impl ServicePaths {
    pub fn new(system_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            system_root: system_root.into(),
            home: home.into(),
        }
    }

    /// `/` as the system root and the invoking user's home directory.
    pub fn detect() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::new("/", home))
    }

    pub fn system_root(&self) -> &Path {
        &self.system_root
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Whether the system root is the real filesystem root.
    pub fn is_real_root(&self) -> bool {
        self.system_root == Path::new("/")
    }

    /// Join a path relative to the root for `scope`.
    pub fn resolve(&self, scope: Scope, relative: &str) -> PathBuf {
        let base = match scope {
            Scope::System => &self.system_root,
            Scope::User => &self.home,
        };
        let path = base.join(relative);
        tracing::trace!(%scope, path = %path.display(), "resolved target path");
        path
    }
}
