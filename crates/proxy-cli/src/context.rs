//! Invocation context
//!
//! Resolves the roots, user config and service selection a command runs
//! against, from the global flags.

use proxy_services::{Scope, ServicePaths, ServiceRegistration, ServiceRegistry};
use std::path::PathBuf;

use crate::config::{self, UserConfig};
use crate::error::{CliError, Result};

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: ServicePaths,
    pub config: UserConfig,
    /// Where the user config lives, if anywhere.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Build a context from the `--root`, `--home` and `--config` flags.
    pub fn new(
        root: Option<PathBuf>,
        home: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        let root = root.unwrap_or_else(|| PathBuf::from("/"));
        let home = match home {
            Some(home) => home,
            None => dirs::home_dir().ok_or(proxy_services::Error::HomeNotFound)?,
        };

        let config_path = config_path.or_else(config::default_path);
        let config = match &config_path {
            Some(path) => UserConfig::load(path)?,
            None => UserConfig::default(),
        };

        tracing::debug!(
            root = %root.display(),
            home = %home.display(),
            config = ?config_path,
            "resolved context"
        );

        Ok(Self {
            paths: ServicePaths::new(root, home),
            config,
            config_path,
        })
    }

    /// The `--scope` flag, falling back to the configured scope.
    pub fn scope(&self, flag: Option<Scope>) -> Scope {
        flag.unwrap_or(self.config.scope)
    }

    /// The `--only` services, falling back to the configured list.
    pub fn services(&self, only: &[String]) -> Result<Vec<&'static ServiceRegistration>> {
        let names = if only.is_empty() {
            self.config.services.as_slice()
        } else {
            only
        };
        Ok(ServiceRegistry::builtin().select(names)?)
    }

    /// Refuse to modify machine-wide files without superuser rights.
    ///
    /// Only applies when the system root is the real `/`.
    pub fn ensure_can_modify(&self, scope: Scope) -> Result<()> {
        if scope == Scope::System && self.paths.is_real_root() && !is_superuser() {
            return Err(CliError::user(
                "System scope requires root privileges. Re-run with sudo or pass --scope user.",
            ));
        }
        Ok(())
    }
}

#[cfg(unix)]
fn is_superuser() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn is_superuser() -> bool {
    true
}
