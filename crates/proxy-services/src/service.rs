//! The closed set of supported services.

use crate::address::ProxySettings;
use crate::error::{Error, Result};
use crate::outcome::{ApplyOutcome, Inspection};
use crate::paths::ServicePaths;
use crate::registry::{ServiceRegistration, ServiceRegistry};
use crate::scope::Scope;
use crate::{apt, docker, env, git, npm};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A tool whose proxy settings proxyctl manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Git,
    Docker,
    Apt,
    Npm,
    Env,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Git,
        ServiceKind::Docker,
        ServiceKind::Apt,
        ServiceKind::Npm,
        ServiceKind::Env,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Docker => "docker",
            Self::Apt => "apt",
            Self::Npm => "npm",
            Self::Env => "env",
        }
    }

    fn registration(&self) -> Option<&'static ServiceRegistration> {
        ServiceRegistry::builtin().by_kind(*self)
    }

    /// Target file for `scope`, or `None` if this service does not support it.
    pub fn target(&self, scope: Scope, paths: &ServicePaths) -> Option<PathBuf> {
        self.registration()
            .and_then(|reg| reg.target(scope, paths))
    }

    /// Write the proxy settings into this service's configuration.
    pub fn apply(
        &self,
        settings: &ProxySettings,
        scope: Scope,
        paths: &ServicePaths,
    ) -> Result<ApplyOutcome> {
        let Some(path) = self.target(scope, paths) else {
            return Ok(ApplyOutcome::Unsupported);
        };
        tracing::debug!(service = self.name(), %scope, path = %path.display(), url = %settings.url(), "applying proxy");

        match self {
            Self::Git => git::apply(&path, settings),
            Self::Docker => docker::apply(&path, scope, settings),
            Self::Apt => apt::apply(&path, settings),
            Self::Npm => npm::apply(&path, settings),
            Self::Env => env::apply(&path, settings),
        }
    }

    /// Read back the proxy settings this service currently has.
    pub fn inspect(&self, scope: Scope, paths: &ServicePaths) -> Result<Inspection> {
        let Some(path) = self.target(scope, paths) else {
            return Ok(Inspection::Unsupported);
        };

        match self {
            Self::Git => git::inspect(&path),
            Self::Docker => docker::inspect(&path, scope),
            Self::Apt => apt::inspect(&path),
            Self::Npm => npm::inspect(&path),
            Self::Env => env::inspect(&path),
        }
    }

    /// Remove the proxy settings written by [`ServiceKind::apply`].
    pub fn clear(&self, scope: Scope, paths: &ServicePaths) -> Result<ApplyOutcome> {
        let Some(path) = self.target(scope, paths) else {
            return Ok(ApplyOutcome::Unsupported);
        };
        tracing::debug!(service = self.name(), %scope, path = %path.display(), "clearing proxy");

        match self {
            Self::Git => git::clear(&path),
            Self::Docker => docker::clear(&path, scope),
            Self::Apt => apt::clear(&path),
            Self::Npm => npm::clear(&path),
            Self::Env => env::clear(&path),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownService {
                name: s.to_string(),
                valid: ServiceRegistry::builtin().names().join(", "),
            })
    }
}
