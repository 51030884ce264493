//! Static table of supported services.

use crate::error::{Error, Result};
use crate::paths::ServicePaths;
use crate::scope::Scope;
use crate::service::ServiceKind;
use std::path::PathBuf;

/// One row of the service table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRegistration {
    pub kind: ServiceKind,
    pub description: &'static str,
    /// Path under the system root, if the service has a machine-wide file.
    pub system_path: Option<&'static str>,
    /// Path under the home directory, if the service has a per-user file.
    pub user_path: Option<&'static str>,
}

impl ServiceRegistration {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn relative_path(&self, scope: Scope) -> Option<&'static str> {
        match scope {
            Scope::System => self.system_path,
            Scope::User => self.user_path,
        }
    }

    /// Absolute target file for `scope`, or `None` if the scope is unsupported.
    pub fn target(&self, scope: Scope, paths: &ServicePaths) -> Option<PathBuf> {
        self.relative_path(scope)
            .map(|relative| paths.resolve(scope, relative))
    }
}

static BUILTINS: [ServiceRegistration; 5] = [
    ServiceRegistration {
        kind: ServiceKind::Git,
        description: "git http.proxy / https.proxy",
        system_path: Some("etc/gitconfig"),
        user_path: Some(".gitconfig"),
    },
    ServiceRegistration {
        kind: ServiceKind::Docker,
        description: "docker daemon / client proxies",
        system_path: Some("etc/docker/daemon.json"),
        user_path: Some(".docker/config.json"),
    },
    ServiceRegistration {
        kind: ServiceKind::Apt,
        description: "apt Acquire::http(s)::Proxy",
        system_path: Some("etc/apt/apt.conf.d/02proxy.conf"),
        user_path: None,
    },
    ServiceRegistration {
        kind: ServiceKind::Npm,
        description: "npm proxy / https-proxy",
        system_path: Some("etc/npmrc"),
        user_path: Some(".npmrc"),
    },
    ServiceRegistration {
        kind: ServiceKind::Env,
        description: "shell http_proxy / https_proxy / all_proxy",
        system_path: Some("etc/profile.d/proxy.sh"),
        user_path: Some(".bashrc"),
    },
];

/// Lookup and selection over the built-in service table.
///
/// Iteration order is fixed: git, docker, apt, npm, env.
#[derive(Debug, Clone, Copy)]
pub struct ServiceRegistry {
    services: &'static [ServiceRegistration],
}

impl ServiceRegistry {
    pub fn builtin() -> Self {
        Self {
            services: &BUILTINS,
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static ServiceRegistration> {
        self.services.iter().find(|reg| reg.name() == name)
    }

    pub fn by_kind(&self, kind: ServiceKind) -> Option<&'static ServiceRegistration> {
        self.services.iter().find(|reg| reg.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ServiceRegistration> {
        self.services.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.services.iter().map(|reg| reg.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Resolve a list of service names, keeping table order.
    ///
    /// An empty list selects every service. Duplicates are ignored.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&'static ServiceRegistration>> {
        if names.is_empty() {
            return Ok(self.iter().collect());
        }

        for name in names {
            let name = name.as_ref();
            if self.get(name).is_none() {
                return Err(Error::UnknownService {
                    name: name.to_string(),
                    valid: self.names().join(", "),
                });
            }
        }

        Ok(self
            .iter()
            .filter(|reg| names.iter().any(|n| n.as_ref() == reg.name()))
            .collect())
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
