//! Per-user defaults for proxyctl.

use proxy_fs::ConfigStore;
use proxy_services::{DEFAULT_NO_PROXY, Scope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Contents of `<config_dir>/proxyctl/config.toml`.
///
/// ```toml
/// address = "127.0.0.1:7890"
/// scope = "user"
/// services = ["git", "npm"]
/// no_proxy = "localhost,127.0.0.1,.corp"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Address used by `set` when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub scope: Scope,
    /// Services to touch when `--only` is absent. Empty means all.
    pub services: Vec<String>,
    pub no_proxy: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            address: None,
            scope: Scope::default(),
            services: Vec::new(),
            no_proxy: DEFAULT_NO_PROXY.to_string(),
        }
    }
}

impl UserConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load_or_default(path)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }
}

/// `<config_dir>/proxyctl/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("proxyctl").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = UserConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.scope, Scope::System);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "scope = \"user\"\n").unwrap();

        let config = UserConfig::load(&path).unwrap();

        assert_eq!(config.scope, Scope::User);
        assert_eq!(config.address, None);
        assert_eq!(config.no_proxy, DEFAULT_NO_PROXY);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("proxyctl").join("config.toml");
        let config = UserConfig {
            address: Some("socks5://h:1080".into()),
            scope: Scope::User,
            services: vec!["git".into()],
            no_proxy: "localhost".into(),
        };

        config.save(&path).unwrap();

        assert_eq!(UserConfig::load(&path).unwrap(), config);
    }
}
