//! Format-agnostic configuration loading and saving

use crate::{Error, Result, io};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Config formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension (`.toml`, `.json`, `.yaml`,
/// `.yml`) and handles serialization transparently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = Format::detect(path)?;
        let content = io::read_text(path)?;
        Self::parse(path, format, &content)
    }

    /// Load configuration, falling back to `T::default()` when the file is absent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        let format = Format::detect(path)?;
        match io::read_optional(path)? {
            Some(content) => Self::parse(path, format, &content),
            None => {
                tracing::debug!(path = %path.display(), "config not found, using defaults");
                Ok(T::default())
            }
        }
    }

    /// Save configuration to a file atomically.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let format = Format::detect(path)?;
        let serialize_err = |message: String| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: format.label().into(),
            message,
        };

        let content = match format {
            Format::Toml => toml::to_string_pretty(value).map_err(|e| serialize_err(e.to_string()))?,
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_err(e.to_string()))?
            }
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_err(e.to_string()))?,
        };

        io::write_text(path, &content)
    }

    fn parse<T: DeserializeOwned>(path: &Path, format: Format, content: &str) -> Result<T> {
        let parse_err = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.label().into(),
            message,
        };

        match format {
            Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string())),
        }
    }
}
