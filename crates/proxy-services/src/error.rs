//! Error types for proxy-services

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Block(#[from] proxy_blocks::Error),

    #[error("Git config error at {path}: {source}")]
    Git {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {path}")]
    NotAnObject { path: PathBuf },

    #[error("Invalid proxy address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("Invalid no-proxy list '{value}': {reason}")]
    InvalidNoProxy { value: String, reason: String },

    #[error("Unknown service '{name}'. Valid: {valid}")]
    UnknownService { name: String, valid: String },

    #[error("Unknown scope '{0}'. Valid: system, user")]
    UnknownScope(String),

    #[error("Could not determine the home directory")]
    HomeNotFound,
}

impl Error {
    pub(crate) fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
