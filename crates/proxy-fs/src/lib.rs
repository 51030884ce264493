//! Filesystem primitives for proxyctl
//!
//! Provides atomic writes, tolerant reads, one-generation backups and a
//! format-agnostic config store.

pub mod backup;
pub mod config;
pub mod error;
pub mod io;

pub use backup::{backup_path, create_backup, restore_backup};
pub use config::ConfigStore;
pub use error::{Error, Result};
