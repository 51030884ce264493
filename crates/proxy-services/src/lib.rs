//! Per-tool proxy integrations for proxyctl.
//!
//! Each supported tool is a variant of [`ServiceKind`]. Every variant offers the
//! same three operations, dispatched by `match` rather than trait objects:
//!
//! - `apply` writes the proxy settings into the tool's configuration file
//! - `inspect` reads them back
//! - `clear` removes them again
//!
//! Target files are resolved against [`ServicePaths`], which separates the
//! machine-wide root (`/` in production) from the invoking user's home so both
//! can be redirected in tests.
//!
//! Text-based targets (apt, npm, shell environment) are patched with
//! marker-delimited blocks from `proxy-blocks`. Docker's JSON files are merged
//! and git's config is edited through `git2`; all of them take a `.bak` backup
//! before writing.

pub mod address;
pub mod apt;
pub mod docker;
pub mod env;
pub mod error;
pub mod git;
mod managed;
pub mod npm;
pub mod outcome;
pub mod paths;
pub mod registry;
pub mod scope;
pub mod service;

pub use address::{DEFAULT_NO_PROXY, ProxyAddress, ProxySettings, Scheme};
pub use error::{Error, Result};
pub use outcome::{ApplyOutcome, Inspection};
pub use paths::ServicePaths;
pub use registry::{ServiceRegistration, ServiceRegistry};
pub use scope::Scope;
pub use service::ServiceKind;
