//! apt integration.
//!
//! Writes `Acquire::http::Proxy` and `Acquire::https::Proxy` into a drop-in
//! under `apt.conf.d`. apt has no per-user configuration.

use crate::address::ProxySettings;
use crate::error::Result;
use crate::managed;
use crate::outcome::{ApplyOutcome, Inspection};
use std::path::Path;

pub const MARKER: &str = "// proxyctl: apt proxy";

pub fn render(settings: &ProxySettings) -> String {
    let url = settings.url();
    format!(
        "{MARKER}\nAcquire::http::Proxy \"{url}\";\nAcquire::https::Proxy \"{url}\";\n"
    )
}

pub fn apply(path: &Path, settings: &ProxySettings) -> Result<ApplyOutcome> {
    managed::apply(path, MARKER, &render(settings))
}

pub fn inspect(path: &Path) -> Result<Inspection> {
    managed::inspect(path, MARKER)
}

pub fn clear(path: &Path) -> Result<ApplyOutcome> {
    managed::clear(path, MARKER)
}
