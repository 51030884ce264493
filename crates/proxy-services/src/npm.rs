//! npm integration: `proxy`, `https-proxy` and `noproxy` in an npmrc.

use crate::address::ProxySettings;
use crate::error::Result;
use crate::managed;
use crate::outcome::{ApplyOutcome, Inspection};
use std::path::Path;

pub const MARKER: &str = "# proxyctl: npm proxy";

pub fn render(settings: &ProxySettings) -> String {
    let url = settings.url();
    format!(
        "{MARKER}\nproxy={url}\nhttps-proxy={url}\nnoproxy={}\n",
        settings.no_proxy()
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
