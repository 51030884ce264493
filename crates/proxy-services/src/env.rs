//! Shell environment integration.
//!
//! Exports both the lower-case and upper-case proxy variables, since tools
//! disagree on which spelling they read. System scope writes a
//! `/etc/profile.d` script; user scope patches `~/.bashrc`.

use crate::address::ProxySettings;
use crate::error::Result;
use crate::managed;
use crate::outcome::{ApplyOutcome, Inspection};
use std::path::Path;

pub const MARKER: &str = "# proxyctl: shell proxy";

pub fn render(settings: &ProxySettings) -> String {
    let url = settings.url();
    let vars = [
        ("http_proxy", url.as_str()),
        ("https_proxy", url.as_str()),
        ("all_proxy", url.as_str()),
        ("no_proxy", settings.no_proxy()),
    ];

    let lower = vars.map(|(name, value)| format!("export {name}=\"{value}\"\n"));
    let upper = vars.map(|(name, value)| {
        format!("export {}=\"{value}\"\n", name.to_ascii_uppercase())
    });
    format!("{MARKER}\n{}{}", lower.concat(), upper.concat())
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
