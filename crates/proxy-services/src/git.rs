//! git integration.
//!
//! Edits `http.proxy` and `https.proxy` through `git2` on a single config file
//! (`/etc/gitconfig` or `~/.gitconfig`), so the rest of the file keeps git's own
//! formatting. The file is backed up before every change and restored if git2
//! fails part-way.

use crate::address::ProxySettings;
use crate::error::{Error, Result};
use crate::outcome::{ApplyOutcome, Inspection};
use git2::{Config, ErrorCode};
use proxy_blocks::Snapshot;
use std::path::Path;

pub const HTTP_KEY: &str = "http.proxy";
pub const HTTPS_KEY: &str = "https.proxy";

fn git_error(path: &Path) -> impl FnOnce(git2::Error) -> Error + '_ {
    move |source| Error::Git {
        path: path.to_path_buf(),
        source,
    }
}

fn open(path: &Path) -> std::result::Result<Config, git2::Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| git2::Error::from_str(&e.to_string()))?;
    }
    Config::open(path)
}

fn get(config: &Config, key: &str) -> std::result::Result<Option<String>, git2::Error> {
    match config.get_string(key) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Run `edit` against the config file under the backup/restore protocol.
fn mutate<F>(path: &Path, edit: F) -> Result<ApplyOutcome>
where
    F: FnOnce(&mut Config) -> std::result::Result<(), git2::Error>,
{
    let mut snapshot = Snapshot::read(path)?;
    snapshot.back_up()?;

    if let Err(source) = open(path).and_then(|mut config| edit(&mut config)) {
        // Restore failures are logged by the snapshot; the git error is what we report.
        let _ = snapshot.restore();
        return Err(git_error(path)(source));
    }

    Ok(snapshot.report().into())
}

pub fn apply(path: &Path, settings: &ProxySettings) -> Result<ApplyOutcome> {
    let url = settings.url();
    mutate(path, |config| {
        config.set_str(HTTP_KEY, &url)?;
        config.set_str(HTTPS_KEY, &url)
    })
}

pub fn inspect(path: &Path) -> Result<Inspection> {
    let path_buf = path.to_path_buf();
    if !path.is_file() {
        return Ok(Inspection::FileMissing { path: path_buf });
    }

    let config = Config::open(path).map_err(git_error(path))?;
    let http = get(&config, HTTP_KEY).map_err(git_error(path))?;
    let https = get(&config, HTTPS_KEY).map_err(git_error(path))?;

    if http.is_none() && https.is_none() {
        return Ok(Inspection::NotConfigured { path: path_buf });
    }

    let text = format!(
        "{}={},{}={}",
        HTTP_KEY,
        http.unwrap_or_default(),
        HTTPS_KEY,
        https.unwrap_or_default()
    );
    Ok(Inspection::Found {
        path: path_buf,
        text,
    })
}

pub fn clear(path: &Path) -> Result<ApplyOutcome> {
    if !inspect(path)?.is_found() {
        return Ok(ApplyOutcome::NothingToClear {
            path: path.to_path_buf(),
        });
    }

    mutate(path, |config| {
        for key in [HTTP_KEY, HTTPS_KEY] {
            match config.remove(key) {
                Ok(()) => {}
                Err(e) if e.code() == ErrorCode::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    })
}
