//! Docker integration.
//!
//! The two scopes use two different files and shapes:
//!
//! - system: the daemon's `daemon.json`, with a flat `proxies` object
//!   (`http-proxy`, `https-proxy`, `no-proxy`);
//! - user: the client's `~/.docker/config.json`, with `proxies.default`
//!   (`httpProxy`, `httpsProxy`, `noProxy`), which the CLI injects into
//!   containers and builds.
//!
//! Both are merged into whatever JSON object is already there; unrelated keys
//! keep their order and values.

use crate::address::ProxySettings;
use crate::error::{Error, Result};
use crate::outcome::{ApplyOutcome, Inspection};
use crate::scope::Scope;
use proxy_blocks::Snapshot;
use serde_json::{Map, Value};
use std::path::Path;

const PROXIES_KEY: &str = "proxies";
const DEFAULT_KEY: &str = "default";
const DAEMON_KEYS: [&str; 3] = ["http-proxy", "https-proxy", "no-proxy"];
const CLIENT_KEYS: [&str; 3] = ["httpProxy", "httpsProxy", "noProxy"];

type Object = Map<String, Value>;

fn parse(path: &Path, content: Option<&[u8]>) -> Result<Object> {
    let Some(content) = content.filter(|c| !c.iter().all(u8::is_ascii_whitespace)) else {
        return Ok(Object::new());
    };

    match serde_json::from_slice(content) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(Error::NotAnObject {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn render(path: &Path, document: &Object) -> Result<String> {
    let mut content = serde_json::to_string_pretty(document).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');
    Ok(content)
}

/// Take `object[key]` out as an object. A missing or non-object value yields
/// an empty object.
///
/// The key keeps its position (holding `null`) until the caller puts the
/// object back with `insert`.
fn take_object(object: &mut Object, key: &str) -> Object {
    match object.get_mut(key).map(Value::take) {
        Some(Value::Object(inner)) => inner,
        _ => Object::new(),
    }
}

fn proxy_section(scope: Scope, settings: &ProxySettings) -> Object {
    let keys = match scope {
        Scope::System => DAEMON_KEYS,
        Scope::User => CLIENT_KEYS,
    };
    let url = settings.url();
    let values = [url.clone(), url, settings.no_proxy().to_string()];

    keys.into_iter()
        .map(String::from)
        .zip(values.into_iter().map(Value::String))
        .collect()
}

pub fn apply(path: &Path, scope: Scope, settings: &ProxySettings) -> Result<ApplyOutcome> {
    let snapshot = Snapshot::read(path)?;
    let mut document = parse(path, snapshot.content())?;

    let section = proxy_section(scope, settings);
    let mut proxies = take_object(&mut document, PROXIES_KEY);
    match scope {
        Scope::System => proxies.extend(section),
        Scope::User => {
            proxies.insert(DEFAULT_KEY.to_string(), Value::Object(section));
        }
    }
    document.insert(PROXIES_KEY.to_string(), Value::Object(proxies));

    let content = render(path, &document)?;
    Ok(snapshot.commit(content.as_bytes())?.into())
}

/// The part of the document proxyctl manages, if present.
fn managed_section(document: &Object, scope: Scope) -> Option<Value> {
    let proxies = document.get(PROXIES_KEY)?.as_object()?;
    match scope {
        Scope::System => {
            let section: Object = proxies
                .iter()
                .filter(|(key, _)| DAEMON_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            (!section.is_empty()).then_some(Value::Object(section))
        }
        Scope::User => proxies.get(DEFAULT_KEY).cloned(),
    }
}

pub fn inspect(path: &Path, scope: Scope) -> Result<Inspection> {
    let snapshot = Snapshot::read(path)?;
    let path_buf = path.to_path_buf();
    if snapshot.content().is_none() {
        return Ok(Inspection::FileMissing { path: path_buf });
    }

    let document = parse(path, snapshot.content())?;
    match managed_section(&document, scope) {
        Some(section) => {
            let text = serde_json::to_string_pretty(&section).map_err(|source| Error::Json {
                path: path_buf.clone(),
                source,
            })?;
            Ok(Inspection::Found {
                path: path_buf,
                text,
            })
        }
        None => Ok(Inspection::NotConfigured { path: path_buf }),
    }
}

pub fn clear(path: &Path, scope: Scope) -> Result<ApplyOutcome> {
    let snapshot = Snapshot::read(path)?;
    let mut document = parse(path, snapshot.content())?;

    let Some(proxies) = document.get_mut(PROXIES_KEY).and_then(Value::as_object_mut) else {
        return Ok(ApplyOutcome::NothingToClear {
            path: path.to_path_buf(),
        });
    };

    let removed = match scope {
        Scope::System => DAEMON_KEYS
            .iter()
            .fold(false, |removed, key| proxies.shift_remove(*key).is_some() || removed),
        Scope::User => proxies.shift_remove(DEFAULT_KEY).is_some(),
    };
    if !removed {
        return Ok(ApplyOutcome::NothingToClear {
            path: path.to_path_buf(),
        });
    }
    if proxies.is_empty() {
        document.shift_remove(PROXIES_KEY);
    }

    let content = render(path, &document)?;
    Ok(snapshot.commit(content.as_bytes())?.into())
}
