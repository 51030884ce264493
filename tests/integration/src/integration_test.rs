//! End-to-end integration tests across the proxyctl crates
//!
//! These exercise the full flow: settings -> services -> block patcher ->
//! filesystem, inside a sandboxed root and home.

use pretty_assertions::assert_eq;
use proxy_blocks::Extraction;
use proxy_fs::ConfigStore;
use proxy_services::{
    ApplyOutcome, Inspection, ProxySettings, Scope, ServiceKind, ServicePaths, ServiceRegistry,
};
use proxy_test_utils::Sandbox;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;

fn paths(sandbox: &Sandbox) -> ServicePaths {
    ServicePaths::new(sandbox.root(), sandbox.home())
}

fn settings(address: &str) -> ProxySettings {
    ProxySettings::new(address.parse().unwrap())
}

/// Populate the sandbox with pre-existing, unrelated configuration.
fn seed(sandbox: &Sandbox) {
    sandbox.write_system("etc/npmrc", "registry=https://registry.npmjs.org/\n");
    sandbox.write_system("etc/profile.d/proxy.sh", "umask 022\n\nexport LANG=C.UTF-8\n");
    sandbox.write_system(
        "etc/docker/daemon.json",
        "{\n  \"log-driver\": \"journald\",\n  \"storage-driver\": \"overlay2\"\n}\n",
    );
    sandbox.write_home(".bashrc", "alias ll='ls -l'\n");
    sandbox.write_home(".npmrc", "save-exact=true\n");
    sandbox.write_home(".docker/config.json", "{\"auths\": {\"ghcr.io\": {}}}");
}

// ============================================================================
// Full toggle cycle
// ============================================================================

#[test]
fn test_set_then_unset_restores_text_files() {
    let sandbox = Sandbox::new();
    seed(&sandbox);
    let paths = paths(&sandbox);
    let settings = settings("127.0.0.1:7890");

    let text_targets = [
        (ServiceKind::Npm, Scope::System),
        (ServiceKind::Env, Scope::System),
        (ServiceKind::Env, Scope::User),
        (ServiceKind::Npm, Scope::User),
    ];
    let before: Vec<String> = text_targets
        .iter()
        .map(|(kind, scope)| fs::read_to_string(kind.target(*scope, &paths).unwrap()).unwrap())
        .collect();

    for scope in Scope::ALL {
        for service in ServiceRegistry::builtin().iter() {
            service.kind.apply(&settings, scope, &paths).unwrap();
        }
    }
    for scope in Scope::ALL {
        for service in ServiceRegistry::builtin().iter() {
            service.kind.clear(scope, &paths).unwrap();
        }
    }

    for ((kind, scope), original) in text_targets.iter().zip(before) {
        let path = kind.target(*scope, &paths).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original, "{}", path.display());
    }
}

#[test]
fn test_set_then_unset_restores_docker_documents() {
    let sandbox = Sandbox::new();
    seed(&sandbox);
    let paths = paths(&sandbox);

    let read = |scope| -> Value {
        let path = ServiceKind::Docker.target(scope, &paths).unwrap();
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    };
    let daemon_before = read(Scope::System);
    let client_before = read(Scope::User);

    for scope in Scope::ALL {
        ServiceKind::Docker
            .apply(&settings("h:3128"), scope, &paths)
            .unwrap();
        ServiceKind::Docker.clear(scope, &paths).unwrap();
    }

    assert_eq!(read(Scope::System), daemon_before);
    assert_eq!(read(Scope::User), client_before);
}

#[test]
fn test_every_service_reports_found_after_set() {
    let sandbox = Sandbox::new();
    let paths = paths(&sandbox);

    for service in ServiceRegistry::builtin().iter() {
        let outcome = service
            .kind
            .apply(&settings("socks5h://proxy.lan:1080"), Scope::System, &paths)
            .unwrap();
        assert!(matches!(outcome, ApplyOutcome::Written { backup: None, .. }));

        match service.kind.inspect(Scope::System, &paths).unwrap() {
            Inspection::Found { text, .. } => {
                assert!(text.contains("socks5h://proxy.lan:1080"), "{}: {text}", service.name())
            }
            other => panic!("{}: expected Found, got {other:?}", service.name()),
        }
    }
}

// ============================================================================
// Services and the block patcher agree on the file format
// ============================================================================

#[test]
fn test_service_block_is_readable_by_patcher() {
    let sandbox = Sandbox::new();
    seed(&sandbox);
    let paths = paths(&sandbox);
    let settings = settings("10.0.0.1:3128").with_no_proxy("localhost,.corp").unwrap();

    ServiceKind::Npm
        .apply(&settings, Scope::User, &paths)
        .unwrap();

    let path = sandbox.home().join(".npmrc");
    assert_eq!(
        proxy_blocks::extract(&path, proxy_services::npm::MARKER).unwrap(),
        Extraction::Found(proxy_services::npm::render(&settings).into_bytes())
    );
}

#[test]
fn test_hand_written_block_after_blank_line_is_replaced_in_place() {
    let sandbox = Sandbox::new();
    let marker = proxy_services::env::MARKER;
    sandbox.write_home(
        ".bashrc",
        &format!("alias ll='ls -l'\n\n{marker}\nexport http_proxy=\"http://stale:1\"\n\nexport PATH=\"$HOME/bin:$PATH\"\n"),
    );

    ServiceKind::Env
        .apply(&settings("fresh:2"), Scope::User, &paths(&sandbox))
        .unwrap();

    let content = sandbox.read_home(".bashrc");
    assert!(content.starts_with(&format!("alias ll='ls -l'\n\n{marker}\n")));
    assert!(content.ends_with("\nexport PATH=\"$HOME/bin:$PATH\"\n"));
    assert!(!content.contains("stale"));
    assert_eq!(content.matches(marker).count(), 1);
}

#[test]
fn test_backup_holds_only_previous_generation() {
    let sandbox = Sandbox::new();
    seed(&sandbox);
    let paths = paths(&sandbox);

    ServiceKind::Npm
        .apply(&settings("first:1"), Scope::System, &paths)
        .unwrap();
    ServiceKind::Npm
        .apply(&settings("second:2"), Scope::System, &paths)
        .unwrap();

    let backup = sandbox.read_system("etc/npmrc.bak");
    assert!(backup.contains("http://first:1"));
    assert!(!backup.contains("http://second:2"));
}

// ============================================================================
// Config store
// ============================================================================

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Defaults {
    address: String,
    scope: Scope,
    services: Vec<String>,
}

#[test]
fn test_config_store_round_trips_scope_in_every_format() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ConfigStore::new();
    let defaults = Defaults {
        address: "http://h:1".into(),
        scope: Scope::User,
        services: vec!["git".into(), "docker".into()],
    };

    for name in ["config.toml", "config.json", "config.yaml"] {
        let path = dir.path().join(name);
        store.save(&path, &defaults).unwrap();
        assert_eq!(store.load::<Defaults>(&path).unwrap(), defaults, "{name}");
    }
}

#[test]
fn test_configured_services_select_from_registry() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "services = [\"npm\", \"git\"]\n").unwrap();

    let defaults: Defaults = ConfigStore::new().load(&path).unwrap();
    let selected = ServiceRegistry::builtin().select(&defaults.services).unwrap();

    let kinds: Vec<_> = selected.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![ServiceKind::Git, ServiceKind::Npm]);
}
