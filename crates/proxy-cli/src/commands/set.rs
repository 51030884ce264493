//! The `set` command

use colored::Colorize;
use proxy_services::{ProxyAddress, ProxySettings, Scope};

use super::{finish, print_failure, print_outcome};
use crate::cli::Targets;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the set command
///
/// Writes the proxy into every selected service. A failing service is
/// reported and the rest are still processed.
pub fn run_set(
    ctx: &Context,
    address: Option<&str>,
    no_proxy: Option<&str>,
    save: bool,
    targets: &Targets,
) -> Result<()> {
    let scope = ctx.scope(targets.scope);
    let services = ctx.services(&targets.only)?;

    let input = address.or(ctx.config.address.as_deref()).ok_or_else(|| {
        CliError::user("No proxy address given. Usage: proxyctl set <[SCHEME://]HOST:PORT>")
    })?;
    let address: ProxyAddress = input.parse()?;
    let no_proxy = no_proxy.unwrap_or(&ctx.config.no_proxy);
    let settings = ProxySettings::new(address).with_no_proxy(no_proxy)?;

    ctx.ensure_can_modify(scope)?;

    println!(
        "{} Setting proxy {} ({} scope)...",
        "=>".blue().bold(),
        settings.url().cyan(),
        scope
    );

    let mut failures = 0;
    for service in services {
        match service.kind.apply(&settings, scope, &ctx.paths) {
            Ok(outcome) => print_outcome(service, &outcome),
            Err(e) => {
                tracing::debug!(service = service.name(), error = ?e, "apply failed");
                print_failure(service, &e);
                failures += 1;
            }
        }
    }

    if save {
        save_defaults(ctx, &settings, scope)?;
    }

    finish(failures)
}

fn save_defaults(ctx: &Context, settings: &ProxySettings, scope: Scope) -> Result<()> {
    let path = ctx
        .config_path
        .as_deref()
        .ok_or_else(|| CliError::user("No config location available. Pass --config <FILE>."))?;

    let mut config = ctx.config.clone();
    config.address = Some(settings.url());
    config.scope = scope;
    config.no_proxy = settings.no_proxy().to_string();
    config.save(path)?;

    println!(
        "{} Saved defaults to {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
