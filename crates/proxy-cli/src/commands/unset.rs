//! The `unset` command

use colored::Colorize;

use super::{finish, print_failure, print_outcome};
use crate::cli::Targets;
use crate::context::Context;
use crate::error::Result;

/// Run the unset command
pub fn run_unset(ctx: &Context, targets: &Targets) -> Result<()> {
    let scope = ctx.scope(targets.scope);
    let services = ctx.services(&targets.only)?;
    ctx.ensure_can_modify(scope)?;

    println!("{} Removing proxy ({} scope)...", "=>".blue().bold(), scope);

    let mut failures = 0;
    for service in services {
        match service.kind.clear(scope, &ctx.paths) {
            Ok(outcome) => print_outcome(service, &outcome),
            Err(e) => {
                tracing::debug!(service = service.name(), error = ?e, "clear failed");
                print_failure(service, &e);
                failures += 1;
            }
        }
    }

    finish(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::run_set;
    use pretty_assertions::assert_eq;
    use proxy_services::Scope;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unset_restores_untouched_content() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::write(dir.path().join("home/.bashrc"), "alias ll='ls -l'\n").unwrap();
        let ctx = Context::new(
            Some(dir.path().join("root")),
            Some(dir.path().join("home")),
            Some(dir.path().join("config.toml")),
        )
        .unwrap();
        let targets = Targets {
            scope: Some(Scope::User),
            only: vec!["env".into()],
        };

        run_set(&ctx, Some("h:1"), None, false, &targets).unwrap();
        run_unset(&ctx, &targets).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("home/.bashrc")).unwrap(),
            "alias ll='ls -l'\n"
        );
    }

    #[test]
    fn test_unset_on_clean_sandbox_succeeds() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::new(
            Some(dir.path().join("root")),
            Some(dir.path().join("home")),
            Some(dir.path().join("config.toml")),
        )
        .unwrap();

        assert!(run_unset(&ctx, &Targets::default()).is_ok());
    }
}
