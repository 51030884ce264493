//! The `get` command

use colored::Colorize;
use proxy_services::Inspection;

use super::{finish, print_failure};
use crate::cli::Targets;
use crate::context::Context;
use crate::error::Result;

/// Run the get command
///
/// Reads back what is currently configured for each selected service.
pub fn run_get(ctx: &Context, targets: &Targets) -> Result<()> {
    let scope = ctx.scope(targets.scope);
    let services = ctx.services(&targets.only)?;

    println!("{} Proxy settings ({} scope):", "=>".blue().bold(), scope);

    let mut failures = 0;
    for service in services {
        match service.kind.inspect(scope, &ctx.paths) {
            Ok(Inspection::Found { path, text }) => {
                println!(
                    "   {} {:<8} {}",
                    "SET".green().bold(),
                    service.name(),
                    path.display().to_string().cyan()
                );
                for line in text.lines() {
                    println!("            {line}");
                }
            }
            Ok(Inspection::NotConfigured { path }) => {
                println!(
                    "   {} {:<8} {}",
                    "UNSET".yellow().bold(),
                    service.name(),
                    path.display()
                );
            }
            Ok(Inspection::FileMissing { path }) => {
                println!(
                    "   {} {:<8} {} (file not found)",
                    "UNSET".yellow().bold(),
                    service.name(),
                    path.display()
                );
            }
            Ok(Inspection::Unsupported) => {
                println!(
                    "   {} {:<8} {}",
                    "--".dimmed(),
                    service.name(),
                    "not available for this scope".dimmed()
                );
            }
            Err(e) => {
                print_failure(service, &e);
                failures += 1;
            }
        }
    }

    finish(failures)
}
