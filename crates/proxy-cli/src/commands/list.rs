//! The `list` command

use colored::Colorize;
use proxy_services::{Scope, ServiceRegistry};

use crate::context::Context;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &Context) -> Result<()> {
    let registry = ServiceRegistry::builtin();

    println!("{}", "Supported Services".bold());
    println!();

    for service in registry.iter() {
        println!("{} {}", service.name().green().bold(), service.description.dimmed());
        for scope in Scope::ALL {
            match service.target(scope, &ctx.paths) {
                Some(path) => println!("  {:<8} {}", scope.as_str(), path.display()),
                None => println!("  {:<8} {}", scope.as_str(), "-".dimmed()),
            }
        }
    }

    println!();
    println!(
        "{} {} services. Use {} to select some.",
        "Total:".dimmed(),
        registry.len(),
        "--only <name>".cyan()
    );

    Ok(())
}
