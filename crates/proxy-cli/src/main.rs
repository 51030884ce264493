//! proxyctl
//!
//! Turns a proxy on or off for git, docker, apt, npm and the shell in one go.

mod cli;
mod commands;
mod config;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, || Context::new(cli.root, cli.home, cli.config)),
        None => {
            println!("{} Toggle proxy settings", "proxyctl".green().bold());
            println!();
            println!("Run {} for available commands.", "proxyctl --help".cyan());
            Ok(())
        }
    }
}

/// Verbose mode logs everything at DEBUG; otherwise `RUST_LOG` decides, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .try_init()
    };

    match result {
        Ok(()) if verbose => tracing::debug!("Verbose mode enabled"),
        Ok(()) => {}
        Err(e) => eprintln!("{}: could not install logger: {}", "warning".yellow().bold(), e),
    }
}

/// Dispatch `cmd`. The context is only built for commands that touch files.
fn execute_command(cmd: Commands, context: impl FnOnce() -> Result<Context>) -> Result<()> {
    match cmd {
        Commands::Set {
            address,
            no_proxy,
            save,
            targets,
        } => commands::run_set(
            &context()?,
            address.as_deref(),
            no_proxy.as_deref(),
            save,
            &targets,
        ),
        Commands::Get { targets } => commands::run_get(&context()?, &targets),
        Commands::Unset { targets } => commands::run_unset(&context()?, &targets),
        Commands::List => commands::run_list(&context()?),
        Commands::Version => {
            println!("proxyctl v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
