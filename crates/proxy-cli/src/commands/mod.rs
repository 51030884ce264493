//! Command implementations for proxy-cli

pub mod get;
pub mod list;
pub mod set;
pub mod unset;

pub use get::run_get;
pub use list::run_list;
pub use set::run_set;
pub use unset::run_unset;

use colored::Colorize;
use proxy_services::{ApplyOutcome, ServiceRegistration};

use crate::error::{CliError, Result};

/// Print one line for a service whose file was written or left alone.
fn print_outcome(service: &ServiceRegistration, outcome: &ApplyOutcome) {
    match outcome {
        ApplyOutcome::Written { path, backup } => {
            println!(
                "   {} {:<8} {}",
                "OK".green().bold(),
                service.name(),
                path.display().to_string().cyan()
            );
            if let Some(backup) = backup {
                println!("            {} {}", "backup:".dimmed(), backup.display());
            }
        }
        ApplyOutcome::NothingToClear { path } => {
            println!(
                "   {} {:<8} {} (no proxy settings)",
                "--".dimmed(),
                service.name(),
                path.display()
            );
        }
        ApplyOutcome::Unsupported => {
            println!(
                "   {} {:<8} {}",
                "--".dimmed(),
                service.name(),
                "not available for this scope".dimmed()
            );
        }
    }
}

fn print_failure(service: &ServiceRegistration, error: &proxy_services::Error) {
    println!("   {} {:<8} {}", "FAILED".red().bold(), service.name(), error);
}

/// Turn a failure count into the command's result.
fn finish(failures: usize) -> Result<()> {
    match failures {
        0 => Ok(()),
        1 => Err(CliError::user("1 service failed")),
        n => Err(CliError::user(format!("{n} services failed"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish() {
        assert!(finish(0).is_ok());
        assert_eq!(finish(1).unwrap_err().to_string(), "1 service failed");
        assert_eq!(finish(3).unwrap_err().to_string(), "3 services failed");
    }
}
