//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use proxy_services::Scope;
use std::path::PathBuf;

/// proxyctl - Toggle proxy settings for git, docker, apt, npm and the shell
#[derive(Parser, Debug)]
#[command(name = "proxyctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory standing in for the filesystem root
    #[arg(long, global = true, env = "PROXYCTL_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory standing in for the home directory
    #[arg(long, global = true, env = "PROXYCTL_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Path of the user config file
    #[arg(long, global = true, env = "PROXYCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which configuration files a command touches.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    /// Machine-wide files (system) or the current user's files (user)
    #[arg(short, long, value_name = "SCOPE")]
    pub scope: Option<Scope>,

    /// Only touch these services (repeatable)
    #[arg(long = "only", value_name = "SERVICE")]
    pub only: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write proxy settings into every selected service
    ///
    /// Examples:
    ///   proxyctl set 127.0.0.1:7890
    ///   proxyctl set socks5://127.0.0.1:1080 --scope user
    ///   proxyctl set proxy.corp:3128 --only git --only npm
    Set {
        /// Proxy address as [scheme://]host:port (defaults to the saved address)
        address: Option<String>,

        /// Comma-separated hosts that bypass the proxy
        #[arg(long, value_name = "LIST")]
        no_proxy: Option<String>,

        /// Remember the address, scope and no-proxy list in the user config
        #[arg(long)]
        save: bool,

        #[command(flatten)]
        targets: Targets,
    },

    /// Show the proxy settings currently written for each service
    Get {
        #[command(flatten)]
        targets: Targets,
    },

    /// Remove proxy settings from every selected service
    Unset {
        #[command(flatten)]
        targets: Targets,
    },

    /// List supported services and their configuration files
    List,

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from([
            "proxyctl", "set", "h:1", "--scope", "user", "--only", "git", "--only", "npm",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Set {
                address: Some("h:1".into()),
                no_proxy: None,
                save: false,
                targets: Targets {
                    scope: Some(Scope::User),
                    only: vec!["git".into(), "npm".into()],
                },
            })
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["proxyctl", "get", "--root", "/tmp/r", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/r")));
    }

    #[test]
    fn test_parse_rejects_unknown_scope() {
        let result = Cli::try_parse_from(["proxyctl", "get", "--scope", "galaxy"]);
        assert!(result.is_err());
    }
}
