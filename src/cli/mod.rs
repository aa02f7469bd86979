//! CLI module - Command-line interface for Ideabox
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ideabox - a small ideas & users JSON API
#[derive(Parser)]
#[command(name = "ideabox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (skips the usual search locations)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    #[command(alias = "s")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List registered users
    Users,

    /// List stored ideas
    #[command(alias = "ls")]
    Ideas,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_subcommand() {
        let cli = Cli::try_parse_from(["ideabox"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["ideabox", "serve", "--config", "/tmp/ideabox.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ideabox.toml")));
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["ideabox", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Ideas)));
    }
}
