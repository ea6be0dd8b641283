//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Docker / docker-compose wrapper with normalized JSON responses
#[derive(Parser, Debug)]
#[command(name = "dockwrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
// Options are not global: everything after `docker`/`compose` is forwarded as is.
pub struct Cli {
    /// Verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Config file (default: $XDG_CONFIG_HOME/dockwrap/dockwrap.toml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a docker command, JSON-formatted when supported
    Docker {
        /// Arguments passed to docker, e.g. `ps -a`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run a docker-compose command
    Compose {
        /// Arguments passed to docker-compose, e.g. `up -d`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Check whether docker and docker-compose are installed
    Check,

    /// Query the OS release catalog
    Releases {
        #[command(subcommand)]
        command: ReleaseCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReleaseCommands {
    /// List all releases
    List,

    /// Show versions and end dates of a distribution
    Show {
        /// Distribution name (case-insensitive)
        distro: String,
    },

    /// Validate and add a release record, then list the catalog
    Add {
        /// Record as JSON: {"name": ..., "supported_versions": [...]}
        json: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Print a commented config template
    Template,

    /// Print the global config file location
    Path,
}
