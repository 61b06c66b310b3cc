//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory (project config lookup)
//! - `--config <file>`: Use this global config file
//! - `--namespace` / `-n <NS=DIR>`: Register a namespace (repeatable)
//! - `--ext <ext>`: Override the source file extension
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nsl - Resolve namespaced class names to source files
#[derive(Parser, Debug)]
#[command(name = "nsl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if nsl was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Global config file to use instead of the standard locations
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Register a top-level namespace for this run
    #[arg(
        short = 'n',
        long = "namespace",
        global = true,
        value_name = "NS=DIR",
        value_parser = parse_namespace_pair
    )]
    pub namespaces: Vec<(String, String)>,

    /// Source file extension (without the dot)
    #[arg(long, global = true, value_name = "EXT")]
    pub ext: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Parse a `NS=DIR` pair, splitting at the first `=`.
pub fn parse_namespace_pair(value: &str) -> Result<(String, String), String> {
    let (namespace, directory) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NS=DIR, got '{}'", value))?;

    if namespace.is_empty() || directory.is_empty() {
        return Err(format!(
            "namespace and directory must both be non-empty in '{}'",
            value
        ));
    }
    Ok((namespace.to_string(), directory.to_string()))
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the candidate source path for each identifier
    #[command(
        name = "resolve",
        long_about = "Print the candidate source path for each identifier.\n\n\
            Resolution is purely syntactic: the path is built from the directory \
            registered for the identifier's top-level namespace and is not checked \
            for existence. Identifiers that cannot be resolved are reported and the \
            command exits non-zero after processing all of them.",
        after_help = "\
EXAMPLES:
    # Hierarchical identifier
    nsl -n App=/srv/app/src resolve 'App\\Model\\User'

    # Legacy flat identifier
    nsl -n App=/srv/app/src resolve App_Model_User"
    )]
    Resolve {
        /// Class identifiers to resolve
        #[arg(required = true, value_name = "IDENT")]
        identifiers: Vec<String>,
    },

    /// Resolve an identifier and load its source file if it exists
    #[command(name = "load")]
    Load {
        /// Class identifier to load
        #[arg(value_name = "IDENT")]
        identifier: String,
    },

    /// List registered namespaces
    #[command(name = "namespaces")]
    Namespaces {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Persist a namespace registration in the project config
    #[command(
        name = "register",
        long_about = "Persist a namespace registration in the project config.\n\n\
            Writes `nsloader.toml` in the working directory. Registering an \
            existing namespace replaces its directory."
    )]
    Register {
        /// Top-level namespace
        namespace: String,

        /// Base directory holding the namespace
        directory: String,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
