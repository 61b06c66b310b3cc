//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build a resolver from config files plus flag overrides
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Resolution logic lives in [`crate::core`]; the
//! handlers only wire a [`Context`] to it and format results.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::core::config::schema::validate_extension;
use crate::core::config::Config;
use crate::core::resolver::Resolver;
use crate::loader::SourceLoader;
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Explicit global config file.
    pub config: Option<PathBuf>,
    /// Namespaces registered on the command line, applied after config.
    pub namespaces: Vec<(String, String)>,
    /// Extension override.
    pub extension: Option<String>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity from the quiet/debug flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Directory used for project config lookup.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Load config and build a resolver with flag overrides applied.
    pub fn resolver(&self, loader: Arc<dyn SourceLoader>) -> Result<Resolver> {
        let verbosity = self.verbosity();
        let cwd = self.working_dir()?;

        let loaded = match &self.config {
            Some(file) => Config::load_with_global(file, Some(cwd.as_path())),
            None => Config::load(Some(cwd.as_path())),
        }
        .context("Failed to load config")?;

        for warning in &loaded.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                verbosity,
            );
        }

        let config = loaded.config;
        if let Some(path) = config.global_config_loaded_from() {
            output::debug(format!("global config: {}", path.display()), verbosity);
        }
        if let Some(path) = config.project_config_loaded_from() {
            output::debug(format!("project config: {}", path.display()), verbosity);
        }

        let mut resolver = config.build_resolver(loader);
        if let Some(extension) = &self.extension {
            validate_extension(extension).context("Invalid --ext")?;
            resolver = resolver.with_extension(extension.clone());
        }
        for (namespace, directory) in &self.namespaces {
            output::debug(
                format!("registering {}", output::format_mapping(namespace, directory)),
                verbosity,
            );
            resolver.register(namespace, directory);
        }

        Ok(resolver)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        config: cli.config.clone(),
        namespaces: cli.namespaces.clone(),
        extension: cli.ext.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
