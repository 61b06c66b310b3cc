//! register command - Persist a namespace in the project config

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Add or replace a namespace in the project config file.
pub fn register(ctx: &Context, namespace: &str, directory: &str) -> Result<()> {
    let verbosity = ctx.verbosity();
    let cwd = ctx.working_dir()?;

    let mut config = Config::read_project(&cwd).context("Failed to read project config")?;
    let previous = config
        .namespaces
        .insert(namespace.to_string(), directory.to_string());

    let path = Config::write_project(&cwd, &config).context("Failed to write project config")?;

    if let Some(previous) = previous {
        output::debug(
            format!("replacing previous directory {}", previous),
            verbosity,
        );
    }
    output::success(
        format!(
            "Registered {} in {}",
            output::format_mapping(namespace, directory),
            path.display()
        ),
        verbosity,
    );
    Ok(())
}
