//! load command - Resolve and load a source file

use std::sync::Arc;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::loader::FsLoader;
use crate::ui::output;

/// Resolve an identifier and load its source file if present.
pub fn load(ctx: &Context, identifier: &str) -> Result<()> {
    let verbosity = ctx.verbosity();
    let loader = Arc::new(FsLoader::new());
    let resolver = ctx.resolver(loader.clone())?;

    let path = resolver
        .resolve_detailed(identifier)
        .with_context(|| format!("Cannot resolve '{}'", identifier))?;
    output::debug(format!("candidate path: {}", path.display()), verbosity);

    if !resolver.load_if_present(identifier)? {
        bail!("Source file not found: {}", path.display());
    }

    match loader.last_loaded() {
        Some(source) => output::success(
            format!(
                "Loaded {} ({} bytes)",
                source.path.display(),
                source.bytes
            ),
            verbosity,
        ),
        None => output::success(format!("Loaded {}", path.display()), verbosity),
    }
    Ok(())
}
