//! resolve command - Print candidate source paths

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::cli::Context;
use crate::loader::FsLoader;
use crate::ui::output;

/// Resolve each identifier and print its candidate path.
///
/// Every identifier is attempted; the command fails afterwards if any of
/// them could not be resolved.
pub fn resolve(ctx: &Context, identifiers: &[String]) -> Result<()> {
    let verbosity = ctx.verbosity();
    let resolver = ctx.resolver(Arc::new(FsLoader::new()))?;

    let mut failures = 0;
    for identifier in identifiers {
        match resolver.resolve_detailed(identifier) {
            Ok(path) => {
                output::debug(output::format_resolution(identifier, &path), verbosity);
                println!("{}", path.display());
            }
            Err(e) => {
                output::error(format!("cannot resolve '{}': {}", identifier, e));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} identifiers could not be resolved",
            failures,
            identifiers.len()
        );
    }
    Ok(())
}
