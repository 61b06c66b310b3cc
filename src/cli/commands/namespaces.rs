//! namespaces command - List registered namespaces

use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::loader::FsLoader;
use crate::ui::output;

/// List registered namespaces in registration order.
///
/// Config entries come first, in file order (global, then project-only
/// keys), followed by `--namespace` flags in the order given.
pub fn namespaces(ctx: &Context, json: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let resolver = ctx.resolver(Arc::new(FsLoader::new()))?;
    let entries = resolver.namespaces();

    if json {
        let listed: Vec<serde_json::Value> = entries
            .iter()
            .map(|(namespace, directory)| {
                serde_json::json!({ "namespace": namespace, "directory": directory })
            })
            .collect();
        let value = serde_json::json!({
            "extension": resolver.extension(),
            "namespaces": listed,
        });
        let rendered =
            serde_json::to_string_pretty(&value).context("Failed to serialize namespaces")?;
        println!("{}", rendered);
        return Ok(());
    }

    if entries.is_empty() {
        output::print("No namespaces registered.", verbosity);
        return Ok(());
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|(namespace, directory)| output::format_mapping(namespace, directory))
        .collect();
    println!("{}", output::format_list(&lines, ""));
    Ok(())
}
