//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds a resolver from the [`Context`]
//! 2. Calls into [`crate::core`]
//! 3. Formats and displays output
//!
//! Results go to stdout, diagnostics to stderr.

mod completion;
mod load;
mod namespaces;
mod register;
mod resolve;

pub use completion::completion;
pub use load::load;
pub use namespaces::namespaces;
pub use register::register;
pub use resolve::resolve;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Resolve { identifiers } => resolve::resolve(ctx, &identifiers),
        Command::Load { identifier } => load::load(ctx, &identifier),
        Command::Namespaces { json } => namespaces::namespaces(ctx, json),
        Command::Register {
            namespace,
            directory,
        } => register::register(ctx, &namespace, &directory),
        Command::Completion { shell } => completion::completion(shell),
    }
}
