//! ui
//!
//! User-facing output for the CLI.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! The library core never prints; only CLI command handlers go through
//! this module.

pub mod output;
