//! ui::output
//!
//! Terminal output for `nsl`.
//!
//! Resolved paths and listings go to stdout, one per line, so they can be
//! piped into other tools. Everything else (debug traces of the lookup,
//! config warnings, failures) goes to stderr. The library never calls into
//! this module; only command handlers do.

use std::fmt::Display;
use std::path::Path;

/// How much `nsl` reports besides its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: results and errors only
    Quiet,
    /// Default: results plus confirmations and config warnings
    Normal,
    /// `--debug`: also trace config sources and candidate paths
    Debug,
}

impl Verbosity {
    /// `--quiet` wins over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Informational line on stdout, e.g. an empty namespace listing.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Lookup trace on stderr, prefixed `[debug]`.
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Unresolvable identifiers and fatal errors. Shown even with `--quiet`.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Config problems that do not stop the command, such as a legacy
/// `.nsloader.toml`.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Confirmation after a load or a registration.
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// `App -> /srv/app/src`
pub fn format_mapping(namespace: &str, directory: &str) -> String {
    format!("{} -> {}", namespace, directory)
}

/// `App\Model\User => /srv/app/src/App/Model/User.php`
pub fn format_resolution(identifier: &str, path: &Path) -> String {
    format!("{} => {}", identifier.trim(), path.display())
}

/// Join lines, each prefixed with `prefix`.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
