//! loader::traits
//!
//! Source loading trait definition.
//!
//! # Design
//!
//! The `SourceLoader` trait is the seam between path resolution and the
//! host: resolution produces a candidate path, the loader decides whether
//! it exists and brings its source in. The resolver never touches the
//! filesystem itself.
//!
//! Implementations must be thread-safe (Send + Sync); the resolver may be
//! shared across concurrent symbol-resolution requests.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a source file.
///
/// These are the only hard failures surfaced by resolution. A missing file
/// is not an error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read source file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The process may not read the file.
    #[error("permission denied reading source file '{0}'")]
    PermissionDenied(PathBuf),

    /// Any other loader-specific failure.
    #[error("failed to load source: {0}")]
    Other(String),
}

/// Trait for source loading collaborators.
///
/// # Example
///
/// ```
/// use nsloader::loader::{MockLoader, SourceLoader};
/// use std::path::Path;
///
/// let loader = MockLoader::with_files(["/base/App/User.php"]);
/// assert!(loader.exists(Path::new("/base/App/User.php")));
/// loader.load(Path::new("/base/App/User.php")).unwrap();
/// assert_eq!(loader.loads().len(), 1);
/// ```
pub trait SourceLoader: Send + Sync {
    /// Check whether a source file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Load the source file at `path`.
    ///
    /// Only called for paths for which `exists` returned true.
    fn load(&self, path: &Path) -> Result<(), LoadError>;
}
