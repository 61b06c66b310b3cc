//! loader
//!
//! Source loading collaborators.
//!
//! # Architecture
//!
//! Resolution only computes candidate paths. Checking existence and
//! bringing the source in goes through the [`SourceLoader`] trait:
//!
//! - [`FsLoader`]: reads from the filesystem and keeps recent sources
//! - [`MockLoader`]: in-memory paths for tests
//!
//! A missing file is never an error; a failed read of an existing file is.

mod fs_loader;
pub mod mock;
mod traits;

pub use fs_loader::{FsLoader, LoadedSource, DEFAULT_RETAINED};
pub use mock::MockLoader;
pub use traits::{LoadError, SourceLoader};
