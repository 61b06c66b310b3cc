//! loader::mock
//!
//! In-memory source loader for deterministic testing.
//!
//! # Design
//!
//! The mock holds a set of paths that "exist" and records every load. It
//! can be configured to fail loads to exercise hard-error propagation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::traits::{LoadError, SourceLoader};

/// Mock loader for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockLoader {
    inner: Arc<Mutex<MockLoaderInner>>,
}

#[derive(Debug, Default)]
struct MockLoaderInner {
    files: HashSet<PathBuf>,
    loads: Vec<PathBuf>,
    fail_with: Option<String>,
}

impl MockLoader {
    /// Create a mock with no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock where the given paths exist.
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let loader = Self::new();
        for path in paths {
            loader.add_file(path);
        }
        loader
    }

    /// Make a path exist.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().files.insert(path.into());
    }

    /// Fail every subsequent load with `LoadError::Other(message)`.
    pub fn fail_loads(self, message: impl Into<String>) -> Self {
        self.inner.lock().unwrap().fail_with = Some(message.into());
        self
    }

    /// Paths loaded so far, in order.
    pub fn loads(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().loads.clone()
    }
}

impl SourceLoader for MockLoader {
    fn exists(&self, path: &Path) -> bool {
        self.inner.lock().unwrap().files.contains(path)
    }

    fn load(&self, path: &Path) -> Result<(), LoadError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_with {
            return Err(LoadError::Other(message.clone()));
        }
        inner.loads.push(path.to_path_buf());
        Ok(())
    }
}
