//! loader::fs_loader
//!
//! Filesystem-backed source loader.
//!
//! Existence is `Path::is_file`. Loading reads the whole file and keeps
//! its text in memory for the host to consume. Bytes that are not valid
//! UTF-8 are replaced with U+FFFD rather than failing the load, so a
//! stray Latin-1 file never stops a hook chain.
//!
//! # Retention
//!
//! Only the most recent [`DEFAULT_RETAINED`] sources are kept (see
//! [`FsLoader::with_retention`]); older ones are dropped as new files load.
//! Hosts that consume every source should drain with
//! [`FsLoader::take_loaded`].

use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::traits::{LoadError, SourceLoader};

/// Number of loaded sources an [`FsLoader`] keeps by default.
pub const DEFAULT_RETAINED: usize = 256;

/// A source file brought in by [`FsLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    /// Path the source was read from.
    pub path: PathBuf,
    /// Source text, lossily decoded.
    pub source: String,
    /// Size of the file on disk.
    pub bytes: usize,
}

/// Filesystem source loader.
///
/// # Example
///
/// ```no_run
/// use nsloader::loader::{FsLoader, SourceLoader};
/// use std::path::Path;
///
/// let loader = FsLoader::new();
/// let path = Path::new("/srv/app/src/App/Model/User.php");
/// if loader.exists(path) {
///     loader.load(path)?;
/// }
/// for loaded in loader.take_loaded() {
///     println!("{}: {} bytes", loaded.path.display(), loaded.bytes);
/// }
/// # Ok::<(), nsloader::loader::LoadError>(())
/// ```
#[derive(Debug)]
pub struct FsLoader {
    loaded: Mutex<VecDeque<LoadedSource>>,
    retain: usize,
}

impl Default for FsLoader {
    fn default() -> Self {
        Self::with_retention(DEFAULT_RETAINED)
    }
}

impl FsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` loaded sources. Zero keeps none.
    pub fn with_retention(limit: usize) -> Self {
        Self {
            loaded: Mutex::new(VecDeque::new()),
            retain: limit,
        }
    }

    fn loaded_guard(&self) -> MutexGuard<'_, VecDeque<LoadedSource>> {
        self.loaded.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Retained sources, oldest first.
    pub fn loaded(&self) -> Vec<LoadedSource> {
        self.loaded_guard().iter().cloned().collect()
    }

    /// Remove and return the retained sources, oldest first.
    pub fn take_loaded(&self) -> Vec<LoadedSource> {
        self.loaded_guard().drain(..).collect()
    }

    /// Most recently loaded source, if still retained.
    pub fn last_loaded(&self) -> Option<LoadedSource> {
        self.loaded_guard().back().cloned()
    }
}

impl SourceLoader for FsLoader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<(), LoadError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_path_buf()),
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if self.retain == 0 {
            return Ok(());
        }

        let loaded = LoadedSource {
            path: path.to_path_buf(),
            source: String::from_utf8_lossy(&bytes).into_owned(),
            bytes: bytes.len(),
        };

        let mut retained = self.loaded_guard();
        while retained.len() >= self.retain {
            retained.pop_front();
        }
        retained.push_back(loaded);
        Ok(())
    }
}
