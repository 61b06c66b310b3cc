//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two configuration scopes:
//! - **Global**: user-level namespaces and defaults
//! - **Project**: per-project namespaces, in the project directory
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! Namespace tables merge per key and keep file order: global entries
//! first, then project-only entries. A project entry that overrides a
//! global one keeps the global entry's position.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$NSLOADER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/nsloader/config.toml`
//! 3. `~/.nsloader/config.toml`
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `nsloader.toml` (canonical)
//! 2. `.nsloader.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use nsloader::core::config::Config;
//! use nsloader::loader::FsLoader;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let resolver = result.config.build_resolver(Arc::new(FsLoader::new()));
//! println!("{:?}", resolver.resolve("App\\Model\\User"));
//! ```

pub mod schema;

pub use schema::LoaderConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::core::resolver::{Resolver, DEFAULT_EXTENSION};
use crate::loader::SourceLoader;

/// Canonical project config file name.
pub const PROJECT_CONFIG_FILE: &str = "nsloader.toml";

/// Deprecated project config file name.
const LEGACY_PROJECT_CONFIG_FILE: &str = ".nsloader.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: LoaderConfig,
    /// Project configuration (if found)
    pub project: Option<LoaderConfig>,
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads the project config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or fail
    /// validation. Missing config files are not an error.
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = Self::load_global()?;
        Self::finish_load(global, global_path, project_dir)
    }

    /// Load configuration with an explicit global config file.
    ///
    /// The file must exist; the standard global locations are not searched.
    pub fn load_with_global(
        global_file: &Path,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let global = Self::read_config(global_file)?;
        Self::finish_load(global, Some(global_file.to_path_buf()), project_dir)
    }

    fn finish_load(
        global: LoaderConfig,
        global_path: Option<PathBuf>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (project, project_path) = match project_dir {
            Some(dir) => Self::load_project(dir, &mut warnings)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                global_path,
                project_path,
            },
            warnings,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(LoaderConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $NSLOADER_CONFIG
        if let Ok(path) = std::env::var("NSLOADER_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/nsloader/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("nsloader/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.nsloader/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".nsloader/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((LoaderConfig::default(), None))
    }

    /// Load project configuration from a project directory.
    fn load_project(
        project_dir: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<LoaderConfig>, Option<PathBuf>), ConfigError> {
        let canonical = Self::project_config_path(project_dir);
        if canonical.exists() {
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        let legacy = project_dir.join(LEGACY_PROJECT_CONFIG_FILE);
        if legacy.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please rename to '{}'",
                    canonical.display()
                ),
                path: legacy.clone(),
            });
            let config = Self::read_config(&legacy)?;
            return Ok((Some(config), Some(legacy)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<LoaderConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read the project config file for editing.
    ///
    /// Returns defaults if the canonical file does not exist.
    pub fn read_project(project_dir: &Path) -> Result<LoaderConfig, ConfigError> {
        let path = Self::project_config_path(project_dir);
        if !path.exists() {
            return Ok(LoaderConfig::default());
        }
        Self::read_config(&path)
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.nsloader/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".nsloader/config.toml"))
    }

    /// Get the canonical path for project config.
    pub fn project_config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(PROJECT_CONFIG_FILE)
    }

    /// Validate and write project config atomically.
    pub fn write_project(project_dir: &Path, config: &LoaderConfig) -> Result<PathBuf, ConfigError> {
        config.validate()?;
        let path = Self::project_config_path(project_dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically (temp file, then rename).
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the source file extension.
    ///
    /// Defaults to `php` if not configured.
    pub fn extension(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.extension.as_deref())
            .or(self.global.extension.as_deref())
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// Get the merged namespace table. Project entries win.
    pub fn namespaces(&self) -> IndexMap<String, String> {
        let mut merged = self.global.namespaces.clone();
        if let Some(project) = &self.project {
            merged.extend(project.namespaces.clone());
        }
        merged
    }

    /// Build a resolver with the configured extension and namespaces.
    pub fn build_resolver(&self, loader: Arc<dyn SourceLoader>) -> Resolver {
        let resolver = Resolver::new(loader).with_extension(self.extension());
        for (namespace, directory) in self.namespaces() {
            resolver.register(&namespace, &directory);
        }
        resolver
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
