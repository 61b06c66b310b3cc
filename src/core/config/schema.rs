//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! extension = "php"
//!
//! [namespaces]
//! App = "/srv/app/src"
//! Vendor = "/srv/vendor/lib"
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing: namespace keys must be usable as a
//! top-level segment of both naming conventions, directories must be
//! non-empty, and the extension must be a bare extension.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::name::{ALTERNATE_SEPARATOR, HIERARCHY_SEPARATOR};

/// Loader configuration, shared by the global and project scopes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Source file extension without the leading dot
    pub extension: Option<String>,

    /// Top-level namespace to base directory, in file order
    pub namespaces: IndexMap<String, String>,
}

impl LoaderConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(extension) = &self.extension {
            validate_extension(extension)?;
        }

        for (namespace, directory) in &self.namespaces {
            validate_namespace(namespace)?;
            if directory.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "directory for namespace '{}' cannot be empty",
                    namespace
                )));
            }
        }

        Ok(())
    }
}

/// Check that an extension is a bare extension like `php`.
pub fn validate_extension(extension: &str) -> Result<(), ConfigError> {
    if extension.is_empty() {
        return Err(ConfigError::InvalidValue(
            "extension cannot be empty".to_string(),
        ));
    }
    if extension.starts_with('.') {
        return Err(ConfigError::InvalidValue(format!(
            "extension '{}' must not start with '.'",
            extension
        )));
    }
    if extension.contains(['/', HIERARCHY_SEPARATOR]) {
        return Err(ConfigError::InvalidValue(format!(
            "extension '{}' cannot contain a path separator",
            extension
        )));
    }
    Ok(())
}

/// Check that a namespace key can appear as a top-level segment.
pub fn validate_namespace(namespace: &str) -> Result<(), ConfigError> {
    if namespace.is_empty() {
        return Err(ConfigError::InvalidValue(
            "namespace cannot be empty".to_string(),
        ));
    }

    let invalid = [HIERARCHY_SEPARATOR, ALTERNATE_SEPARATOR, '/'];
    if let Some(c) = namespace
        .chars()
        .find(|c| invalid.contains(c) || c.is_whitespace())
    {
        return Err(ConfigError::InvalidValue(format!(
            "namespace '{}' cannot contain {:?}",
            namespace, c
        )));
    }
    Ok(())
}
