//! core::name
//!
//! Qualified class identifiers and their normalization.
//!
//! # Forms
//!
//! Two naming conventions are accepted:
//!
//! - **Hierarchical**: segments joined by `\` (`App\Model\User`)
//! - **Legacy flat**: segments joined by `_` with no `\` anywhere
//!   (`App_Model_User`)
//!
//! # Pipeline
//!
//! Parsing is a two-stage normalize-then-split:
//!
//! 1. Strip leading/trailing `\` and whitespace. If no `\` remains and the
//!    identifier contains `_`, it is flat and every `_` becomes `\`.
//! 2. Split at the last `\` into namespace segments and a simple name.
//!
//! A hierarchical identifier keeps `_` inside its segments. Only the
//! simple name converts `_` to a path separator when a path is built.
//!
//! # Example
//!
//! ```
//! use nsloader::core::name::{NamingStyle, QualifiedName};
//!
//! let name = QualifiedName::parse("\\App\\Model\\User").unwrap();
//! assert_eq!(name.top_level(), Some("App"));
//! assert_eq!(name.simple_name(), "User");
//! assert_eq!(name.style(), NamingStyle::Hierarchical);
//!
//! let legacy = QualifiedName::parse("App_Model_User").unwrap();
//! assert_eq!(legacy.namespace(), ["App", "Model"]);
//! assert_eq!(legacy.style(), NamingStyle::LegacyFlat);
//! ```

use thiserror::Error;

/// Separator between namespace segments in the hierarchical form.
pub const HIERARCHY_SEPARATOR: char = '\\';

/// Separator used by the legacy flat naming convention.
pub const ALTERNATE_SEPARATOR: char = '_';

/// Errors from identifier parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// Which naming convention an identifier was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    /// Segments separated by `\`.
    Hierarchical,
    /// Segments separated by `_`, no `\` present.
    LegacyFlat,
    /// A single name with neither separator.
    Bare,
}

/// A parsed class identifier.
///
/// Never stored; parsed fresh for every resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    namespace: Vec<String>,
    simple_name: String,
    style: NamingStyle,
}

impl QualifiedName {
    /// Parse an identifier in either naming convention.
    ///
    /// # Errors
    ///
    /// - `NameError::Empty` if nothing is left after trimming
    /// - `NameError::EmptySegment` if a namespace segment or the simple
    ///   name is empty (`App\\User`, `App__User`), or if a `_` at the edge
    ///   of the simple name or a doubled `_` inside it would leave an empty
    ///   path component (`App\\Foo_`, `App\\A__B`)
    pub fn parse(identifier: &str) -> Result<Self, NameError> {
        let (normalized, style) = normalize(identifier)?;

        let (namespace, simple_name) = match normalized.rsplit_once(HIERARCHY_SEPARATOR) {
            Some((namespace, simple_name)) => {
                let segments: Vec<String> = namespace
                    .split(HIERARCHY_SEPARATOR)
                    .map(str::to_string)
                    .collect();
                (segments, simple_name.to_string())
            }
            None => (Vec::new(), normalized.clone()),
        };

        let empty_leaf_part = simple_name.split(ALTERNATE_SEPARATOR).any(str::is_empty);
        if empty_leaf_part || namespace.iter().any(|s| s.is_empty()) {
            return Err(NameError::EmptySegment(identifier.trim().to_string()));
        }

        Ok(Self {
            namespace,
            simple_name,
            style,
        })
    }

    /// Namespace segments, outermost first. Empty for bare names.
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// The final segment.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The top-level namespace, used as the registry key.
    pub fn top_level(&self) -> Option<&str> {
        self.namespace.first().map(String::as_str)
    }

    /// The naming convention the identifier was written in.
    pub fn style(&self) -> NamingStyle {
        self.style
    }

    /// Path of the source file relative to the top-level namespace's
    /// registered directory, e.g. `App/Model/User.php`.
    ///
    /// Returns `None` when the name has no namespace. `_` in the simple
    /// name becomes `/`; namespace segments are copied unchanged.
    pub fn relative_path(&self, extension: &str) -> Option<String> {
        if self.namespace.is_empty() {
            return None;
        }

        let leaf = self.simple_name.replace(ALTERNATE_SEPARATOR, "/");
        Some(format!(
            "{}/{}.{}",
            self.namespace.join("/"),
            leaf,
            extension
        ))
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.namespace {
            write!(f, "{}{}", segment, HIERARCHY_SEPARATOR)?;
        }
        write!(f, "{}", self.simple_name)
    }
}

/// Trim and rewrite the legacy flat form into the hierarchical one.
fn normalize(identifier: &str) -> Result<(String, NamingStyle), NameError> {
    let trimmed = identifier.trim_matches(|c: char| c == HIERARCHY_SEPARATOR || c.is_whitespace());
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }

    if trimmed.contains(HIERARCHY_SEPARATOR) {
        Ok((trimmed.to_string(), NamingStyle::Hierarchical))
    } else if trimmed.contains(ALTERNATE_SEPARATOR) {
        let rewritten = trimmed.replace(ALTERNATE_SEPARATOR, &HIERARCHY_SEPARATOR.to_string());
        Ok((rewritten, NamingStyle::LegacyFlat))
    } else {
        Ok((trimmed.to_string(), NamingStyle::Bare))
    }
}
