//! core::registry
//!
//! Top-level namespace to base-directory mapping.
//!
//! # Invariants
//!
//! - Keys are unique; registering an existing key overwrites its directory
//!   and keeps the key's original position
//! - Empty namespaces or directories are never stored
//! - Directories are opaque text (no separator normalization)
//!
//! # Example
//!
//! ```
//! use nsloader::core::registry::NamespaceRegistry;
//!
//! let mut registry = NamespaceRegistry::new();
//! registry.register("App", "/srv/app/src");
//! registry.register("App", "/srv/app/lib");
//!
//! assert_eq!(registry.lookup("App"), Some("/srv/app/lib"));
//! assert_eq!(registry.len(), 1);
//! ```

/// Insertion-ordered namespace registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRegistry {
    entries: Vec<(String, String)>,
}

impl NamespaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `namespace` to `directory`.
    ///
    /// Silently ignored if either argument is empty.
    pub fn register(&mut self, namespace: &str, directory: &str) {
        if namespace.is_empty() || directory.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(ns, _)| ns == namespace) {
            Some((_, dir)) => *dir = directory.to_string(),
            None => self
                .entries
                .push((namespace.to_string(), directory.to_string())),
        }
    }

    /// Remove a namespace. Returns whether it was registered.
    pub fn unregister(&mut self, namespace: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(ns, _)| ns != namespace);
        self.entries.len() != before
    }

    /// Directory registered for an exact namespace match.
    pub fn lookup(&self, namespace: &str) -> Option<&str> {
        if namespace.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, dir)| dir.as_str())
    }

    /// Check whether a namespace is registered.
    pub fn contains(&self, namespace: &str) -> bool {
        self.lookup(namespace).is_some()
    }

    /// All `(namespace, directory)` pairs in insertion order.
    pub fn list_all(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
