//! core::resolver
//!
//! Class identifier to source path resolution.
//!
//! # Algorithm
//!
//! 1. Parse the identifier into namespace segments and a simple name
//!    (see [`crate::core::name`])
//! 2. Look up the top-level namespace in the registry
//! 3. Build `<dir>/<Namespace/Segments>/<SimpleName>.<ext>`, with `_` in
//!    the simple name turned into `/`
//!
//! Resolution is purely syntactic and never touches the filesystem. Only
//! [`Resolver::load_if_present`] consults the injected [`SourceLoader`].
//!
//! # Failure Policy
//!
//! Many lookups are expected to miss when several resolvers are chained,
//! so "cannot resolve" is a soft `None`/`false`. The only hard error is a
//! failing load of an existing file, which propagates unchanged.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use nsloader::core::resolver::Resolver;
//! use nsloader::loader::MockLoader;
//!
//! let resolver = Resolver::new(Arc::new(MockLoader::new()));
//! resolver.register("App", "/base");
//!
//! assert_eq!(
//!     resolver.resolve("App\\Model\\User"),
//!     Some(PathBuf::from("/base/App/Model/User.php"))
//! );
//! assert_eq!(
//!     resolver.resolve("App_Model_User"),
//!     Some(PathBuf::from("/base/App/Model/User.php"))
//! );
//! assert_eq!(resolver.resolve("App"), None);
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use super::name::{NameError, QualifiedName};
use super::registry::NamespaceRegistry;
use crate::hook::{SymbolHandler, SymbolResolutionHook};
use crate::loader::{LoadError, SourceLoader};

/// Default source file extension.
pub const DEFAULT_EXTENSION: &str = "php";

/// Why an identifier could not be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("malformed identifier: {0}")]
    Malformed(#[from] NameError),

    #[error("identifier '{0}' has no namespace")]
    NoNamespace(String),

    #[error("namespace '{0}' is not registered")]
    UnregisteredNamespace(String),
}

/// Resolves class identifiers against registered namespace directories.
///
/// The registry sits behind a single mutex, so a resolver can be shared
/// as `Arc<Resolver>` between the registering bootstrap code and
/// concurrent symbol-resolution requests.
pub struct Resolver {
    registry: Mutex<NamespaceRegistry>,
    extension: String,
    loader: Arc<dyn SourceLoader>,
}

impl Resolver {
    /// Create a resolver with an empty registry and the default extension.
    pub fn new(loader: Arc<dyn SourceLoader>) -> Self {
        Self {
            registry: Mutex::new(NamespaceRegistry::new()),
            extension: DEFAULT_EXTENSION.to_string(),
            loader,
        }
    }

    /// Use a different source file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The source file extension appended to resolved paths.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn registry(&self) -> MutexGuard<'_, NamespaceRegistry> {
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Map a top-level namespace to its base directory.
    ///
    /// Silently ignored if either argument is empty. Re-registering
    /// replaces the directory for all later resolutions.
    pub fn register(&self, namespace: &str, directory: &str) {
        self.registry().register(namespace, directory);
    }

    /// Remove a namespace. Returns whether it was registered.
    pub fn unregister(&self, namespace: &str) -> bool {
        self.registry().unregister(namespace)
    }

    /// All registered `(namespace, directory)` pairs in insertion order.
    pub fn namespaces(&self) -> Vec<(String, String)> {
        self.registry().list_all()
    }

    /// Directory registered for a top-level namespace.
    pub fn directory_for(&self, namespace: &str) -> Option<String> {
        self.registry().lookup(namespace).map(str::to_string)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve an identifier to a candidate source path.
    ///
    /// Returns `None` when the identifier is malformed, has no namespace,
    /// or its top-level namespace is not registered.
    pub fn resolve(&self, identifier: &str) -> Option<PathBuf> {
        self.resolve_detailed(identifier).ok()
    }

    /// Resolve an identifier, reporting why resolution failed.
    pub fn resolve_detailed(&self, identifier: &str) -> Result<PathBuf, ResolveError> {
        let name = QualifiedName::parse(identifier)?;

        let top_level = name
            .top_level()
            .ok_or_else(|| ResolveError::NoNamespace(name.to_string()))?;

        let directory = self
            .directory_for(top_level)
            .ok_or_else(|| ResolveError::UnregisteredNamespace(top_level.to_string()))?;

        let relative = name
            .relative_path(&self.extension)
            .ok_or_else(|| ResolveError::NoNamespace(name.to_string()))?;

        Ok(PathBuf::from(format!("{}/{}", directory, relative)))
    }

    /// Resolve, check existence, and load.
    ///
    /// Returns `Ok(true)` if the source was loaded, `Ok(false)` if the
    /// identifier does not resolve or no file exists at the candidate
    /// path (no load is attempted).
    ///
    /// # Errors
    ///
    /// Returns the loader's error unchanged if loading an existing file
    /// fails.
    pub fn load_if_present(&self, identifier: &str) -> Result<bool, LoadError> {
        let Some(path) = self.resolve(identifier) else {
            return Ok(false);
        };

        if !self.loader.exists(&path) {
            return Ok(false);
        }

        self.loader.load(&path)?;
        Ok(true)
    }

    // =========================================================================
    // Runtime hook
    // =========================================================================

    /// Attach this resolver as a fallback symbol handler.
    ///
    /// Returns false if it is already attached to `hook`.
    pub fn attach_to_runtime(self: &Arc<Self>, hook: &dyn SymbolResolutionHook) -> bool {
        let handler: Arc<dyn SymbolHandler> = self.clone();
        hook.attach(handler)
    }

    /// Detach this resolver from `hook`.
    ///
    /// Returns false if it was not attached.
    pub fn detach_from_runtime(self: &Arc<Self>, hook: &dyn SymbolResolutionHook) -> bool {
        let handler: Arc<dyn SymbolHandler> = self.clone();
        hook.detach(&handler)
    }
}

impl SymbolHandler for Resolver {
    fn handle(&self, symbol: &str) -> Result<bool, LoadError> {
        self.load_if_present(symbol)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &*self.registry())
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::HookChain;
    use crate::loader::MockLoader;
    use std::path::Path;

    fn resolver_with(loader: MockLoader) -> Resolver {
        let resolver = Resolver::new(Arc::new(loader));
        resolver.register("App", "/base");
        resolver
    }

    fn path(s: &str) -> Option<PathBuf> {
        Some(PathBuf::from(s))
    }

    mod resolve {
        use super::*;

        #[test]
        fn hierarchical() {
            let resolver = resolver_with(MockLoader::new());
            assert_eq!(
                resolver.resolve("App\\Controller\\TestController"),
                path("/base/App/Controller/TestController.php")
            );
        }

        #[test]
        fn leading_separator_and_whitespace() {
            let resolver = resolver_with(MockLoader::new());
            assert_eq!(
                resolver.resolve(" \\App\\Bootstrap "),
                path("/base/App/Bootstrap.php")
            );
        }

        #[test]
        fn legacy_flat() {
            let resolver = resolver_with(MockLoader::new());
            assert_eq!(
                resolver.resolve("App_Model_User"),
                path("/base/App/Model/User.php")
            );
        }

        #[test]
        fn mixed_converts_only_leaf() {
            let resolver = resolver_with(MockLoader::new());
            assert_eq!(
                resolver.resolve("App\\Sub_Name\\Class_Name"),
                path("/base/App/Sub_Name/Class/Name.php")
            );
        }

        #[test]
        fn bare_name_never_resolves() {
            let resolver = resolver_with(MockLoader::new());
            resolver.register("SingleName", "/single");
            assert_eq!(resolver.resolve("SingleName"), None);
            assert_eq!(
                resolver.resolve_detailed("SingleName"),
                Err(ResolveError::NoNamespace("SingleName".into()))
            );
        }

        #[test]
        fn unregistered_namespace() {
            let resolver = resolver_with(MockLoader::new());
            assert_eq!(resolver.resolve("Other\\User"), None);
            assert_eq!(
                resolver.resolve_detailed("Other\\User"),
                Err(ResolveError::UnregisteredNamespace("Other".into()))
            );
        }

        #[test]
        fn malformed_identifiers() {
            let resolver = resolver_with(MockLoader::new());
            for identifier in [
                "",
                "   ",
                "\\",
                "\\\\\\",
                "App\\\\User",
                "App\\Foo_",
                "App\\_Foo",
                "App\\A__B",
            ] {
                assert!(
                    matches!(
                        resolver.resolve_detailed(identifier),
                        Err(ResolveError::Malformed(_))
                    ),
                    "expected malformed: {:?}",
                    identifier
                );
            }
        }

        #[test]
        fn directory_used_verbatim() {
            let resolver = Resolver::new(Arc::new(MockLoader::new()));
            resolver.register("App", "/base/");
            assert_eq!(resolver.resolve("App\\User"), path("/base//App/User.php"));
        }

        #[test]
        fn custom_extension() {
            let resolver = Resolver::new(Arc::new(MockLoader::new())).with_extension("inc");
            resolver.register("App", "/base");
            assert_eq!(resolver.extension(), "inc");
            assert_eq!(resolver.resolve("App\\User"), path("/base/App/User.inc"));
        }

        #[test]
        fn reregistration_applies_immediately() {
            let resolver = resolver_with(MockLoader::new());
            assert_eq!(resolver.resolve("App\\User"), path("/base/App/User.php"));
            resolver.register("App", "/other");
            assert_eq!(resolver.resolve("App\\User"), path("/other/App/User.php"));
        }

        #[test]
        fn idempotent() {
            let resolver = resolver_with(MockLoader::new());
            let first = resolver.resolve("App\\Model\\User");
            let second = resolver.resolve("App\\Model\\User");
            assert_eq!(first, second);
        }

        #[test]
        fn unregister_stops_resolution() {
            let resolver = resolver_with(MockLoader::new());
            assert!(resolver.unregister("App"));
            assert_eq!(resolver.resolve("App\\User"), None);
        }
    }

    mod load_if_present {
        use super::*;

        #[test]
        fn loads_existing_file() {
            let loader = MockLoader::with_files(["/base/App/Model/User.php"]);
            let resolver = resolver_with(loader.clone());

            assert!(resolver.load_if_present("App\\Model\\User").unwrap());
            assert_eq!(loader.loads(), vec![PathBuf::from("/base/App/Model/User.php")]);
        }

        #[test]
        fn missing_file_is_false_without_load() {
            let loader = MockLoader::new();
            let resolver = resolver_with(loader.clone());

            assert!(!resolver.load_if_present("App\\Core\\NoExist").unwrap());
            assert!(loader.loads().is_empty());
        }

        #[test]
        fn unresolvable_is_false() {
            let loader = MockLoader::with_files(["/base/NoNamespace.php"]);
            let resolver = resolver_with(loader.clone());

            assert!(!resolver.load_if_present("NoNamespace").unwrap());
            assert!(loader.loads().is_empty());
        }

        #[test]
        fn load_failure_propagates() {
            let loader = MockLoader::with_files(["/base/App/User.php"]).fail_loads("denied");
            let resolver = resolver_with(loader);

            let err = resolver.load_if_present("App\\User").unwrap_err();
            assert!(matches!(err, LoadError::Other(ref m) if m == "denied"));
        }
    }

    mod runtime_hook {
        use super::*;

        #[test]
        fn attach_and_detach() {
            let loader = MockLoader::with_files(["/base/App/Model/TestModel.php"]);
            let resolver = Arc::new(resolver_with(loader.clone()));
            let chain = HookChain::new();

            assert!(resolver.attach_to_runtime(&chain));
            assert!(!resolver.attach_to_runtime(&chain));

            assert!(chain.dispatch("\\App\\Model\\TestModel").unwrap());
            assert!(loader.exists(Path::new("/base/App/Model/TestModel.php")));
            assert_eq!(loader.loads().len(), 1);

            assert!(resolver.detach_from_runtime(&chain));
            assert!(!resolver.detach_from_runtime(&chain));
            assert!(!chain.dispatch("\\App\\Model\\TestModel").unwrap());
        }

        #[test]
        fn chained_resolvers() {
            let loader = MockLoader::with_files(["/vendor/Lib/Util.php"]);
            let app = Arc::new(resolver_with(loader.clone()));
            let vendor = Arc::new(Resolver::new(Arc::new(loader.clone())));
            vendor.register("Lib", "/vendor");

            let chain = HookChain::new();
            app.attach_to_runtime(&chain);
            vendor.attach_to_runtime(&chain);

            assert!(chain.dispatch("Lib\\Util").unwrap());
            assert_eq!(loader.loads(), vec![PathBuf::from("/vendor/Lib/Util.php")]);
        }
    }

    #[test]
    fn debug_lists_registry() {
        let resolver = resolver_with(MockLoader::new());
        let rendered = format!("{:?}", resolver);
        assert!(rendered.contains("App"));
        assert!(rendered.contains("php"));
    }
}
