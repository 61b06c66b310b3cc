//! nsloader - Namespace-to-path class resolver
//!
//! Given a fully qualified class identifier such as `App\Model\User` (or the
//! legacy flat `App_Model_User`), nsloader finds the source file for it under
//! the directory registered for its top-level namespace, following PSR-0
//! path conventions.
//!
//! # Architecture
//!
//! - [`core`] - Identifier parsing, namespace registry, resolver, config
//! - [`loader`] - Existence check and source loading collaborators
//! - [`hook`] - Attaching resolvers to a runtime's fallback symbol handlers
//! - [`cli`] - Command-line interface (`nsl`)
//! - [`ui`] - Output formatting
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use nsloader::core::resolver::Resolver;
//! use nsloader::loader::FsLoader;
//!
//! let resolver = Resolver::new(Arc::new(FsLoader::new()));
//! resolver.register("App", "/srv/app/src");
//!
//! assert_eq!(
//!     resolver.resolve("\\App\\Controller\\Home"),
//!     Some(PathBuf::from("/srv/app/src/App/Controller/Home.php"))
//! );
//! ```

pub mod cli;
pub mod core;
pub mod hook;
pub mod loader;
pub mod ui;
