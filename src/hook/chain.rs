//! hook::chain
//!
//! In-process implementation of the fallback handler list.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use nsloader::core::resolver::Resolver;
//! use nsloader::hook::HookChain;
//! use nsloader::loader::MockLoader;
//!
//! let loader = MockLoader::with_files(["/base/App/Model/User.php"]);
//! let resolver = Arc::new(Resolver::new(Arc::new(loader.clone())));
//! resolver.register("App", "/base");
//!
//! let chain = HookChain::new();
//! assert!(resolver.attach_to_runtime(&chain));
//! assert!(chain.dispatch("App\\Model\\User").unwrap());
//! assert_eq!(loader.loads().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use super::traits::{same_handler, SymbolHandler, SymbolResolutionHook};
use crate::loader::LoadError;

/// Ordered list of fallback handlers.
///
/// Clones share the same list.
#[derive(Clone, Default)]
pub struct HookChain {
    handlers: Arc<Mutex<Vec<Arc<dyn SymbolHandler>>>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached handlers.
    pub fn len(&self) -> usize {
        self.handlers.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ask each handler in attach order until one loads `symbol`.
    ///
    /// Returns `Ok(false)` if every handler declined. The first hard error
    /// is returned unchanged and later handlers are not consulted.
    pub fn dispatch(&self, symbol: &str) -> Result<bool, LoadError> {
        // Handlers run without the lock held so they may attach or detach.
        let handlers = self
            .handlers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        for handler in handlers {
            if handler.handle(symbol)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl SymbolResolutionHook for HookChain {
    fn attach(&self, handler: Arc<dyn SymbolHandler>) -> bool {
        let mut handlers = self.handlers.lock().unwrap_or_else(|e| e.into_inner());
        if handlers.iter().any(|h| same_handler(h, &handler)) {
            return false;
        }
        handlers.push(handler);
        true
    }

    fn detach(&self, handler: &Arc<dyn SymbolHandler>) -> bool {
        let mut handlers = self.handlers.lock().unwrap_or_else(|e| e.into_inner());
        let before = handlers.len();
        handlers.retain(|h| !same_handler(h, handler));
        handlers.len() != before
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("handlers", &self.len())
            .finish()
    }
}
