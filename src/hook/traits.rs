//! hook::traits
//!
//! Fallback symbol-resolution hook contracts.
//!
//! A host runtime keeps a list of handlers it consults when it meets a
//! symbol it does not know. Once a handler is attached, every unresolved
//! symbol reference reaches it before the runtime gives up.

use std::sync::Arc;

use crate::loader::LoadError;

/// A handler the runtime consults for an unknown symbol.
pub trait SymbolHandler: Send + Sync {
    /// Try to make `symbol` available.
    ///
    /// Returns `Ok(true)` if a definition was loaded, `Ok(false)` to let
    /// the next handler try. Errors are hard failures and stop the chain.
    fn handle(&self, symbol: &str) -> Result<bool, LoadError>;
}

/// The runtime's list of fallback handlers.
pub trait SymbolResolutionHook: Send + Sync {
    /// Append a handler. Returns false if it is already attached.
    fn attach(&self, handler: Arc<dyn SymbolHandler>) -> bool;

    /// Remove a handler. Returns false if it was not attached.
    fn detach(&self, handler: &Arc<dyn SymbolHandler>) -> bool;
}

/// Identity comparison for handlers, ignoring vtable addresses.
pub(crate) fn same_handler(a: &Arc<dyn SymbolHandler>, b: &Arc<dyn SymbolHandler>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
