//! hook
//!
//! Wiring resolvers into a runtime's fallback symbol resolution.
//!
//! # Architecture
//!
//! The runtime's handler list is an injected [`SymbolResolutionHook`];
//! nothing here touches process-global state. The host attaches a
//! resolver explicitly at startup:
//!
//! - [`SymbolHandler`]: anything that can try to load a symbol
//! - [`SymbolResolutionHook`]: attach/detach contract of the runtime
//! - [`HookChain`]: in-process handler list with ordered dispatch

mod chain;
mod traits;

pub use chain::HookChain;
pub use traits::{SymbolHandler, SymbolResolutionHook};
