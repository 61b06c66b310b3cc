//! core
//!
//! Resolution core: identifiers, the namespace registry, and the resolver.
//!
//! # Modules
//!
//! - [`name`] - Qualified identifiers and normalization of both naming conventions
//! - [`registry`] - Top-level namespace to directory mapping
//! - [`resolver`] - Identifier to candidate path resolution and loading
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Resolution is a pure function of registry contents and input
//! - "Cannot resolve" is a soft result, never an error
//! - Filesystem and runtime access go through injected traits

pub mod config;
pub mod name;
pub mod registry;
pub mod resolver;
