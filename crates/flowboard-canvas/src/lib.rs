//! Flowboard Canvas
//!
//! This crate provides the surface the visual canvas layer talks to:
//! the node catalog (which node types exist and how they route), node
//! identifier minting, and per-canvas sessions that hydrate and persist
//! node configuration through an injected store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Node catalog and flow templates
pub mod catalog;

/// Error types
pub mod error;

/// Logging setup
pub mod logging;

/// Node identifier minting
pub mod minter;

/// Canvas sessions
pub mod session;

/// Re-export key types for convenient usage
pub use catalog::{FlowTemplate, NodeCatalog, NodeDescriptor};
pub use error::CanvasError;
pub use minter::{mint_node_id, NODE_SUFFIX_LEN};
pub use session::CanvasSession;
