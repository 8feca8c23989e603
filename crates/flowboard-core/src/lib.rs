//!
//! Flowboard Core - Domain model for the Flowboard canvas platform
//!
//! This crate defines the node data model, routing rules, and store
//! contracts that back the visual flow builder. It is the foundation
//! for all other crates in the platform.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - node identity, routing, store contracts, events
pub mod domain;

/// Core data types
pub mod types;

/// Error types
pub mod error;

// Re-export key types
pub use error::StoreError;
pub use types::NodeData;

// Re-export main API types for easy use
pub use domain::events::StoreCommit;
pub use domain::node::{FlowNamespace, NodeId, NodeRef, NodeType, NODE_ID_DELIMITER};
pub use domain::routing::{Partition, RoutingConfig};
pub use domain::store::{NodeStateStore, StoreSnapshot};
