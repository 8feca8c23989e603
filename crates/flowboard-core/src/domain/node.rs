//! Node identity for the flow canvas
//!
//! A node identifier encodes a type prefix and a unique suffix,
//! separated by the first occurrence of [`NODE_ID_DELIMITER`]
//! (e.g. `"openai-y526Bp"`). The type prefix is the sole signal used
//! for partition routing; the suffix keeps identifiers unique among
//! nodes of the same type. The delimiter convention is a contract with
//! the canvas layer, which mints identifiers in this format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a node identifier's type prefix and unique suffix
pub const NODE_ID_DELIMITER: char = '-';

/// Value object: full node identifier (`<type>-<suffix>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node identifier from an externally supplied string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Classify the identifier into its type prefix
    ///
    /// Splits on the first delimiter; an identifier without a delimiter
    /// classifies as its whole string, the empty identifier as the
    /// empty type. No side effects, no errors.
    pub fn node_type(&self) -> NodeType {
        match self.0.split_once(NODE_ID_DELIMITER) {
            Some((prefix, _)) => NodeType(prefix.to_string()),
            None => NodeType(self.0.clone()),
        }
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value object: node type prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeType(pub String);

impl NodeType {
    /// Create a node type
    pub fn new(node_type: impl Into<String>) -> Self {
        Self(node_type.into())
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value object: declared flow-specific namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowNamespace(pub String);

impl FlowNamespace {
    /// Create a flow namespace name
    pub fn new(namespace: impl Into<String>) -> Self {
        Self(namespace.into())
    }
}

impl fmt::Display for FlowNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node reference carrying its type explicitly
///
/// Minted at node-creation time, so the type never has to be re-derived
/// by string parsing. [`NodeRef::from_id`] is the compatibility shim for
/// identifiers supplied by external callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    node_type: NodeType,
    id: NodeId,
}

impl NodeRef {
    /// Create a reference for a freshly minted node
    pub fn new(node_type: NodeType, suffix: &str) -> Self {
        let id = NodeId(format!("{}{}{}", node_type, NODE_ID_DELIMITER, suffix));
        Self { node_type, id }
    }

    /// Recover a reference from a bare identifier by classification
    pub fn from_id(id: NodeId) -> Self {
        let node_type = id.node_type();
        Self { node_type, id }
    }

    /// The node's type
    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    /// The node's full identifier
    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
