//! Partition routing for node data
//!
//! Every node's data lives in exactly one partition: the shared
//! partition if its type prefix is declared shared, otherwise the
//! flow-specific partition named by the caller. Both sets are fixed at
//! store construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::node::{FlowNamespace, NodeType};

/// The partition a routed operation lands in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Partition {
    /// State shared by every flow canvas
    Shared,
    /// State private to one declared flow namespace
    Flow(FlowNamespace),
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Shared => write!(f, "shared"),
            Partition::Flow(namespace) => write!(f, "flow:{}", namespace),
        }
    }
}

/// Routing configuration, fixed at store construction
///
/// `shared_types` are the node types whose data always lands in the
/// shared partition; `flow_namespaces` is the closed set of recognized
/// flow-specific namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    shared_types: HashSet<NodeType>,
    flow_namespaces: HashSet<FlowNamespace>,
}

impl RoutingConfig {
    /// Create a routing configuration from the declared sets
    pub fn new(
        shared_types: impl IntoIterator<Item = NodeType>,
        flow_namespaces: impl IntoIterator<Item = FlowNamespace>,
    ) -> Self {
        Self {
            shared_types: shared_types.into_iter().collect(),
            flow_namespaces: flow_namespaces.into_iter().collect(),
        }
    }

    /// Whether a node type is declared shared
    pub fn is_shared_type(&self, node_type: &NodeType) -> bool {
        self.shared_types.contains(node_type)
    }

    /// Whether a namespace is one of the declared flow namespaces
    pub fn is_declared_namespace(&self, namespace: &FlowNamespace) -> bool {
        self.flow_namespaces.contains(namespace)
    }

    /// Iterate over the declared flow namespaces
    pub fn flow_namespaces(&self) -> impl Iterator<Item = &FlowNamespace> {
        self.flow_namespaces.iter()
    }

    /// Resolve the partition for a node type and an optional namespace hint
    ///
    /// Shared types always route to the shared partition; the namespace
    /// argument is ignored for them. Unshared types route to the named
    /// namespace when it is declared. `None` means the operation is
    /// unroutable.
    pub fn route(
        &self,
        node_type: &NodeType,
        namespace: Option<&FlowNamespace>,
    ) -> Option<Partition> {
        if self.is_shared_type(node_type) {
            return Some(Partition::Shared);
        }
        match namespace {
            Some(ns) if self.is_declared_namespace(ns) => Some(Partition::Flow(ns.clone())),
            _ => None,
        }
    }
}
