//! Store contract for node data
//!
//! This module defines the trait that node state stores implement.
//! External crates provide the storage mechanism; the routing contract
//! is shared: a node's type prefix decides between the shared partition
//! and a caller-named flow namespace.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::broadcast;

use super::events::StoreCommit;
use super::node::{FlowNamespace, NodeId};
use crate::error::StoreError;
use crate::types::NodeData;

/// A full, immutable copy of both partition tiers
///
/// Writes after the snapshot was taken never alter it; consumers can
/// hold it as a stable view of the committed state, or serialize it to
/// export a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// The shared partition: node identifier to node data
    pub shared: HashMap<NodeId, NodeData>,

    /// The flow-specific partitions, one map per declared namespace
    pub flows: HashMap<FlowNamespace, HashMap<NodeId, NodeData>>,
}

impl StoreSnapshot {
    /// Look up a node in the shared partition
    pub fn shared_node(&self, id: &NodeId) -> Option<&NodeData> {
        self.shared.get(id)
    }

    /// Look up a node in one flow partition
    pub fn flow_node(&self, namespace: &FlowNamespace, id: &NodeId) -> Option<&NodeData> {
        self.flows.get(namespace).and_then(|nodes| nodes.get(id))
    }

    /// Total number of nodes across every partition
    pub fn node_count(&self) -> usize {
        self.shared.len() + self.flows.values().map(HashMap::len).sum::<usize>()
    }
}

/// A store that holds node data partitioned by routing rules
///
/// Writes are atomic relative to reads: once `write` returns, every
/// holder of the store reference observes the committed state, and no
/// reader ever observes a partially applied patch.
#[async_trait]
pub trait NodeStateStore: Send + Sync {
    /// Read the data for a node, routed by its type prefix
    ///
    /// Absent entries and unroutable identifiers both yield an empty
    /// [`NodeData`]; reads never fail for malformed input.
    async fn read(
        &self,
        id: &NodeId,
        namespace: Option<&FlowNamespace>,
    ) -> Result<NodeData, StoreError>;

    /// Shallow-merge a patch into the data for a node
    ///
    /// Routing follows the same rule as `read`. An unshared node type
    /// with a missing or undeclared namespace fails with
    /// [`StoreError::UnroutableWrite`] or [`StoreError::UnknownNamespace`]
    /// and commits nothing.
    async fn write(
        &self,
        id: &NodeId,
        patch: NodeData,
        namespace: Option<&FlowNamespace>,
    ) -> Result<(), StoreError>;

    /// List the node identifiers present in one partition
    ///
    /// `None` targets the shared partition; an undeclared namespace
    /// yields an empty list.
    async fn list_nodes(&self, namespace: Option<&FlowNamespace>)
        -> Result<Vec<NodeId>, StoreError>;

    /// Take an immutable snapshot of the full store state
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError>;

    /// Subscribe to commit events published after each write
    fn subscribe(&self) -> broadcast::Receiver<StoreCommit>;

    /// Get metrics about the store (counts, etc.)
    async fn metrics(&self) -> Result<HashMap<String, i64>, StoreError> {
        // Default implementation returns empty metrics
        tracing::debug!("Using default metrics implementation (returns empty metrics)");
        Ok(HashMap::new())
    }

    /// Health check for the store
    async fn health_check(&self) -> Result<bool, StoreError> {
        // Default implementation that always returns true
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::Partition;
    use serde_json::json;
    use std::sync::Mutex;

    // Minimal single-map implementation, enough to exercise the trait's
    // default methods
    struct SharedOnlyStore {
        nodes: Mutex<HashMap<NodeId, NodeData>>,
        commits: broadcast::Sender<StoreCommit>,
    }

    impl SharedOnlyStore {
        fn new() -> Self {
            let (commits, _) = broadcast::channel(8);
            Self {
                nodes: Mutex::new(HashMap::new()),
                commits,
            }
        }
    }

    #[async_trait]
    impl NodeStateStore for SharedOnlyStore {
        async fn read(
            &self,
            id: &NodeId,
            _namespace: Option<&FlowNamespace>,
        ) -> Result<NodeData, StoreError> {
            let nodes = self.nodes.lock().unwrap();
            Ok(nodes.get(id).cloned().unwrap_or_default())
        }

        async fn write(
            &self,
            id: &NodeId,
            patch: NodeData,
            _namespace: Option<&FlowNamespace>,
        ) -> Result<(), StoreError> {
            let mut nodes = self.nodes.lock().unwrap();
            nodes.entry(id.clone()).or_default().merge(patch);
            let _ = self
                .commits
                .send(StoreCommit::now(id.clone(), Partition::Shared));
            Ok(())
        }

        async fn list_nodes(
            &self,
            _namespace: Option<&FlowNamespace>,
        ) -> Result<Vec<NodeId>, StoreError> {
            let nodes = self.nodes.lock().unwrap();
            Ok(nodes.keys().cloned().collect())
        }

        async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
            let nodes = self.nodes.lock().unwrap();
            Ok(StoreSnapshot {
                shared: nodes.clone(),
                flows: HashMap::new(),
            })
        }

        fn subscribe(&self) -> broadcast::Receiver<StoreCommit> {
            self.commits.subscribe()
        }
    }

    #[tokio::test]
    async fn test_default_trait_methods() {
        let store = SharedOnlyStore::new();

        let metrics = store.metrics().await.unwrap();
        assert!(metrics.is_empty());

        let health = store.health_check().await.unwrap();
        assert!(health);
    }

    #[tokio::test]
    async fn test_subscriber_observes_commits() {
        let store = SharedOnlyStore::new();
        let mut commits = store.subscribe();

        let id = NodeId::new("openai-abc");
        let patch = NodeData::from_value(json!({"model": "gpt"})).unwrap();
        store.write(&id, patch, None).await.unwrap();

        let commit = commits.recv().await.unwrap();
        assert_eq!(commit.node_id, id);
        assert_eq!(commit.partition, Partition::Shared);
        assert_eq!(commit.event_type(), "node_data.committed");
    }

    #[test]
    fn test_snapshot_accessors() {
        let id = NodeId::new("openai-abc");
        let fx = FlowNamespace::new("fxExposure");
        let fx_id = NodeId::new("fxExposure-1");

        let snapshot = StoreSnapshot {
            shared: HashMap::from([(
                id.clone(),
                NodeData::from_value(json!({"model": "gpt"})).unwrap(),
            )]),
            flows: HashMap::from([(
                fx.clone(),
                HashMap::from([(
                    fx_id.clone(),
                    NodeData::from_value(json!({"rate": 1.1})).unwrap(),
                )]),
            )]),
        };

        assert!(snapshot.shared_node(&id).is_some());
        assert!(snapshot.flow_node(&fx, &fx_id).is_some());
        assert!(snapshot.flow_node(&fx, &id).is_none());
        assert_eq!(snapshot.node_count(), 2);
    }
}
