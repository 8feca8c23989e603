//! In-memory implementation of the NodeStateStore contract

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use flowboard_core::{
    FlowNamespace, NodeData, NodeId, NodeStateStore, Partition, RoutingConfig, StoreCommit,
    StoreError, StoreSnapshot,
};

const COMMIT_CHANNEL_CAPACITY: usize = 64;

/// In-memory node state store
///
/// Holds the shared partition and one map per declared flow namespace.
/// Constructed once per canvas session and handed to consumers by
/// reference; the routing configuration is fixed at construction.
pub struct InMemoryNodeStore {
    routing: RoutingConfig,

    // Shared partition: node identifier -> node data
    shared: Arc<RwLock<HashMap<NodeId, NodeData>>>,

    // Flow partitions: namespace -> (node identifier -> node data)
    flows: Arc<RwLock<HashMap<FlowNamespace, HashMap<NodeId, NodeData>>>>,

    // Channel for commit notifications
    commits: broadcast::Sender<StoreCommit>,
}

impl InMemoryNodeStore {
    /// Create a new store with empty partitions for every declared namespace
    pub fn new(routing: RoutingConfig) -> Self {
        let mut flows = HashMap::new();
        for namespace in routing.flow_namespaces() {
            flows.insert(namespace.clone(), HashMap::new());
        }

        let (commits, _) = broadcast::channel(COMMIT_CHANNEL_CAPACITY);

        info!(namespaces = flows.len(), "Creating new InMemoryNodeStore");

        Self {
            routing,
            shared: Arc::new(RwLock::new(HashMap::new())),
            flows: Arc::new(RwLock::new(flows)),
            commits,
        }
    }

    /// The routing configuration the store was constructed with
    pub fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    fn route_write(
        &self,
        id: &NodeId,
        namespace: Option<&FlowNamespace>,
    ) -> Result<Partition, StoreError> {
        let node_type = id.node_type();
        match self.routing.route(&node_type, namespace) {
            Some(partition) => Ok(partition),
            None => match namespace {
                Some(ns) => Err(StoreError::UnknownNamespace(ns.to_string())),
                None => Err(StoreError::UnroutableWrite(id.to_string())),
            },
        }
    }

    fn publish(&self, commit: StoreCommit) {
        // No subscribers is fine
        let _ = self.commits.send(commit);
    }
}

#[async_trait]
impl NodeStateStore for InMemoryNodeStore {
    async fn read(
        &self,
        id: &NodeId,
        namespace: Option<&FlowNamespace>,
    ) -> Result<NodeData, StoreError> {
        let node_type = id.node_type();

        match self.routing.route(&node_type, namespace) {
            Some(Partition::Shared) => {
                let shared = self.shared.read().await;
                Ok(shared.get(id).cloned().unwrap_or_default())
            }
            Some(Partition::Flow(ns)) => {
                let flows = self.flows.read().await;
                Ok(flows
                    .get(&ns)
                    .and_then(|nodes| nodes.get(id))
                    .cloned()
                    .unwrap_or_default())
            }
            // Unroutable reads degrade to an empty result so panel
            // hydration never fails
            None => Ok(NodeData::new()),
        }
    }

    async fn write(
        &self,
        id: &NodeId,
        patch: NodeData,
        namespace: Option<&FlowNamespace>,
    ) -> Result<(), StoreError> {
        let partition = match self.route_write(id, namespace) {
            Ok(partition) => partition,
            Err(err) => {
                warn!(node = %id, "Rejected write: {}", err);
                return Err(err);
            }
        };

        match &partition {
            Partition::Shared => {
                let mut shared = self.shared.write().await;
                shared.entry(id.clone()).or_default().merge(patch);
            }
            Partition::Flow(ns) => {
                let mut flows = self.flows.write().await;
                flows
                    .entry(ns.clone())
                    .or_default()
                    .entry(id.clone())
                    .or_default()
                    .merge(patch);
            }
        }

        debug!(node = %id, partition = %partition, "Committed node data");
        self.publish(StoreCommit::now(id.clone(), partition));
        Ok(())
    }

    async fn list_nodes(
        &self,
        namespace: Option<&FlowNamespace>,
    ) -> Result<Vec<NodeId>, StoreError> {
        match namespace {
            None => {
                let shared = self.shared.read().await;
                Ok(shared.keys().cloned().collect())
            }
            Some(ns) => {
                let flows = self.flows.read().await;
                Ok(flows
                    .get(ns)
                    .map(|nodes| nodes.keys().cloned().collect())
                    .unwrap_or_default())
            }
        }
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let shared = self.shared.read().await.clone();
        let flows = self.flows.read().await.clone();
        Ok(StoreSnapshot { shared, flows })
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreCommit> {
        self.commits.subscribe()
    }

    async fn metrics(&self) -> Result<HashMap<String, i64>, StoreError> {
        let shared = self.shared.read().await;
        let flows = self.flows.read().await;

        let mut metrics = HashMap::new();
        metrics.insert("shared_nodes".to_string(), shared.len() as i64);
        metrics.insert("flow_namespaces".to_string(), flows.len() as i64);
        metrics.insert(
            "flow_nodes".to_string(),
            flows.values().map(HashMap::len).sum::<usize>() as i64,
        );

        Ok(metrics)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        // In-memory store is always healthy
        Ok(true)
    }
}
