use chrono::{DateTime, Utc};

use super::node::NodeId;
use super::routing::Partition;

/// Event: node data committed to a partition
///
/// Broadcast after every successful write so consumers observing the
/// store (configuration panels, canvas overlays) can re-render from the
/// committed state.
#[derive(Debug, Clone)]
pub struct StoreCommit {
    /// The node whose data changed
    pub node_id: NodeId,

    /// The partition the write landed in
    pub partition: Partition,

    /// The timestamp when the write committed
    pub timestamp: DateTime<Utc>,
}

impl StoreCommit {
    /// Create a commit event stamped with the current time
    pub fn now(node_id: NodeId, partition: Partition) -> Self {
        Self {
            node_id,
            partition,
            timestamp: Utc::now(),
        }
    }

    /// Returns the type of the event as a string
    pub fn event_type(&self) -> &'static str {
        "node_data.committed"
    }
}
