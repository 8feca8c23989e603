//! Canvas sessions
//!
//! One session exists per open canvas. A session holds the injected
//! store reference and the namespace its canvas edits under: `None` for
//! the shared workspace view, or one declared flow namespace for a
//! flow-specific canvas. All panel hydration and persistence goes
//! through the session so the namespace hint is supplied consistently.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use flowboard_core::{FlowNamespace, NodeData, NodeRef, NodeStateStore, NodeType};

use crate::error::CanvasError;
use crate::minter::mint_node_id;

/// A canvas editing session bound to one store and one namespace
pub struct CanvasSession {
    session_id: Uuid,
    store: Arc<dyn NodeStateStore>,
    namespace: Option<FlowNamespace>,
}

impl CanvasSession {
    /// Open a session on the shared workspace view
    pub fn shared(store: Arc<dyn NodeStateStore>) -> Self {
        Self::open(store, None)
    }

    /// Open a session on one flow-specific canvas
    pub fn for_flow(store: Arc<dyn NodeStateStore>, namespace: FlowNamespace) -> Self {
        Self::open(store, Some(namespace))
    }

    fn open(store: Arc<dyn NodeStateStore>, namespace: Option<FlowNamespace>) -> Self {
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, namespace = ?namespace, "Opened canvas session");
        Self {
            session_id,
            store,
            namespace,
        }
    }

    /// This session's identifier
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The namespace this session edits under, if any
    pub fn namespace(&self) -> Option<&FlowNamespace> {
        self.namespace.as_ref()
    }

    /// The injected store reference
    pub fn store(&self) -> &Arc<dyn NodeStateStore> {
        &self.store
    }

    /// Mint a reference for a node the user just placed
    pub fn place_node(&self, node_type: &NodeType) -> NodeRef {
        let node = mint_node_id(node_type);
        debug!(session = %self.session_id, node = %node, "Placed node");
        node
    }

    /// Hydrate a node's configuration panel
    ///
    /// A node that has never been configured hydrates to empty data.
    pub async fn hydrate(&self, node: &NodeRef) -> Result<NodeData, CanvasError> {
        Ok(self.store.read(node.id(), self.namespace.as_ref()).await?)
    }

    /// Persist a configuration panel change
    pub async fn persist(&self, node: &NodeRef, patch: NodeData) -> Result<(), CanvasError> {
        self.store
            .write(node.id(), patch, self.namespace.as_ref())
            .await?;
        Ok(())
    }
}
