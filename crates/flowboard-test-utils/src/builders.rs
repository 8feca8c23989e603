//! Store builders for test setup

use flowboard_core::{FlowNamespace, NodeType, RoutingConfig};
use flowboard_state_inmemory::InMemoryNodeStore;

/// Builder for an in-memory store with a controlled routing setup
#[derive(Debug, Default, Clone)]
pub struct TestStoreBuilder {
    shared_types: Vec<NodeType>,
    flow_namespaces: Vec<FlowNamespace>,
}

impl TestStoreBuilder {
    /// Start with no declared types or namespaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a shared node type
    pub fn with_shared_type(mut self, node_type: &str) -> Self {
        self.shared_types.push(NodeType::new(node_type));
        self
    }

    /// Declare a flow namespace
    pub fn with_flow_namespace(mut self, namespace: &str) -> Self {
        self.flow_namespaces.push(FlowNamespace::new(namespace));
        self
    }

    /// Declare the default workspace palette
    /// (shared: start, filter, openai, slack; flows: fxExposure, payments)
    pub fn with_default_palette(self) -> Self {
        self.with_shared_type("start")
            .with_shared_type("filter")
            .with_shared_type("openai")
            .with_shared_type("slack")
            .with_flow_namespace("fxExposure")
            .with_flow_namespace("payments")
    }

    /// The routing configuration declared so far
    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig::new(
            self.shared_types.iter().cloned(),
            self.flow_namespaces.iter().cloned(),
        )
    }

    /// Build the store
    pub fn build(self) -> InMemoryNodeStore {
        InMemoryNodeStore::new(self.routing_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let store = TestStoreBuilder::new().with_default_palette().build();

        assert!(store.routing().is_shared_type(&NodeType::new("openai")));
        assert!(store
            .routing()
            .is_declared_namespace(&FlowNamespace::new("payments")));
        assert_eq!(store.routing().flow_namespaces().count(), 2);
    }

    #[test]
    fn test_custom_declarations() {
        let store = TestStoreBuilder::new()
            .with_shared_type("webhook")
            .with_flow_namespace("onboarding")
            .build();

        assert!(store.routing().is_shared_type(&NodeType::new("webhook")));
        assert!(!store.routing().is_shared_type(&NodeType::new("openai")));
        assert!(store
            .routing()
            .is_declared_namespace(&FlowNamespace::new("onboarding")));
    }
}
