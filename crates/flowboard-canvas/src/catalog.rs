//! Node catalog for the flow builder
//!
//! Page-level code declares the palette of node types and the flow
//! templates a workspace offers; the catalog turns that declaration
//! into the store's routing configuration. Catalogs are built in code
//! or loaded from YAML.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use flowboard_core::{FlowNamespace, NodeType, RoutingConfig};

use crate::error::CanvasError;

/// One node type offered by the palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// The type prefix minted into this node's identifiers
    pub node_type: NodeType,

    /// Human-readable palette label
    pub label: String,

    /// Whether the node's configuration is shared across all canvases
    #[serde(default)]
    pub shared: bool,
}

/// One flow template a workspace offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTemplate {
    /// The flow namespace that isolates this template's node data
    pub namespace: FlowNamespace,

    /// Human-readable template title
    pub title: String,
}

/// The declared palette and flow templates of a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCatalog {
    /// Node types the palette offers
    #[serde(default)]
    pub nodes: Vec<NodeDescriptor>,

    /// Flow templates the workspace offers
    #[serde(default)]
    pub flows: Vec<FlowTemplate>,
}

impl NodeCatalog {
    /// Parse and validate a catalog from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, CanvasError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the declarations for internal consistency
    pub fn validate(&self) -> Result<(), CanvasError> {
        let mut seen_types = HashSet::new();
        for node in &self.nodes {
            if !seen_types.insert(&node.node_type) {
                return Err(CanvasError::CatalogError(format!(
                    "duplicate node type: {}",
                    node.node_type
                )));
            }
        }

        let mut seen_namespaces = HashSet::new();
        for flow in &self.flows {
            if !seen_namespaces.insert(&flow.namespace) {
                return Err(CanvasError::CatalogError(format!(
                    "duplicate flow namespace: {}",
                    flow.namespace
                )));
            }
        }

        Ok(())
    }

    /// Look up the descriptor for a node type
    pub fn descriptor(&self, node_type: &NodeType) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| &n.node_type == node_type)
    }

    /// Derive the store routing configuration from the declarations
    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig::new(
            self.nodes
                .iter()
                .filter(|n| n.shared)
                .map(|n| n.node_type.clone()),
            self.flows.iter().map(|f| f.namespace.clone()),
        )
    }

    /// The catalog shipped with the default workspace
    pub fn builtin() -> Self {
        Self {
            nodes: vec![
                NodeDescriptor {
                    node_type: NodeType::new("start"),
                    label: "Start".to_string(),
                    shared: true,
                },
                NodeDescriptor {
                    node_type: NodeType::new("filter"),
                    label: "Filter".to_string(),
                    shared: true,
                },
                NodeDescriptor {
                    node_type: NodeType::new("openai"),
                    label: "OpenAI".to_string(),
                    shared: true,
                },
                NodeDescriptor {
                    node_type: NodeType::new("slack"),
                    label: "Slack".to_string(),
                    shared: true,
                },
                NodeDescriptor {
                    node_type: NodeType::new("fxExposure"),
                    label: "FX Exposure".to_string(),
                    shared: false,
                },
                NodeDescriptor {
                    node_type: NodeType::new("payments"),
                    label: "Payments".to_string(),
                    shared: false,
                },
            ],
            flows: vec![
                FlowTemplate {
                    namespace: FlowNamespace::new("fxExposure"),
                    title: "FX Exposure".to_string(),
                },
                FlowTemplate {
                    namespace: FlowNamespace::new("payments"),
                    title: "Payments".to_string(),
                },
            ],
        }
    }
}
