//! Node identifier minting
//!
//! The canvas mints an identifier when a node is placed. Identifiers
//! follow the `<type>-<suffix>` contract the store classifies on; the
//! suffix keeps nodes of the same type distinct within the session.

use rand::{distributions::Alphanumeric, Rng};

use flowboard_core::{NodeRef, NodeType};

/// Length of the random alphanumeric suffix
pub const NODE_SUFFIX_LEN: usize = 6;

/// Mint a node reference for a freshly placed node
pub fn mint_node_id(node_type: &NodeType) -> NodeRef {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NODE_SUFFIX_LEN)
        .map(char::from)
        .collect();

    NodeRef::new(node_type.clone(), &suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowboard_core::NODE_ID_DELIMITER;

    #[test]
    fn test_minted_id_follows_the_contract() {
        let node = mint_node_id(&NodeType::new("openai"));
        let id = node.id().as_str();

        let (prefix, suffix) = id.split_once(NODE_ID_DELIMITER).unwrap();
        assert_eq!(prefix, "openai");
        assert_eq!(suffix.len(), NODE_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_minted_id_round_trips_through_classifier() {
        let node = mint_node_id(&NodeType::new("slack"));

        assert_eq!(node.id().node_type(), NodeType::new("slack"));
    }

    #[test]
    fn test_minted_ids_are_distinct() {
        let first = mint_node_id(&NodeType::new("filter"));
        let second = mint_node_id(&NodeType::new("filter"));

        assert_ne!(first.id(), second.id());
    }
}
