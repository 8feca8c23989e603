//! Node data fixtures

use rand::{distributions::Alphanumeric, Rng};
use serde_json::Value;

use flowboard_core::NodeData;

/// Build node data from a JSON object literal
///
/// Panics when given anything other than a JSON object; fixtures are
/// object literals by construction.
pub fn node_data(value: Value) -> NodeData {
    NodeData::from_value(value).expect("node data fixtures must be JSON objects")
}

/// A random alphanumeric identifier suffix
pub fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
