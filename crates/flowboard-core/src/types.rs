use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::StoreError;

/// The configuration payload attached to one node
///
/// This is a schema-free mapping from field name to value; fields
/// accumulate over time via shallow merges. The value type is generic
/// so that callers with a fixed panel schema can use their own types,
/// but the store contract fixes it to `serde_json::Value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeData<V = Value> {
    fields: HashMap<String, V>,
}

impl<V> Default for NodeData<V> {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl<V> NodeData<V> {
    /// Create an empty node data mapping
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any fields are present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields present
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Get a field value by name
    #[inline]
    pub fn get(&self, field: &str) -> Option<&V> {
        self.fields.get(field)
    }

    /// Check whether a field is present
    #[inline]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Set a single field, returning the previous value if any
    pub fn insert(&mut self, field: impl Into<String>, value: V) -> Option<V> {
        self.fields.insert(field.into(), value)
    }

    /// Iterate over all fields
    pub fn fields(&self) -> impl Iterator<Item = (&String, &V)> {
        self.fields.iter()
    }

    /// Shallow-merge a patch into this data
    ///
    /// Fields present in the patch overwrite prior values wholesale;
    /// fields absent from the patch are preserved. Nested structures
    /// are replaced, not merged.
    pub fn merge(&mut self, patch: NodeData<V>) {
        self.fields.extend(patch.fields);
    }
}

impl NodeData<Value> {
    /// Build node data from a JSON object value
    ///
    /// Anything other than a JSON object is a serialization error: node
    /// data is a field mapping by contract.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        match value {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().collect(),
            }),
            other => Err(StoreError::SerializationError(format!(
                "node data must be a JSON object, got: {}",
                other
            ))),
        }
    }

    /// Convert the node data back into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields.into_iter().collect())
    }

    /// Try to deserialize the node data into a typed panel config
    pub fn to<T>(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.clone().into_value())?)
    }

    /// Build node data from any serializable panel config
    pub fn from<T>(value: &T) -> Result<Self, StoreError>
    where
        T: Serialize,
    {
        Self::from_value(serde_json::to_value(value)?)
    }
}

impl<V> FromIterator<(String, V)> for NodeData<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
