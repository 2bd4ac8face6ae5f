//! Directed edge of the property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId, RelationshipType};
use serde::{Deserialize, Serialize};

/// A directed edge in the property graph
///
/// The store keeps every edge directionally: `source` is the vertex the edge
/// leaves (its "out" vertex), `target` the vertex it enters (its "in" vertex).
/// Self-loops have `source == target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Store-level relationship type (e.g., "knows", "created")
    pub rel_type: RelationshipType,

    /// Properties associated with this edge
    pub properties: PropertyMap,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        rel_type: impl Into<RelationshipType>,
    ) -> Self {
        Self::new_with_properties(id, source, target, rel_type, PropertyMap::new())
    }

    /// Create a new edge with properties
    pub fn new_with_properties(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        rel_type: impl Into<RelationshipType>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            source,
            target,
            rel_type: rel_type.into(),
            properties,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
