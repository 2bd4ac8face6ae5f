//! In-memory property graph storage
//!
//! Nodes and edges live in id-indexed arenas; adjacency is kept as per-node
//! lists of edge ids in insertion order, for both directions. Identifiers are
//! assigned by the store and never supplied by callers.

use super::edge::Edge;
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, Label, NodeId, RelationshipType};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Arena index for an id; ids beyond the address space have no slot
fn slot(id: u64) -> Option<usize> {
    usize::try_from(id).ok()
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (arena slot per id)
/// - edges: EdgeId -> Edge (arena slot per id)
/// - outgoing: NodeId -> Vec<EdgeId>
/// - incoming: NodeId -> Vec<EdgeId>
/// - label_index: Label -> Set<NodeId>
#[derive(Debug)]
pub struct GraphStore {
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    label_index: HashMap<Label, HashSet<NodeId>>,
    node_count: usize,
    edge_count: usize,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            // Slot 0 is never used: ids start at 1
            nodes: vec![None],
            edges: vec![None],
            outgoing: vec![Vec::new()],
            incoming: vec![Vec::new()],
            label_index: HashMap::new(),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Create a node with auto-generated ID and single label
    pub fn create_node(&mut self, label: impl Into<Label>) -> NodeId {
        self.create_node_with_properties(vec![label.into()], PropertyMap::new())
    }

    /// Create a node with multiple labels and properties
    pub fn create_node_with_properties(&mut self, labels: Vec<Label>, properties: PropertyMap) -> NodeId {
        let node_id = NodeId::new(self.nodes.len() as u64);
        let node = Node::new_with_properties(node_id, labels, properties);

        for label in &node.labels {
            self.label_index.entry(label.clone()).or_default().insert(node_id);
        }

        self.nodes.push(Some(node));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.node_count += 1;

        debug!("Created node {}", node_id);
        node_id
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        slot(id.as_u64()).and_then(|i| self.nodes.get(i)).and_then(Option::as_ref)
    }

    /// Get a mutable node by ID
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        slot(id.as_u64()).and_then(|i| self.nodes.get_mut(i)).and_then(Option::as_mut)
    }

    /// Arena slot of an existing node
    fn node_slot(&self, id: NodeId) -> Option<usize> {
        self.has_node(id).then(|| slot(id.as_u64())).flatten()
    }

    /// Check if a node exists
    pub fn has_node(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Set a property on a node
    pub fn set_node_property(
        &mut self,
        node_id: NodeId,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<()> {
        let node = self.get_node_mut(node_id).ok_or(GraphError::NodeNotFound(node_id))?;
        node.set_property(key, value);
        Ok(())
    }

    /// Create an edge between two nodes
    pub fn create_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        rel_type: impl Into<RelationshipType>,
    ) -> GraphResult<EdgeId> {
        self.create_edge_with_properties(source, target, rel_type, PropertyMap::new())
    }

    /// Create an edge with properties
    pub fn create_edge_with_properties(
        &mut self,
        source: NodeId,
        target: NodeId,
        rel_type: impl Into<RelationshipType>,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        let src = self.node_slot(source).ok_or(GraphError::InvalidEdgeSource(source))?;
        let dst = self.node_slot(target).ok_or(GraphError::InvalidEdgeTarget(target))?;

        let edge_id = EdgeId::new(self.edges.len() as u64);
        let edge = Edge::new_with_properties(edge_id, source, target, rel_type, properties);

        self.outgoing[src].push(edge_id);
        self.incoming[dst].push(edge_id);
        self.edges.push(Some(edge));
        self.edge_count += 1;

        debug!("Created edge {} ({} -> {})", edge_id, source, target);
        Ok(edge_id)
    }

    /// Get an edge by ID
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        slot(id.as_u64()).and_then(|i| self.edges.get(i)).and_then(Option::as_ref)
    }

    /// Get a mutable edge by ID
    pub fn get_edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        slot(id.as_u64()).and_then(|i| self.edges.get_mut(i)).and_then(Option::as_mut)
    }

    /// Check if an edge exists
    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.get_edge(id).is_some()
    }

    /// Get all outgoing edges from a node, in insertion order
    pub fn get_outgoing_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        Self::resolve(&self.outgoing, node_id, |id| self.get_edge(id))
    }

    /// Get all incoming edges to a node, in insertion order
    pub fn get_incoming_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        Self::resolve(&self.incoming, node_id, |id| self.get_edge(id))
    }

    fn resolve<'a>(
        adjacency: &[Vec<EdgeId>],
        node_id: NodeId,
        lookup: impl Fn(EdgeId) -> Option<&'a Edge>,
    ) -> Vec<&'a Edge> {
        slot(node_id.as_u64())
            .and_then(|i| adjacency.get(i))
            .map(|edge_ids| edge_ids.iter().filter_map(|&id| lookup(id)).collect())
            .unwrap_or_default()
    }

    /// Get all nodes with a specific label
    pub fn get_nodes_by_label(&self, label: &Label) -> Vec<&Node> {
        self.label_index
            .get(label)
            .map(|node_ids| node_ids.iter().filter_map(|&id| self.get_node(id)).collect())
            .unwrap_or_default()
    }

    /// Find the first node (lowest id) whose property `key` equals `value`
    pub fn find_node_by_property(&self, key: &str, value: &PropertyValue) -> Option<&Node> {
        self.all_nodes()
            .into_iter()
            .find(|node| node.get_property(key) == Some(value))
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get all nodes in the graph, ordered by id
    pub fn all_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().flatten().collect()
    }

    /// Get all edges in the graph, ordered by id
    pub fn all_edges(&self) -> Vec<&Edge> {
        self.edges.iter().flatten().collect()
    }

    /// Clear all data from the graph
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
