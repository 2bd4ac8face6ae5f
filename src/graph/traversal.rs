//! Store traversal contract consumed by the graph views
//!
//! [`PropertyGraph`] is the single seam between the views and a backing
//! store: enumeration, identifier-index lookups, directional traversal from a
//! vertex and endpoint resolution of an edge. Any store that implements it can
//! sit behind [`crate::view::StoreHypergraph`].

use super::store::{GraphError, GraphStore};
use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Direction of a traversal step relative to the starting vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Edges leaving the vertex (the vertex is the source)
    Outgoing,
    /// Edges entering the vertex (the vertex is the destination)
    Incoming,
    /// Both of the above
    Both,
}

/// Read-only query primitives a property graph store must provide.
///
/// Traversal results are returned in the store's own order; for
/// [`Direction::Both`] outgoing edges come first, then incoming ones, and a
/// self-loop shows up in both halves exactly like the store reports it.
pub trait PropertyGraph {
    /// Failure of a store query. Passed through the views untranslated.
    type Error: std::error::Error + Send + Sync + 'static;

    fn vertex_ids(&self) -> Result<Vec<NodeId>, Self::Error>;

    fn edge_ids(&self) -> Result<Vec<EdgeId>, Self::Error>;

    fn vertex_count(&self) -> Result<usize, Self::Error>;

    fn edge_count(&self) -> Result<usize, Self::Error>;

    /// Identifier-index membership test for a vertex
    fn contains_vertex_id(&self, id: NodeId) -> Result<bool, Self::Error>;

    /// Identifier-index membership test for an edge
    fn contains_edge_id(&self, id: EdgeId) -> Result<bool, Self::Error>;

    /// Edges incident to `vertex` in the given direction
    fn edges_of(&self, vertex: NodeId, direction: Direction) -> Result<Vec<EdgeId>, Self::Error>;

    /// Vertices one step away from `vertex` in the given direction, one entry
    /// per traversed edge
    fn adjacent_vertices(&self, vertex: NodeId, direction: Direction) -> Result<Vec<NodeId>, Self::Error>;

    /// The vertex `edge` leaves from
    fn out_vertex(&self, edge: EdgeId) -> Result<NodeId, Self::Error>;

    /// The vertex `edge` enters
    fn in_vertex(&self, edge: EdgeId) -> Result<NodeId, Self::Error>;
}

impl PropertyGraph for GraphStore {
    type Error = GraphError;

    fn vertex_ids(&self) -> Result<Vec<NodeId>, GraphError> {
        Ok(self.all_nodes().iter().map(|n| n.id).collect())
    }

    fn edge_ids(&self) -> Result<Vec<EdgeId>, GraphError> {
        Ok(self.all_edges().iter().map(|e| e.id).collect())
    }

    fn vertex_count(&self) -> Result<usize, GraphError> {
        Ok(self.node_count())
    }

    fn edge_count(&self) -> Result<usize, GraphError> {
        Ok(GraphStore::edge_count(self))
    }

    fn contains_vertex_id(&self, id: NodeId) -> Result<bool, GraphError> {
        Ok(self.has_node(id))
    }

    fn contains_edge_id(&self, id: EdgeId) -> Result<bool, GraphError> {
        Ok(self.has_edge(id))
    }

    fn edges_of(&self, vertex: NodeId, direction: Direction) -> Result<Vec<EdgeId>, GraphError> {
        let mut edges = Vec::new();
        if matches!(direction, Direction::Outgoing | Direction::Both) {
            edges.extend(self.get_outgoing_edges(vertex).iter().map(|e| e.id));
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            edges.extend(self.get_incoming_edges(vertex).iter().map(|e| e.id));
        }
        Ok(edges)
    }

    fn adjacent_vertices(&self, vertex: NodeId, direction: Direction) -> Result<Vec<NodeId>, GraphError> {
        let mut vertices = Vec::new();
        if matches!(direction, Direction::Outgoing | Direction::Both) {
            vertices.extend(self.get_outgoing_edges(vertex).iter().map(|e| e.target));
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            vertices.extend(self.get_incoming_edges(vertex).iter().map(|e| e.source));
        }
        Ok(vertices)
    }

    fn out_vertex(&self, edge: EdgeId) -> Result<NodeId, GraphError> {
        self.get_edge(edge)
            .map(|e| e.source)
            .ok_or(GraphError::EdgeNotFound(edge))
    }

    fn in_vertex(&self, edge: EdgeId) -> Result<NodeId, GraphError> {
        self.get_edge(edge)
            .map(|e| e.target)
            .ok_or(GraphError::EdgeNotFound(edge))
    }
}
