//! Hypergraph view over a property graph store
//!
//! [`Hypergraph`] is the generic incidence contract: vertices, edges,
//! incidence, neighbours, degrees, directional endpoints and edge-type
//! classification. It makes no arity assumption of its own; the store backed
//! implementation happens to always report two endpoints per edge.
//!
//! [`StoreHypergraph`] answers every query by delegating to a
//! [`PropertyGraph`]. It owns nothing but a shared reference to the store, so
//! it is `Copy` and can be handed to as many readers as the store allows.

use super::error::{Mutation, MutationResult, RejectionReason, UnsupportedMutation};
use crate::graph::{Direction, EdgeId, NodeId, PropertyGraph};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;
use tracing::{trace, warn};

/// Endpoint semantics of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    Directed,
    Undirected,
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeType::Directed => f.write_str("DIRECTED"),
            EdgeType::Undirected => f.write_str("UNDIRECTED"),
        }
    }
}

/// Read contract of a graph whose edges may in principle have any arity.
///
/// Every query is a synchronous call against the current state of the
/// backing graph. Collections are freshly built snapshots; `Vec` results have
/// no ordering guarantee and set results have duplicates collapsed.
pub trait Hypergraph {
    type Vertex: Copy + Eq + Hash + Debug;
    type Edge: Copy + Eq + Hash + Debug;
    /// Failure of the backing graph, passed through as-is
    type Error: std::error::Error + Send + Sync + 'static;

    fn vertices(&self) -> Result<Vec<Self::Vertex>, Self::Error>;

    fn edges(&self) -> Result<Vec<Self::Edge>, Self::Error>;

    /// Must equal `vertices()?.len()`
    fn vertex_count(&self) -> Result<usize, Self::Error>;

    /// Must equal `edges()?.len()`
    fn edge_count(&self) -> Result<usize, Self::Error>;

    fn contains_vertex(&self, vertex: Self::Vertex) -> Result<bool, Self::Error>;

    fn contains_edge(&self, edge: Self::Edge) -> Result<bool, Self::Error>;

    /// Vertices sharing an incident edge with `vertex`, in either direction.
    /// A self-loop makes `vertex` its own neighbour.
    fn neighbors(&self, vertex: Self::Vertex) -> Result<FxHashSet<Self::Vertex>, Self::Error>;

    /// Every edge touching `vertex`, each listed once (self-loops included)
    fn incident_edges(&self, vertex: Self::Vertex) -> Result<Vec<Self::Edge>, Self::Error>;

    fn incident_vertices(&self, edge: Self::Edge) -> Result<Vec<Self::Vertex>, Self::Error>;

    /// One edge whose source is `v1` and destination is `v2`, or `None`.
    ///
    /// Only directed connection counts. When several edges qualify the same
    /// one is returned for the same graph state.
    fn find_edge(&self, v1: Self::Vertex, v2: Self::Vertex) -> Result<Option<Self::Edge>, Self::Error>;

    /// All edges whose source is `v1` and destination is `v2`
    fn find_edge_set(&self, v1: Self::Vertex, v2: Self::Vertex) -> Result<FxHashSet<Self::Edge>, Self::Error>;

    /// Number of incident edges; a self-loop counts once
    fn degree(&self, vertex: Self::Vertex) -> Result<usize, Self::Error> {
        Ok(self.incident_edges(vertex)?.len())
    }

    fn neighbor_count(&self, vertex: Self::Vertex) -> Result<usize, Self::Error> {
        Ok(self.neighbors(vertex)?.len())
    }

    fn incident_count(&self, edge: Self::Edge) -> Result<usize, Self::Error> {
        Ok(self.incident_vertices(edge)?.len())
    }

    fn is_neighbor(&self, v1: Self::Vertex, v2: Self::Vertex) -> Result<bool, Self::Error> {
        Ok(self.neighbors(v1)?.contains(&v2))
    }

    fn is_incident(&self, vertex: Self::Vertex, edge: Self::Edge) -> Result<bool, Self::Error> {
        Ok(self.incident_edges(vertex)?.contains(&edge))
    }

    fn edge_type(&self, edge: Self::Edge) -> EdgeType;

    fn default_edge_type(&self) -> EdgeType;

    fn edges_of_type(&self, edge_type: EdgeType) -> Result<Vec<Self::Edge>, Self::Error>;

    fn edge_count_of_type(&self, edge_type: EdgeType) -> Result<usize, Self::Error> {
        Ok(self.edges_of_type(edge_type)?.len())
    }

    /// Edges whose destination is `vertex`
    fn in_edges(&self, vertex: Self::Vertex) -> Result<Vec<Self::Edge>, Self::Error>;

    /// Edges whose source is `vertex`
    fn out_edges(&self, vertex: Self::Vertex) -> Result<Vec<Self::Edge>, Self::Error>;

    fn in_degree(&self, vertex: Self::Vertex) -> Result<usize, Self::Error> {
        Ok(self.in_edges(vertex)?.len())
    }

    fn out_degree(&self, vertex: Self::Vertex) -> Result<usize, Self::Error> {
        Ok(self.out_edges(vertex)?.len())
    }

    fn source(&self, edge: Self::Edge) -> Result<Self::Vertex, Self::Error>;

    fn dest(&self, edge: Self::Edge) -> Result<Self::Vertex, Self::Error>;

    /// Vertices with an edge into `vertex`
    fn predecessors(&self, vertex: Self::Vertex) -> Result<FxHashSet<Self::Vertex>, Self::Error>;

    /// Vertices `vertex` has an edge into
    fn successors(&self, vertex: Self::Vertex) -> Result<FxHashSet<Self::Vertex>, Self::Error>;
}

/// Mutation contract of a hypergraph.
///
/// The views in this crate implement it only to reject every call with a
/// typed error; a writable graph would implement it for real.
pub trait HypergraphMut: Hypergraph {
    type MutationError: std::error::Error + Send + Sync + 'static;

    fn add_vertex(&mut self, vertex: Self::Vertex) -> Result<(), Self::MutationError>;

    fn add_edge(&mut self, edge: Self::Edge, vertices: &[Self::Vertex]) -> Result<(), Self::MutationError>;

    fn add_typed_edge(
        &mut self,
        edge: Self::Edge,
        vertices: &[Self::Vertex],
        edge_type: EdgeType,
    ) -> Result<(), Self::MutationError>;

    fn remove_vertex(&mut self, vertex: Self::Vertex) -> Result<(), Self::MutationError>;

    fn remove_edge(&mut self, edge: Self::Edge) -> Result<(), Self::MutationError>;
}

/// Log and build a mutation rejection
pub(crate) fn reject(operation: Mutation, reason: RejectionReason) -> MutationResult {
    let err = UnsupportedMutation::new(operation, reason);
    warn!("Rejected {}", err);
    Err(err)
}

/// Hypergraph view backed by a [`PropertyGraph`] store.
///
/// Every edge is reported as [`EdgeType::Directed`] no matter what typing
/// metadata the store carries, and type-filtered queries return all edges.
pub struct StoreHypergraph<'g, S: PropertyGraph + ?Sized> {
    store: &'g S,
}

impl<'g, S: PropertyGraph + ?Sized> StoreHypergraph<'g, S> {
    pub fn new(store: &'g S) -> Self {
        StoreHypergraph { store }
    }

    /// The wrapped store
    pub fn store(&self) -> &'g S {
        self.store
    }
}

impl<S: PropertyGraph + ?Sized> Clone for StoreHypergraph<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: PropertyGraph + ?Sized> Copy for StoreHypergraph<'_, S> {}

impl<S: PropertyGraph + ?Sized> Debug for StoreHypergraph<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHypergraph").finish_non_exhaustive()
    }
}

impl<S: PropertyGraph + ?Sized> Hypergraph for StoreHypergraph<'_, S> {
    type Vertex = NodeId;
    type Edge = EdgeId;
    type Error = S::Error;

    fn vertices(&self) -> Result<Vec<NodeId>, S::Error> {
        trace!("vertices");
        self.store.vertex_ids()
    }

    fn edges(&self) -> Result<Vec<EdgeId>, S::Error> {
        trace!("edges");
        self.store.edge_ids()
    }

    fn vertex_count(&self) -> Result<usize, S::Error> {
        trace!("vertex_count");
        self.store.vertex_count()
    }

    fn edge_count(&self) -> Result<usize, S::Error> {
        trace!("edge_count");
        self.store.edge_count()
    }

    fn contains_vertex(&self, vertex: NodeId) -> Result<bool, S::Error> {
        trace!("contains_vertex {}", vertex);
        self.store.contains_vertex_id(vertex)
    }

    fn contains_edge(&self, edge: EdgeId) -> Result<bool, S::Error> {
        trace!("contains_edge {}", edge);
        self.store.contains_edge_id(edge)
    }

    fn neighbors(&self, vertex: NodeId) -> Result<FxHashSet<NodeId>, S::Error> {
        trace!("neighbors of {}", vertex);
        // The far end of every incident edge; only a self-loop yields `vertex`
        Ok(self
            .store
            .adjacent_vertices(vertex, Direction::Both)?
            .into_iter()
            .collect())
    }

    fn incident_edges(&self, vertex: NodeId) -> Result<Vec<EdgeId>, S::Error> {
        trace!("incident_edges of {}", vertex);
        let mut edges = self.store.edges_of(vertex, Direction::Both)?;
        // A self-loop is reported once as outgoing and once as incoming
        let mut seen = FxHashSet::default();
        edges.retain(|edge| seen.insert(*edge));
        Ok(edges)
    }

    fn incident_vertices(&self, edge: EdgeId) -> Result<Vec<NodeId>, S::Error> {
        trace!("incident_vertices of {}", edge);
        Ok(vec![self.store.out_vertex(edge)?, self.store.in_vertex(edge)?])
    }

    fn find_edge(&self, v1: NodeId, v2: NodeId) -> Result<Option<EdgeId>, S::Error> {
        trace!("find_edge {} -> {}", v1, v2);
        for edge in self.store.edges_of(v1, Direction::Outgoing)? {
            if self.store.in_vertex(edge)? == v2 {
                return Ok(Some(edge));
            }
        }
        Ok(None)
    }

    fn find_edge_set(&self, v1: NodeId, v2: NodeId) -> Result<FxHashSet<EdgeId>, S::Error> {
        trace!("find_edge_set {} -> {}", v1, v2);
        let mut found = FxHashSet::default();
        for edge in self.store.edges_of(v1, Direction::Outgoing)? {
            if self.store.in_vertex(edge)? == v2 {
                found.insert(edge);
            }
        }
        Ok(found)
    }

    fn edge_type(&self, edge: EdgeId) -> EdgeType {
        trace!("edge_type of {}", edge);
        self.default_edge_type()
    }

    fn default_edge_type(&self) -> EdgeType {
        EdgeType::Directed
    }

    fn edges_of_type(&self, edge_type: EdgeType) -> Result<Vec<EdgeId>, S::Error> {
        // Only one type is ever reported, so there is nothing to filter on
        trace!("edges_of_type {} returns every edge", edge_type);
        self.edges()
    }

    fn in_edges(&self, vertex: NodeId) -> Result<Vec<EdgeId>, S::Error> {
        trace!("in_edges of {}", vertex);
        self.store.edges_of(vertex, Direction::Incoming)
    }

    fn out_edges(&self, vertex: NodeId) -> Result<Vec<EdgeId>, S::Error> {
        trace!("out_edges of {}", vertex);
        self.store.edges_of(vertex, Direction::Outgoing)
    }

    fn source(&self, edge: EdgeId) -> Result<NodeId, S::Error> {
        trace!("source of {}", edge);
        self.store.out_vertex(edge)
    }

    fn dest(&self, edge: EdgeId) -> Result<NodeId, S::Error> {
        trace!("dest of {}", edge);
        self.store.in_vertex(edge)
    }

    fn predecessors(&self, vertex: NodeId) -> Result<FxHashSet<NodeId>, S::Error> {
        trace!("predecessors of {}", vertex);
        Ok(self
            .store
            .adjacent_vertices(vertex, Direction::Incoming)?
            .into_iter()
            .collect())
    }

    fn successors(&self, vertex: NodeId) -> Result<FxHashSet<NodeId>, S::Error> {
        trace!("successors of {}", vertex);
        Ok(self
            .store
            .adjacent_vertices(vertex, Direction::Outgoing)?
            .into_iter()
            .collect())
    }
}

impl<S: PropertyGraph + ?Sized> HypergraphMut for StoreHypergraph<'_, S> {
    type MutationError = UnsupportedMutation;

    fn add_vertex(&mut self, _vertex: NodeId) -> MutationResult {
        reject(Mutation::AddVertex, RejectionReason::ExternalIdentity)
    }

    fn add_edge(&mut self, _edge: EdgeId, _vertices: &[NodeId]) -> MutationResult {
        reject(Mutation::AddEdge, RejectionReason::ExternalIdentity)
    }

    fn add_typed_edge(&mut self, _edge: EdgeId, _vertices: &[NodeId], _edge_type: EdgeType) -> MutationResult {
        reject(Mutation::AddEdge, RejectionReason::ExternalIdentity)
    }

    fn remove_vertex(&mut self, _vertex: NodeId) -> MutationResult {
        reject(Mutation::RemoveVertex, RejectionReason::Immutable)
    }

    fn remove_edge(&mut self, _edge: EdgeId) -> MutationResult {
        reject(Mutation::RemoveEdge, RejectionReason::Immutable)
    }
}
