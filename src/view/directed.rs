//! Directed-graph view
//!
//! Narrows a [`Hypergraph`] to classical directed edges with exactly two
//! endpoints. [`DirectedGraph`] adds the direction-aware predicates shortest
//! path and ranking algorithms ask for; all of them are provided methods over
//! the hypergraph primitives, so any hypergraph can be wrapped by
//! [`DirectedView`] without further work.

use super::error::{Mutation, MutationResult, RejectionReason, UnsupportedMutation};
use super::hypergraph::{reject, EdgeType, Hypergraph, HypergraphMut};
use rustc_hash::FxHashSet;

/// Directed-edge contract built strictly from [`Hypergraph`] queries
pub trait DirectedGraph: Hypergraph {
    /// `v1` has an edge into `v2`
    fn is_predecessor(&self, v1: Self::Vertex, v2: Self::Vertex) -> Result<bool, Self::Error> {
        Ok(self.predecessors(v2)?.contains(&v1))
    }

    /// `v2` has an edge into `v1`
    fn is_successor(&self, v1: Self::Vertex, v2: Self::Vertex) -> Result<bool, Self::Error> {
        Ok(self.successors(v2)?.contains(&v1))
    }

    fn predecessor_count(&self, vertex: Self::Vertex) -> Result<usize, Self::Error> {
        Ok(self.predecessors(vertex)?.len())
    }

    fn successor_count(&self, vertex: Self::Vertex) -> Result<usize, Self::Error> {
        Ok(self.successors(vertex)?.len())
    }

    fn is_source(&self, vertex: Self::Vertex, edge: Self::Edge) -> Result<bool, Self::Error> {
        Ok(self.source(edge)? == vertex)
    }

    fn is_dest(&self, vertex: Self::Vertex, edge: Self::Edge) -> Result<bool, Self::Error> {
        Ok(self.dest(edge)? == vertex)
    }

    /// `(source, destination)` of `edge`
    fn endpoints(&self, edge: Self::Edge) -> Result<(Self::Vertex, Self::Vertex), Self::Error> {
        Ok((self.source(edge)?, self.dest(edge)?))
    }

    /// The endpoint of `edge` that is not `vertex`.
    ///
    /// `vertex` must be incident to `edge`. Debug builds panic otherwise;
    /// release builds return the source.
    fn opposite(&self, vertex: Self::Vertex, edge: Self::Edge) -> Result<Self::Vertex, Self::Error> {
        let (source, dest) = self.endpoints(edge)?;
        debug_assert!(
            source == vertex || dest == vertex,
            "opposite: vertex {:?} is not incident to edge {:?}",
            vertex,
            edge
        );
        Ok(if source == vertex { dest } else { source })
    }
}

/// Mutation contract of a directed graph
pub trait DirectedGraphMut: DirectedGraph + HypergraphMut {
    fn add_directed_edge(
        &mut self,
        edge: Self::Edge,
        source: Self::Vertex,
        dest: Self::Vertex,
    ) -> Result<(), Self::MutationError>;

    fn add_directed_typed_edge(
        &mut self,
        edge: Self::Edge,
        source: Self::Vertex,
        dest: Self::Vertex,
        edge_type: EdgeType,
    ) -> Result<(), Self::MutationError>;
}

/// Directed view composed over any [`Hypergraph`].
///
/// Hypergraph queries are forwarded unchanged to the wrapped graph; the
/// directed predicates come from [`DirectedGraph`]. The view is read-only
/// whatever it wraps.
#[derive(Debug, Clone, Copy)]
pub struct DirectedView<H> {
    inner: H,
}

impl<H: Hypergraph> DirectedView<H> {
    pub fn new(inner: H) -> Self {
        DirectedView { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Hypergraph> Hypergraph for DirectedView<H> {
    type Vertex = H::Vertex;
    type Edge = H::Edge;
    type Error = H::Error;

    fn vertices(&self) -> Result<Vec<H::Vertex>, H::Error> {
        self.inner.vertices()
    }

    fn edges(&self) -> Result<Vec<H::Edge>, H::Error> {
        self.inner.edges()
    }

    fn vertex_count(&self) -> Result<usize, H::Error> {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> Result<usize, H::Error> {
        self.inner.edge_count()
    }

    fn contains_vertex(&self, vertex: H::Vertex) -> Result<bool, H::Error> {
        self.inner.contains_vertex(vertex)
    }

    fn contains_edge(&self, edge: H::Edge) -> Result<bool, H::Error> {
        self.inner.contains_edge(edge)
    }

    fn neighbors(&self, vertex: H::Vertex) -> Result<FxHashSet<H::Vertex>, H::Error> {
        self.inner.neighbors(vertex)
    }

    fn incident_edges(&self, vertex: H::Vertex) -> Result<Vec<H::Edge>, H::Error> {
        self.inner.incident_edges(vertex)
    }

    fn incident_vertices(&self, edge: H::Edge) -> Result<Vec<H::Vertex>, H::Error> {
        self.inner.incident_vertices(edge)
    }

    fn find_edge(&self, v1: H::Vertex, v2: H::Vertex) -> Result<Option<H::Edge>, H::Error> {
        self.inner.find_edge(v1, v2)
    }

    fn find_edge_set(&self, v1: H::Vertex, v2: H::Vertex) -> Result<FxHashSet<H::Edge>, H::Error> {
        self.inner.find_edge_set(v1, v2)
    }

    fn degree(&self, vertex: H::Vertex) -> Result<usize, H::Error> {
        self.inner.degree(vertex)
    }

    fn neighbor_count(&self, vertex: H::Vertex) -> Result<usize, H::Error> {
        self.inner.neighbor_count(vertex)
    }

    fn incident_count(&self, edge: H::Edge) -> Result<usize, H::Error> {
        self.inner.incident_count(edge)
    }

    fn is_neighbor(&self, v1: H::Vertex, v2: H::Vertex) -> Result<bool, H::Error> {
        self.inner.is_neighbor(v1, v2)
    }

    fn is_incident(&self, vertex: H::Vertex, edge: H::Edge) -> Result<bool, H::Error> {
        self.inner.is_incident(vertex, edge)
    }

    fn edge_type(&self, edge: H::Edge) -> EdgeType {
        self.inner.edge_type(edge)
    }

    fn default_edge_type(&self) -> EdgeType {
        self.inner.default_edge_type()
    }

    fn edges_of_type(&self, edge_type: EdgeType) -> Result<Vec<H::Edge>, H::Error> {
        self.inner.edges_of_type(edge_type)
    }

    fn edge_count_of_type(&self, edge_type: EdgeType) -> Result<usize, H::Error> {
        self.inner.edge_count_of_type(edge_type)
    }

    fn in_edges(&self, vertex: H::Vertex) -> Result<Vec<H::Edge>, H::Error> {
        self.inner.in_edges(vertex)
    }

    fn out_edges(&self, vertex: H::Vertex) -> Result<Vec<H::Edge>, H::Error> {
        self.inner.out_edges(vertex)
    }

    fn in_degree(&self, vertex: H::Vertex) -> Result<usize, H::Error> {
        self.inner.in_degree(vertex)
    }

    fn out_degree(&self, vertex: H::Vertex) -> Result<usize, H::Error> {
        self.inner.out_degree(vertex)
    }

    fn source(&self, edge: H::Edge) -> Result<H::Vertex, H::Error> {
        self.inner.source(edge)
    }

    fn dest(&self, edge: H::Edge) -> Result<H::Vertex, H::Error> {
        self.inner.dest(edge)
    }

    fn predecessors(&self, vertex: H::Vertex) -> Result<FxHashSet<H::Vertex>, H::Error> {
        self.inner.predecessors(vertex)
    }

    fn successors(&self, vertex: H::Vertex) -> Result<FxHashSet<H::Vertex>, H::Error> {
        self.inner.successors(vertex)
    }
}

impl<H: Hypergraph> DirectedGraph for DirectedView<H> {}

impl<H: Hypergraph> HypergraphMut for DirectedView<H> {
    type MutationError = UnsupportedMutation;

    fn add_vertex(&mut self, _vertex: H::Vertex) -> MutationResult {
        reject(Mutation::AddVertex, RejectionReason::ExternalIdentity)
    }

    fn add_edge(&mut self, _edge: H::Edge, _vertices: &[H::Vertex]) -> MutationResult {
        reject(Mutation::AddEdge, RejectionReason::ExternalIdentity)
    }

    fn add_typed_edge(&mut self, _edge: H::Edge, _vertices: &[H::Vertex], _edge_type: EdgeType) -> MutationResult {
        reject(Mutation::AddEdge, RejectionReason::ExternalIdentity)
    }

    fn remove_vertex(&mut self, _vertex: H::Vertex) -> MutationResult {
        reject(Mutation::RemoveVertex, RejectionReason::Immutable)
    }

    fn remove_edge(&mut self, _edge: H::Edge) -> MutationResult {
        reject(Mutation::RemoveEdge, RejectionReason::Immutable)
    }
}

impl<H: Hypergraph> DirectedGraphMut for DirectedView<H> {
    fn add_directed_edge(&mut self, _edge: H::Edge, _source: H::Vertex, _dest: H::Vertex) -> MutationResult {
        reject(Mutation::AddEdge, RejectionReason::Immutable)
    }

    fn add_directed_typed_edge(
        &mut self,
        _edge: H::Edge,
        _source: H::Vertex,
        _dest: H::Vertex,
        _edge_type: EdgeType,
    ) -> MutationResult {
        reject(Mutation::AddEdge, RejectionReason::Immutable)
    }
}
