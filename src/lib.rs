//! Propview
//!
//! Read-only adapters that expose a property graph store through the query
//! contract generic graph algorithms expect: degree queries,
//! predecessor/successor enumeration, edge lookup by endpoint pair and
//! edge-type classification.
//!
//! # Layout
//!
//! - [`graph`]: the in-memory property graph ([`GraphStore`]) and the
//!   [`PropertyGraph`] traversal contract the views consume
//! - [`view`]: the hypergraph view ([`StoreHypergraph`]) and the
//!   directed-graph view composed over it ([`DirectedView`])
//!
//! ## Example Usage
//!
//! ```rust
//! use propview::graph::create_modern;
//! use propview::view::{directed_view, DirectedGraph, Hypergraph, HypergraphMut};
//!
//! let store = create_modern();
//! let mut graph = directed_view(&store);
//!
//! assert_eq!(graph.vertex_count().unwrap(), 6);
//! let marko = graph.vertices().unwrap()[0];
//! assert_eq!(graph.out_degree(marko).unwrap(), 3);
//! assert_eq!(graph.predecessor_count(marko).unwrap(), 0);
//!
//! // The view never writes
//! assert!(graph.remove_vertex(marko).is_err());
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod view;

// Re-export main types for convenience
pub use graph::{
    Direction, Edge, EdgeId, GraphError, GraphResult, GraphStore, Label, Node, NodeId, PropertyGraph,
    PropertyMap, PropertyValue, RelationshipType,
};

pub use view::{
    directed_view, DirectedGraph, DirectedGraphMut, DirectedView, EdgeType, Hypergraph, HypergraphMut,
    Mutation, RejectionReason, StoreHypergraph, UnsupportedMutation,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
