//! Read-only graph views for algorithm consumers
//!
//! Two composable layers over a [`crate::graph::PropertyGraph`]:
//!
//! - [`StoreHypergraph`] exposes the store as a generic incidence structure
//!   ([`Hypergraph`]).
//! - [`DirectedView`] narrows any [`Hypergraph`] to two-endpoint directed
//!   edges ([`DirectedGraph`]), the shape shortest-path and ranking
//!   algorithms expect.
//!
//! Neither layer caches: every call is answered from the store at call time.
//! Every mutation is rejected with [`UnsupportedMutation`].
//!
//! ```rust
//! use propview::graph::GraphStore;
//! use propview::view::{DirectedGraph, DirectedView, Hypergraph, StoreHypergraph};
//!
//! let mut store = GraphStore::new();
//! let a = store.create_node("person");
//! let b = store.create_node("person");
//! let ab = store.create_edge(a, b, "knows").unwrap();
//!
//! let graph = DirectedView::new(StoreHypergraph::new(&store));
//! assert_eq!(graph.find_edge(a, b).unwrap(), Some(ab));
//! assert!(graph.is_predecessor(a, b).unwrap());
//! assert_eq!(graph.opposite(a, ab).unwrap(), b);
//! ```

pub mod directed;
pub mod error;
pub mod hypergraph;

pub use directed::{DirectedGraph, DirectedGraphMut, DirectedView};
pub use error::{Mutation, MutationResult, RejectionReason, UnsupportedMutation};
pub use hypergraph::{EdgeType, Hypergraph, HypergraphMut, StoreHypergraph};

/// Directed view straight over a store
pub type StoreDirectedGraph<'g, S> = DirectedView<StoreHypergraph<'g, S>>;

/// Wrap `store` in the directed view algorithms consume
pub fn directed_view<S: crate::graph::PropertyGraph + ?Sized>(store: &S) -> StoreDirectedGraph<'_, S> {
    DirectedView::new(StoreHypergraph::new(store))
}
