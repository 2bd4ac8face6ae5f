//! Graph algorithms written against the propview directed-graph contract.
//!
//! Nothing here knows about a concrete store: every function takes any
//! [`propview::view::DirectedGraph`] and propagates its errors unchanged.

pub mod pagerank;
pub mod pathfinding;

pub use pagerank::{page_rank, PageRankConfig};
pub use pathfinding::{bfs, dijkstra, PathResult};
