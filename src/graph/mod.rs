//! Property graph store
//!
//! This module implements the backing data model the views wrap:
//! - Nodes with labels and properties
//! - Directed edges with a relationship type and properties
//! - Multiple edges between the same nodes, and self-loops
//! - In-memory storage with id-indexed arenas and adjacency lists
//! - The [`PropertyGraph`] traversal contract the views consume

pub mod edge;
pub mod modern;
pub mod node;
pub mod property;
pub mod store;
pub mod traversal;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use modern::create_modern;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore};
pub use traversal::{Direction, PropertyGraph};
pub use types::{EdgeId, Label, NodeId, RelationshipType};
