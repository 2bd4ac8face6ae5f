//! Rejections raised by the read-only graph views

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A mutating operation of the graph contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutation {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mutation::AddVertex => "add_vertex",
            Mutation::AddEdge => "add_edge",
            Mutation::RemoveVertex => "remove_vertex",
            Mutation::RemoveEdge => "remove_edge",
        };
        f.write_str(name)
    }
}

/// Why a view refused a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The store assigns identifiers itself and does not accept
    /// caller-supplied vertices or edges
    ExternalIdentity,
    /// The view treats the graph as immutable for its whole lifetime
    Immutable,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::ExternalIdentity => {
                f.write_str("the backing store assigns identities and does not accept caller-supplied ones")
            }
            RejectionReason::Immutable => f.write_str("the graph view is immutable"),
        }
    }
}

/// A mutation attempted through a read-only view.
///
/// Always permanent: retrying the same call can never succeed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported mutation {operation}: {reason}")]
pub struct UnsupportedMutation {
    pub operation: Mutation,
    pub reason: RejectionReason,
}

impl UnsupportedMutation {
    pub fn new(operation: Mutation, reason: RejectionReason) -> Self {
        UnsupportedMutation { operation, reason }
    }
}

pub type MutationResult = Result<(), UnsupportedMutation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_operation() {
        let err = UnsupportedMutation::new(Mutation::RemoveEdge, RejectionReason::Immutable);
        assert_eq!(err.to_string(), "unsupported mutation remove_edge: the graph view is immutable");

        let err = UnsupportedMutation::new(Mutation::AddVertex, RejectionReason::ExternalIdentity);
        assert!(err.to_string().starts_with("unsupported mutation add_vertex:"));
    }

    #[test]
    fn test_matchable_without_message() {
        let err = UnsupportedMutation::new(Mutation::AddEdge, RejectionReason::Immutable);
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        let back = boxed.downcast_ref::<UnsupportedMutation>().unwrap();
        assert_eq!(back.operation, Mutation::AddEdge);
        assert_eq!(back.reason, RejectionReason::Immutable);
    }
}
