//! Graph-specific error types.

use thiserror::Error;
use tw_core::TwError;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction, validation and query errors.
///
/// Nodes are rendered with their `Debug` output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A query named a node that was never added to the graph.
    #[error("Node {node} is not an element of this graph")]
    UnknownNode { node: String },

    /// An edge from a node to itself on a graph that disallows self-loops.
    #[error("Cannot add self-loop edge on node {node}, as self-loops are not allowed")]
    SelfLoop { node: String },

    /// Compact adjacency does not match the edge list it was built from.
    #[error("Inconsistent adjacency: {what}")]
    InconsistentAdjacency { what: String },
}

impl GraphError {
    pub(crate) fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}

impl From<GraphError> for TwError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownNode { node } => TwError::UnknownNode { node },
            GraphError::SelfLoop { .. } => TwError::InvalidArg {
                what: err.to_string(),
            },
            GraphError::InconsistentAdjacency { .. } => TwError::Invariant {
                what: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_maps_to_core_error() {
        let err: TwError = GraphError::unknown_node(&"Intern").into();
        assert_eq!(
            err,
            TwError::UnknownNode {
                node: "\"Intern\"".into()
            }
        );
    }

    #[test]
    fn self_loop_message() {
        let err = GraphError::SelfLoop { node: "7".into() };
        assert!(err.to_string().contains("self-loop"));
        assert!(matches!(TwError::from(err), TwError::InvalidArg { .. }));
    }
}
