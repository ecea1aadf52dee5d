//! Graph validation logic.

use std::fmt;

use crate::error::{GraphError, GraphResult};

/// Validate the edge list against the self-loop policy.
///
/// `put_edge` already keeps endpoints in range and edges distinct, so those
/// are only asserted in debug builds. The self-loop policy can change after
/// edges were recorded, which is why it is checked here.
pub(crate) fn validate_edges<N: fmt::Debug>(
    nodes: &[N],
    edges: &[(usize, usize)],
    allows_self_loops: bool,
) -> GraphResult<()> {
    for &(from, to) in edges {
        debug_assert!(from < nodes.len() && to < nodes.len());
        if from == to && !allows_self_loops {
            return Err(GraphError::SelfLoop {
                node: format!("{:?}", nodes[from]),
            });
        }
    }
    Ok(())
}

/// Validate a compact adjacency list against the edges it was built from.
pub(crate) fn validate_adjacency(
    node_count: usize,
    edge_count: usize,
    offsets: &[usize],
    flat: &[usize],
) -> GraphResult<()> {
    // Offsets array has one entry per node plus the end sentinel
    if offsets.len() != node_count + 1 {
        return Err(GraphError::InconsistentAdjacency {
            what: format!("{} offsets for {} nodes", offsets.len(), node_count),
        });
    }

    if offsets.first() != Some(&0) || offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(GraphError::InconsistentAdjacency {
            what: "offsets are not monotone from zero".into(),
        });
    }

    // Every edge appears exactly once
    if offsets[node_count] != flat.len() || flat.len() != edge_count {
        return Err(GraphError::InconsistentAdjacency {
            what: format!(
                "{} adjacency entries for {} edges",
                flat.len(),
                edge_count
            ),
        });
    }

    if let Some(&bad) = flat.iter().find(|&&n| n >= node_count) {
        return Err(GraphError::InconsistentAdjacency {
            what: format!("adjacency entry {bad} outside 0..{node_count}"),
        });
    }

    Ok(())
}
