//! Incremental graph builder.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tw_core::ElementOrder;

use crate::error::{GraphError, GraphResult};
use crate::graph::ImmutableGraph;
use crate::indexing::NodeIndex;
use crate::validate;

/// Builder for constructing a directed graph incrementally.
///
/// Configure the builder with `node_order` and `allows_self_loops`, add
/// edges with `put_edge`, then call `build()` to validate and copy the
/// current state into an `ImmutableGraph`. The builder stays usable after
/// `build()`; later edits never reach graphs already built.
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    index: NodeIndex<N>,
    edges: Vec<(usize, usize)>,
    edge_set: HashSet<(usize, usize)>,
    order: ElementOrder<N>,
    allows_self_loops: bool,
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            index: NodeIndex::default(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
            order: ElementOrder::Insertion,
            allows_self_loops: true,
        }
    }
}

impl<N> GraphBuilder<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Create a new empty builder for a directed graph.
    ///
    /// Nodes enumerate in insertion order and self-loops are allowed.
    pub fn directed() -> Self {
        Self::default()
    }

    /// Start a builder holding a copy of `graph`'s nodes, edges and configuration.
    pub fn from_graph(graph: &ImmutableGraph<N>) -> Self {
        Self {
            index: graph.index.clone(),
            edges: graph.edges.clone(),
            edge_set: graph.edges.iter().copied().collect(),
            order: graph.order.clone(),
            allows_self_loops: graph.allows_self_loops,
        }
    }

    /// Set the order in which the built graph enumerates its nodes.
    pub fn node_order(mut self, order: ElementOrder<N>) -> Self {
        self.order = order;
        self
    }

    /// Whether `put_edge(n, n)` is accepted.
    ///
    /// Disallowing self-loops after one was recorded makes `build()` fail.
    pub fn allows_self_loops(mut self, allow: bool) -> Self {
        self.allows_self_loops = allow;
        self
    }

    /// Capacity hint for the number of distinct nodes.
    pub fn expected_node_count(mut self, count: usize) -> Self {
        self.index.reserve(count);
        self
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add an isolated node. Adding a node twice has no effect.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.index.insert(node);
        self
    }

    /// Add the edge `from -> to`, adding either endpoint if absent.
    ///
    /// Adding the same edge twice has no effect.
    pub fn put_edge(&mut self, from: N, to: N) -> GraphResult<&mut Self> {
        if !self.allows_self_loops && from == to {
            return Err(GraphError::SelfLoop {
                node: format!("{from:?}"),
            });
        }

        let (u, _) = self.index.insert(from);
        let (v, _) = self.index.insert(to);
        if self.edge_set.insert((u, v)) {
            self.edges.push((u, v));
        } else {
            tracing::trace!(from = u, to = v, "edge already present");
        }
        Ok(self)
    }

    /// Build and validate the graph, returning an immutable copy.
    ///
    /// This constructs compact adjacency lists in both directions.
    pub fn build(&self) -> GraphResult<ImmutableGraph<N>> {
        let node_count = self.index.len();

        validate::validate_edges(self.index.nodes(), &self.edges, self.allows_self_loops)?;

        let (succ_offsets, succ) = build_adjacency(node_count, &self.edges, |&(u, v)| (u, v));
        let (pred_offsets, pred) = build_adjacency(node_count, &self.edges, |&(u, v)| (v, u));

        validate::validate_adjacency(node_count, self.edges.len(), &succ_offsets, &succ)?;
        validate::validate_adjacency(node_count, self.edges.len(), &pred_offsets, &pred)?;

        let mut ordered: Vec<usize> = (0..node_count).collect();
        self.order.sort_indices(&mut ordered, self.index.nodes());

        tracing::debug!(
            nodes = node_count,
            edges = self.edges.len(),
            sorted = self.order.is_sorted(),
            "built immutable graph"
        );

        Ok(ImmutableGraph {
            index: self.index.clone(),
            order: self.order.clone(),
            ordered,
            allows_self_loops: self.allows_self_loops,
            edges: self.edges.clone(),
            succ_offsets,
            succ,
            pred_offsets,
            pred,
        })
    }
}

/// Build compact adjacency lists: for each node, collect its neighbours.
///
/// `key` maps an edge to (owner, neighbour). Each node's neighbours keep edge
/// insertion order.
fn build_adjacency(
    node_count: usize,
    edges: &[(usize, usize)],
    key: impl Fn(&(usize, usize)) -> (usize, usize),
) -> (Vec<usize>, Vec<usize>) {
    // Count neighbours per node
    let mut offsets = vec![0; node_count + 1];
    for edge in edges {
        let (owner, _) = key(edge);
        offsets[owner + 1] += 1;
    }

    // Prefix sum into offsets
    for i in 0..node_count {
        offsets[i + 1] += offsets[i];
    }

    // Scatter neighbours into the flat list
    let mut cursor = offsets.clone();
    let mut flat = vec![0; edges.len()];
    for edge in edges {
        let (owner, neighbour) = key(edge);
        flat[cursor[owner]] = neighbour;
        cursor[owner] += 1;
    }

    (offsets, flat)
}
