//! Core graph data structures.

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use tw_core::ElementOrder;

use crate::error::{GraphError, GraphResult};
use crate::indexing::NodeIndex;

/// Iterator over graph nodes, yielded by reference.
#[derive(Debug)]
pub struct NodeIter<'a, N> {
    nodes: &'a [N],
    ids: std::slice::Iter<'a, usize>,
}

impl<'a, N> NodeIter<'a, N> {
    fn new(nodes: &'a [N], ids: &'a [usize]) -> Self {
        Self {
            nodes,
            ids: ids.iter(),
        }
    }
}

impl<N> Clone for NodeIter<'_, N> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            ids: self.ids.clone(),
        }
    }
}

impl<'a, N> Iterator for NodeIter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        let nodes = self.nodes;
        self.ids.next().map(|&i| &nodes[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<N> DoubleEndedIterator for NodeIter<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.ids.next_back().map(|&i| &nodes[i])
    }
}

impl<N> ExactSizeIterator for NodeIter<'_, N> {}

impl<N> FusedIterator for NodeIter<'_, N> {}

/// A validated, immutable directed graph.
///
/// The graph stores:
/// - All nodes, indexed by first-insertion order.
/// - Node ids in the configured enumeration order.
/// - Compact adjacency in both directions, one slice per node.
///
/// It holds no reference to the builder it came from.
#[derive(Debug, Clone)]
pub struct ImmutableGraph<N> {
    pub(crate) index: NodeIndex<N>,
    pub(crate) order: ElementOrder<N>,

    /// Node ids sorted by `order`.
    pub(crate) ordered: Vec<usize>,

    pub(crate) allows_self_loops: bool,

    /// Edges as (from, to) ids, in insertion order.
    pub(crate) edges: Vec<(usize, usize)>,

    /// Offsets for node->successor adjacency: node i's successors are in
    /// succ[succ_offsets[i]..succ_offsets[i+1]].
    pub(crate) succ_offsets: Vec<usize>,
    pub(crate) succ: Vec<usize>,

    /// Same layout for node->predecessor adjacency.
    pub(crate) pred_offsets: Vec<usize>,
    pub(crate) pred: Vec<usize>,
}

impl<N> ImmutableGraph<N> {
    /// Always `true`: edges have a source and a target.
    pub fn is_directed(&self) -> bool {
        true
    }

    pub fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    pub fn node_order(&self) -> &ElementOrder<N> {
        &self.order
    }

    /// All nodes in the configured order.
    pub fn nodes(&self) -> NodeIter<'_, N> {
        NodeIter::new(self.index.nodes(), &self.ordered)
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges as (from, to) pairs, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (&N, &N)> + '_ {
        let nodes = self.index.nodes();
        self.edges.iter().map(move |&(u, v)| (&nodes[u], &nodes[v]))
    }

    fn adjacent<'a>(
        &'a self,
        offsets: &[usize],
        flat: &'a [usize],
        id: usize,
    ) -> NodeIter<'a, N> {
        let start = offsets[id];
        let end = offsets[id + 1];
        NodeIter::new(self.index.nodes(), &flat[start..end])
    }
}

impl<N> ImmutableGraph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains(node)
    }

    fn id_of(&self, node: &N) -> GraphResult<usize> {
        self.index
            .index_of(node)
            .ok_or_else(|| GraphError::unknown_node(node))
    }

    /// Targets of edges leaving `node`, in edge insertion order.
    pub fn successors(&self, node: &N) -> GraphResult<NodeIter<'_, N>> {
        let id = self.id_of(node)?;
        Ok(self.adjacent(&self.succ_offsets, &self.succ, id))
    }

    /// Sources of edges entering `node`, in edge insertion order.
    pub fn predecessors(&self, node: &N) -> GraphResult<NodeIter<'_, N>> {
        let id = self.id_of(node)?;
        Ok(self.adjacent(&self.pred_offsets, &self.pred, id))
    }

    pub fn out_degree(&self, node: &N) -> GraphResult<usize> {
        Ok(self.successors(node)?.len())
    }

    pub fn in_degree(&self, node: &N) -> GraphResult<usize> {
        Ok(self.predecessors(node)?.len())
    }

    /// Whether the edge `from -> to` exists. Unknown nodes simply have no edges.
    pub fn has_edge_connecting(&self, from: &N, to: &N) -> bool {
        let (Some(u), Some(v)) = (self.index.index_of(from), self.index.index_of(to)) else {
            return false;
        };
        let start = self.succ_offsets[u];
        let end = self.succ_offsets[u + 1];
        self.succ[start..end].contains(&v)
    }
}

/// Two graphs are equal when they have the same nodes and the same edges.
/// Enumeration order and self-loop policy do not take part.
impl<N> PartialEq for ImmutableGraph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.index.nodes().iter().all(|n| other.contains_node(n))
            && self.edges().all(|(u, v)| other.has_edge_connecting(u, v))
    }
}

impl<N> Eq for ImmutableGraph<N> where N: Clone + Eq + Hash + fmt::Debug {}

impl<N: fmt::Debug> fmt::Display for ImmutableGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "isDirected: true, allowsSelfLoops: {}, nodes: [",
            self.allows_self_loops
        )?;
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node:?}")?;
        }
        write!(f, "], edges: [")?;
        for (i, (u, v)) in self.edges().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "<{u:?} -> {v:?}>")?;
        }
        write!(f, "]")
    }
}
