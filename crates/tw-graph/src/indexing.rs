//! Stable indexing of graph nodes.
//!
//! Provides a bidirectional mapping between caller node values and
//! contiguous indices (0..N) assigned in insertion order.

use std::collections::HashMap;
use std::hash::Hash;

/// Index map giving every distinct node a stable, contiguous index.
///
/// Index `i` is the `i`-th distinct node ever inserted. Lookups are O(1)
/// in both directions.
#[derive(Debug, Clone)]
pub struct NodeIndex<N> {
    /// Contiguous list of nodes (index -> node).
    nodes: Vec<N>,

    /// Reverse lookup: node -> index.
    positions: HashMap<N, usize>,
}

impl<N> Default for NodeIndex<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<N> NodeIndex<N>
where
    N: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Reserve room for `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Index of `node`, inserting it first if absent.
    ///
    /// Returns the index and whether the node was new.
    pub fn insert(&mut self, node: N) -> (usize, bool) {
        if let Some(&idx) = self.positions.get(&node) {
            return (idx, false);
        }
        let idx = self.nodes.len();
        self.positions.insert(node.clone(), idx);
        self.nodes.push(node);
        (idx, true)
    }

    /// Get the contiguous index for a node.
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.positions.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.positions.contains_key(node)
    }
}

impl<N> NodeIndex<N> {
    /// Get the node for a contiguous index (returns None if out of bounds).
    pub fn node(&self, idx: usize) -> Option<&N> {
        self.nodes.get(idx)
    }

    /// All nodes in index (insertion) order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
