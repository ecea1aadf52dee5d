//! Revisit guards used while walking.

use std::collections::HashSet;
use std::hash::Hash;

/// Per-walk record of which nodes have been reached.
///
/// A fresh value is created for every walk, so walks never share state.
pub trait VisitSet<N>: Default {
    /// Mark `node` as reached. Returns `true` the first time it is seen.
    fn visit(&mut self, node: &N) -> bool;
}

/// Guard for trees: every node counts as new.
///
/// Walking a cyclic input with this guard never terminates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unguarded;

impl<N> VisitSet<N> for Unguarded {
    fn visit(&mut self, _node: &N) -> bool {
        true
    }
}

impl<N> VisitSet<N> for HashSet<N>
where
    N: Eq + Hash + Clone,
{
    fn visit(&mut self, node: &N) -> bool {
        if self.contains(node) {
            tracing::trace!(visited = self.len(), "skipping already reached node");
            return false;
        }
        self.insert(node.clone())
    }
}
