//! Traversal entry points.

use core::fmt;
use core::marker::PhantomData;
use std::collections::HashSet;
use std::hash::Hash;

use crate::iter::{BreadthFirst, PostOrder, PreOrder};
use crate::visit::{Unguarded, VisitSet};

/// Source of a node's children (or, on graphs, its successors).
///
/// Implemented for every `Fn(&N) -> impl IntoIterator<Item = N>`.
/// A node without children returns an empty collection.
pub trait Successors<N> {
    fn successors(&self, node: &N) -> Vec<N>;
}

impl<N, F, I> Successors<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    fn successors(&self, node: &N) -> Vec<N> {
        self(node).into_iter().collect()
    }
}

/// Walks the structure implied by a successors function.
///
/// Every walk method returns a fresh, independent iterator, so the same
/// traverser can walk the same root any number of times.
pub struct Traverser<N, S, V = Unguarded> {
    successors: S,
    _guard: PhantomData<fn() -> (N, V)>,
}

impl<N, F, I> Traverser<N, F, Unguarded>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    /// Traverser for trees.
    ///
    /// The input must be a tree, or at least acyclic: no revisit guard is
    /// kept, so a node reachable along two paths is yielded twice and a
    /// cycle makes every walk infinite.
    pub fn for_tree(children: F) -> Self {
        Self {
            successors: children,
            _guard: PhantomData,
        }
    }
}

impl<N, F, I> Traverser<N, F, HashSet<N>>
where
    N: Eq + Hash + Clone,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    /// Traverser for general directed graphs.
    ///
    /// Each walk keeps a visited set, so every reachable node is yielded
    /// exactly once and cycles terminate.
    pub fn for_graph(successors: F) -> Self {
        Self {
            successors,
            _guard: PhantomData,
        }
    }
}

impl<N, S, V> Traverser<N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    /// Level order: `root`, then its children, then their children.
    pub fn breadth_first(&self, root: N) -> BreadthFirst<'_, N, S, V> {
        self.breadth_first_from([root])
    }

    /// Level order starting from several nodes at depth zero.
    pub fn breadth_first_from(
        &self,
        roots: impl IntoIterator<Item = N>,
    ) -> BreadthFirst<'_, N, S, V> {
        BreadthFirst::new(&self.successors, roots)
    }

    /// Each node before any of its descendants.
    pub fn depth_first_pre_order(&self, root: N) -> PreOrder<'_, N, S, V> {
        self.depth_first_pre_order_from([root])
    }

    pub fn depth_first_pre_order_from(
        &self,
        roots: impl IntoIterator<Item = N>,
    ) -> PreOrder<'_, N, S, V> {
        PreOrder::new(&self.successors, roots)
    }

    /// Each node after all of its descendants.
    pub fn depth_first_post_order(&self, root: N) -> PostOrder<'_, N, S, V> {
        self.depth_first_post_order_from([root])
    }

    pub fn depth_first_post_order_from(
        &self,
        roots: impl IntoIterator<Item = N>,
    ) -> PostOrder<'_, N, S, V> {
        PostOrder::new(&self.successors, roots)
    }
}

impl<N, S: Clone, V> Clone for Traverser<N, S, V> {
    fn clone(&self) -> Self {
        Self {
            successors: self.successors.clone(),
            _guard: PhantomData,
        }
    }
}

impl<N, S, V> fmt::Debug for Traverser<N, S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverser")
            .field("guard", &core::any::type_name::<V>())
            .finish_non_exhaustive()
    }
}
