//! Lazy walk iterators.
//!
//! A node's successors are collected when that node is expanded; nothing
//! beyond the current frontier is materialized.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::vec;

use crate::traverser::Successors;
use crate::visit::VisitSet;

/// Breadth-first (level order) walk.
pub struct BreadthFirst<'a, N, S, V> {
    successors: &'a S,
    queue: VecDeque<N>,
    visited: V,
}

impl<'a, N, S, V> BreadthFirst<'a, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    pub(crate) fn new(successors: &'a S, roots: impl IntoIterator<Item = N>) -> Self {
        let mut visited = V::default();
        let queue = roots.into_iter().filter(|n| visited.visit(n)).collect();
        Self {
            successors,
            queue,
            visited,
        }
    }
}

impl<N, S, V> Iterator for BreadthFirst<'_, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.queue.pop_front()?;
        for child in self.successors.successors(&node) {
            if self.visited.visit(&child) {
                self.queue.push_back(child);
            }
        }
        Some(node)
    }
}

impl<N, S, V> FusedIterator for BreadthFirst<'_, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
}

/// Depth-first walk yielding each node before its descendants.
pub struct PreOrder<'a, N, S, V> {
    successors: &'a S,
    // One pending-sibling iterator per open level; the bottom holds the roots.
    stack: Vec<vec::IntoIter<N>>,
    visited: V,
}

impl<'a, N, S, V> PreOrder<'a, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    pub(crate) fn new(successors: &'a S, roots: impl IntoIterator<Item = N>) -> Self {
        let roots: Vec<N> = roots.into_iter().collect();
        Self {
            successors,
            stack: vec![roots.into_iter()],
            visited: V::default(),
        }
    }
}

impl<N, S, V> Iterator for PreOrder<'_, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(node) => {
                    if self.visited.visit(&node) {
                        let children = self.successors.successors(&node);
                        self.stack.push(children.into_iter());
                        return Some(node);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<N, S, V> FusedIterator for PreOrder<'_, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
}

struct Frame<N> {
    // `None` only for the bottom frame holding the roots.
    node: Option<N>,
    pending: vec::IntoIter<N>,
}

/// Depth-first walk yielding each node after all of its descendants.
pub struct PostOrder<'a, N, S, V> {
    successors: &'a S,
    stack: Vec<Frame<N>>,
    visited: V,
}

impl<'a, N, S, V> PostOrder<'a, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    pub(crate) fn new(successors: &'a S, roots: impl IntoIterator<Item = N>) -> Self {
        let roots: Vec<N> = roots.into_iter().collect();
        Self {
            successors,
            stack: vec![Frame {
                node: None,
                pending: roots.into_iter(),
            }],
            visited: V::default(),
        }
    }
}

impl<N, S, V> Iterator for PostOrder<'_, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.pending.next() {
                Some(child) => {
                    if self.visited.visit(&child) {
                        let pending = self.successors.successors(&child).into_iter();
                        self.stack.push(Frame {
                            node: Some(child),
                            pending,
                        });
                    }
                }
                None => {
                    if let Some(Frame {
                        node: Some(node), ..
                    }) = self.stack.pop()
                    {
                        return Some(node);
                    }
                }
            }
        }
    }
}

impl<N, S, V> FusedIterator for PostOrder<'_, N, S, V>
where
    S: Successors<N>,
    V: VisitSet<N>,
{
}
