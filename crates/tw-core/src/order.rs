//! Node enumeration policy.

use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

/// Shared comparator over elements.
pub type Comparator<N> = Arc<dyn Fn(&N, &N) -> Ordering + Send + Sync>;

/// Order in which a collection of elements is enumerated.
///
/// - `Insertion` keeps the order elements were first added in
/// - `Sorted` imposes the order given by a comparator
///
/// The comparator should be a total order over distinct elements. Sorting is
/// stable, so elements it considers equal keep their insertion order and are
/// never merged.
pub enum ElementOrder<N> {
    Insertion,
    /// Comparator order. The comparator should be total over distinct elements.
    Sorted(Comparator<N>),
}

impl<N> ElementOrder<N> {
    pub fn insertion() -> Self {
        Self::Insertion
    }

    pub fn sorted<F>(cmp: F) -> Self
    where
        F: Fn(&N, &N) -> Ordering + Send + Sync + 'static,
    {
        Self::Sorted(Arc::new(cmp))
    }

    /// Order by a key extracted from each element.
    pub fn sorted_by_key<K, F>(key: F) -> Self
    where
        N: 'static,
        K: Ord + 'static,
        F: Fn(&N) -> K + Send + Sync + 'static,
    {
        Self::sorted(move |a, b| key(a).cmp(&key(b)))
    }

    /// Order by the elements' own `Ord` impl.
    pub fn natural() -> Self
    where
        N: Ord + 'static,
    {
        Self::sorted(|a: &N, b: &N| a.cmp(b))
    }

    pub fn is_sorted(&self) -> bool {
        matches!(self, Self::Sorted(_))
    }

    /// Stable-sort indices into `elements` by the element each one refers to.
    ///
    /// No-op under `Insertion`, which assumes `indices` are already in
    /// insertion order.
    pub fn sort_indices(&self, indices: &mut [usize], elements: &[N]) {
        if let Self::Sorted(cmp) = self {
            indices.sort_by(|&a, &b| cmp(&elements[a], &elements[b]));
        }
    }
}

impl<N> Default for ElementOrder<N> {
    fn default() -> Self {
        Self::Insertion
    }
}

impl<N> Clone for ElementOrder<N> {
    fn clone(&self) -> Self {
        match self {
            Self::Insertion => Self::Insertion,
            Self::Sorted(cmp) => Self::Sorted(Arc::clone(cmp)),
        }
    }
}

impl<N> fmt::Debug for ElementOrder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion => write!(f, "ElementOrder::Insertion"),
            Self::Sorted(_) => write!(f, "ElementOrder::Sorted(..)"),
        }
    }
}
