//! tw-traverse: lazy breadth-first and depth-first walks.
//!
//! Provides:
//! - `Traverser::for_tree` for tree-shaped inputs (no revisit guard)
//! - `Traverser::for_graph` for inputs that may share nodes or contain cycles
//! - Breadth-first, depth-first pre-order and post-order iterators
//!
//! # Example
//!
//! ```
//! use tw_traverse::Traverser;
//!
//! // 0 -> [1, 2], 1 -> [3]
//! let children = |n: &u32| match n {
//!     0 => vec![1, 2],
//!     1 => vec![3],
//!     _ => vec![],
//! };
//! let traverser = Traverser::for_tree(children);
//!
//! let bfs: Vec<u32> = traverser.breadth_first(0).collect();
//! let post: Vec<u32> = traverser.depth_first_post_order(0).collect();
//! assert_eq!(bfs, vec![0, 1, 2, 3]);
//! assert_eq!(post, vec![3, 1, 2, 0]);
//! ```

pub mod iter;
pub mod traverser;
pub mod visit;

pub use iter::{BreadthFirst, PostOrder, PreOrder};
pub use traverser::{Successors, Traverser};
pub use visit::{Unguarded, VisitSet};
