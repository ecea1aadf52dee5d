//! tw-graph: immutable directed graphs for treewalk.
//!
//! Provides:
//! - Incremental graph builder with a configurable node order
//! - Immutable graph value with successor/predecessor queries
//! - Stable node indexing
//!
//! # Example
//!
//! ```
//! use tw_core::ElementOrder;
//! use tw_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::directed().node_order(ElementOrder::natural());
//! builder.put_edge("CEO", "CTO")?.put_edge("CEO", "CFO")?;
//! let graph = builder.build()?;
//!
//! assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![&"CEO", &"CFO", &"CTO"]);
//! assert_eq!(graph.successors(&"CEO")?.count(), 2);
//! # Ok::<(), tw_graph::GraphError>(())
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{ImmutableGraph, NodeIter};
pub use indexing::NodeIndex;
