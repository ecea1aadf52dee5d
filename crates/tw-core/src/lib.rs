//! tw-core: shared foundation for treewalk.
//!
//! Contains:
//! - error (shared error type)
//! - order (node enumeration policy used by graph values)

pub mod error;
pub mod order;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TwError, TwResult};
pub use order::ElementOrder;
