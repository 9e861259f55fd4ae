//! Store context and tree operations for the warren hierarchical key-value
//! store.
//!
//! The [`Store`] owns the entity arena and exposes the operation surface:
//! container creation beneath a parent, record appends onto a container's
//! chain, chain-tail lookup, read accessors, and explicit subtree teardown.
//!
//! All operations are synchronous and single-threaded; `&mut self` on every
//! mutating method makes concurrent mutation a compile error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod iter;
pub mod metrics;
pub mod store;

pub use error::StoreError;
pub use iter::{ChainIter, Containers};
pub use metrics::{Reclaimed, StoreMetrics};
pub use store::{Store, StoreConfig};
