//! Warren: an in-memory hierarchical key-value store.
//!
//! A warren is a tree of containers — the root plus named nodes — where each
//! container owns at most one child container and an append-ordered chain of
//! key-value records. Every entity lives in one tagged arena and is addressed
//! by a generation-scoped handle, so a handle held past its entity's lifetime
//! fails a staleness check instead of dangling.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! warren sub-crates. For most users, adding `warren` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! let mut store = Store::new();
//! let root = store.root();
//!
//! // Grow the hierarchy and attach records.
//! let users = store.create_container(root, "users").unwrap();
//! let first = store.append_record(users, "alice", b"ops").unwrap();
//! let second = store.append_record(users, "bob", b"dev").unwrap();
//!
//! assert_eq!(store.record_key(first).unwrap(), "alice");
//! assert_eq!(store.record_next(first).unwrap(), Some(second));
//! assert_eq!(store.find_chain_tail(users).unwrap(), Some(second));
//!
//! // Teardown is explicit: release the subtree, handles go stale.
//! let reclaimed = store.remove_subtree(users).unwrap();
//! assert_eq!(reclaimed.total(), 3);
//! assert!(!store.contains_record(first));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | `Tag`, bounded labels |
//! | [`arena`] | `warren-arena` | `Entity` model, handles, `EntityArena`, `ArenaConfig` |
//! | [`store`] | `warren-store` | `Store`, iterators, metrics, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: the entity tag and bounded label types.
pub mod types {
    pub use warren_core::*;
}

/// The entity model and arena: handles, tagged entities, slab allocation.
pub mod arena {
    pub use warren_arena::*;
}

/// The store context: operations, iterators, metrics, errors.
pub mod store {
    pub use warren_store::*;
}

pub use warren_arena::{BackRef, ContainerHandle, RecordHandle};
pub use warren_core::Tag;
pub use warren_store::{Reclaimed, Store, StoreConfig, StoreError, StoreMetrics};

/// The most commonly used types, importable in one line.
pub mod prelude {
    pub use warren_arena::{BackRef, ContainerHandle, RecordHandle};
    pub use warren_core::Tag;
    pub use warren_store::{Reclaimed, Store, StoreConfig, StoreError};
}
