//! Tagged entity arena for the warren hierarchical key-value store.
//!
//! All containers and records live in one [`EntityArena`]: a slab of tagged
//! [`Entity`] slots addressed by generation-scoped handles. Freed slots bump
//! their generation and reset to a defined vacant state, so a dangling handle
//! is detected as stale instead of dereferencing reused memory.
//!
//! # Architecture
//!
//! ```text
//! EntityArena
//! ├── Slot[] (generation counter + Option<Entity>, None = vacant)
//! ├── free list (vacant slot indices available for reuse)
//! └── ArenaConfig (max_entities capacity limit)
//! ```
//!
//! The arena knows nothing about tree structure. Linking parents, children,
//! and record chains is the store's job; the arena only guarantees that every
//! live slot holds a fully constructed, tagged entity and that every vacant
//! slot holds nothing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entity;
pub mod error;
pub mod handle;
pub mod slab;

pub use config::ArenaConfig;
pub use entity::{zeroed, BackRef, Entity, LeafEntity, NodeEntity, RootEntity};
pub use error::ArenaError;
pub use handle::{ContainerHandle, EntityHandle, RecordHandle};
pub use slab::EntityArena;
