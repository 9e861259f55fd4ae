//! Core types for the warren hierarchical key-value store.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! entity tag discriminator and the bounded label types shared by the arena
//! and store crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod label;
pub mod tag;

pub use label::{PathLabel, RecordKey};
pub use tag::Tag;
