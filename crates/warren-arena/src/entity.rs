//! The tagged entity model: one sum type over root, node, and leaf.
//!
//! Every allocation in the arena is an [`Entity`]. The variant is the tag —
//! there is no untyped overlay, and every access site matches exhaustively.
//! The reverse link from a record is the explicit [`BackRef`] sum type, so
//! the container-or-record aliasing of the original design is statically
//! checked instead of reinterpreted via casting.

use warren_core::{PathLabel, RecordKey, Tag};

use crate::handle::{ContainerHandle, RecordHandle};

/// Return a zero-filled buffer of exactly `len` bytes.
///
/// Record values are built from such a buffer and then overwritten with the
/// payload, so a value buffer can never be observed with undefined content,
/// whatever the copy path does.
pub fn zeroed(len: usize) -> Box<[u8]> {
    vec![0u8; len].into_boxed_slice()
}

/// The reverse link carried by every record.
///
/// The first record in a chain points back at its owning container; every
/// subsequent record points back at its immediate predecessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackRef {
    /// This record is first in its chain; the target owns the chain.
    Container(ContainerHandle),
    /// This record follows another; the target is its predecessor.
    Record(RecordHandle),
}

/// The single top-level container.
///
/// The root has no parent and its path label is the empty string by
/// construction, so neither is representable here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootEntity {
    /// The root's single child-container slot.
    pub child: Option<ContainerHandle>,
    /// Head of the root's record chain.
    pub chain_head: Option<RecordHandle>,
}

impl RootEntity {
    /// The empty root state: no child, no records.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A named subtree container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeEntity {
    /// The parent container. Every node has exactly one.
    pub parent: ContainerHandle,
    /// The node's single child-container slot.
    pub child: Option<ContainerHandle>,
    /// Head of the node's record chain.
    pub chain_head: Option<RecordHandle>,
    /// Bounded path label, truncated silently at capacity.
    pub path: PathLabel,
}

impl NodeEntity {
    /// Construct a fully initialized node: parent linked, child slot and
    /// chain head empty, path label truncated-copied.
    pub fn new(parent: ContainerHandle, path: &str) -> Self {
        Self {
            parent,
            child: None,
            chain_head: None,
            path: PathLabel::new(path),
        }
    }
}

/// A key-value record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafEntity {
    /// Reverse link: owning container if first in chain, else predecessor.
    pub back: BackRef,
    /// The next sibling in the chain, `None` at the tail.
    pub next: Option<RecordHandle>,
    /// Bounded key, truncated silently at capacity.
    pub key: RecordKey,
    /// Exclusively owned value buffer, sized exactly to the input length.
    pub value: Box<[u8]>,
}

impl LeafEntity {
    /// Construct a fully initialized record at the tail position.
    ///
    /// The value buffer is zero-filled at the exact input length and then
    /// overwritten with the payload bytes.
    pub fn new(back: BackRef, key: &str, value: &[u8]) -> Self {
        let mut buf = zeroed(value.len());
        buf.copy_from_slice(value);
        Self {
            back,
            next: None,
            key: RecordKey::new(key),
            value: buf,
        }
    }

    /// Length of the value buffer in bytes.
    pub fn value_len(&self) -> usize {
        self.value.len()
    }
}

/// One allocated entity: the tagged union over all three variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// The single top-level container.
    Root(RootEntity),
    /// A named subtree container.
    Node(NodeEntity),
    /// A key-value record.
    Leaf(LeafEntity),
}

impl Entity {
    /// The tag identifying this entity's variant.
    pub fn tag(&self) -> Tag {
        match self {
            Self::Root(_) => Tag::Root,
            Self::Node(_) => Tag::Node,
            Self::Leaf(_) => Tag::Leaf,
        }
    }
}
