//! The entity tag discriminator.

use std::fmt;

/// Identifies which variant of the entity model a value represents.
///
/// Every allocated entity carries exactly one tag, fixed at construction
/// time and before the entity is linked into any reachable structure. The
/// tag is derived from the `Entity` enum variant, so a reachable entity can
/// never be observed untagged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The single top-level container. Exactly one per store, never freed.
    Root,
    /// A named subtree container beneath the root.
    Node,
    /// A key-value record linked into a container's chain.
    Leaf,
}

impl Tag {
    /// Whether this tag denotes a container (root or node).
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Root | Self::Node)
    }

    /// Whether this tag denotes a key-value record.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Node => write!(f, "node"),
            Self::Leaf => write!(f, "leaf"),
        }
    }
}
