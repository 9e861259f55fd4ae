//! Store-level error types.

use std::error::Error;
use std::fmt;

use warren_arena::ArenaError;
use warren_core::Tag;

/// Errors returned by store operations.
///
/// A `Stale`, `NotAContainer`, or `NotARecord` result signals a caller
/// programming error (the original design's fatal precondition); it is
/// surfaced as a typed error because generation-scoped handles make the
/// violation detectable. `CapacityExceeded` is the environmental failure:
/// the caller should treat it as fatal to the requested operation — no
/// partial state is left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A handle whose entity has been freed, or that belongs to another store.
    Stale {
        /// The slot index encoded in the handle.
        index: u32,
        /// The generation encoded in the handle.
        handle_generation: u32,
    },
    /// The arena is at its configured entity capacity.
    CapacityExceeded {
        /// Number of live entities at the time of the request.
        live: u32,
        /// The configured maximum entity count.
        capacity: u32,
    },
    /// The operation required a container handle but found another tag.
    NotAContainer {
        /// The tag actually found behind the handle.
        found: Tag,
    },
    /// The operation required a record handle but found another tag.
    NotARecord {
        /// The tag actually found behind the handle.
        found: Tag,
    },
    /// The root container lives as long as the store and cannot be removed.
    RootNotRemovable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stale {
                index,
                handle_generation,
            } => {
                write!(
                    f,
                    "stale handle: slot {index}, generation {handle_generation}"
                )
            }
            Self::CapacityExceeded { live, capacity } => {
                write!(
                    f,
                    "store capacity exceeded: {live} live entities, capacity {capacity}"
                )
            }
            Self::NotAContainer { found } => {
                write!(f, "expected a container handle, found a {found} entity")
            }
            Self::NotARecord { found } => {
                write!(f, "expected a record handle, found a {found} entity")
            }
            Self::RootNotRemovable => write!(f, "the root container cannot be removed"),
        }
    }
}

impl Error for StoreError {}

impl From<ArenaError> for StoreError {
    fn from(err: ArenaError) -> Self {
        match err {
            ArenaError::StaleHandle {
                index,
                handle_generation,
            } => Self::Stale {
                index,
                handle_generation,
            },
            ArenaError::CapacityExceeded { live, capacity } => {
                Self::CapacityExceeded { live, capacity }
            }
        }
    }
}
