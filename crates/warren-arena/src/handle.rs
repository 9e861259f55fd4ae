//! Generation-scoped entity handles.
//!
//! An [`EntityHandle`] encodes the slot index of an entity plus the slot's
//! generation at allocation time. Freeing a slot bumps its generation, so a
//! handle held past the entity's lifetime fails the O(1) staleness check
//! instead of silently resolving to whatever reused the slot.

use std::fmt;

/// Raw location of an entity allocation within the arena.
///
/// Handles are plain values: copying one never affects the entity. Whether a
/// handle still resolves is decided by the arena at every access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct EntityHandle {
    /// Slot index within the arena.
    pub(crate) index: u32,
    /// Slot generation when this allocation was made.
    pub(crate) generation: u32,
}

impl EntityHandle {
    /// Create a new handle.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The slot index this handle points at.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The generation this handle belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityHandle(idx={}, gen={})", self.index, self.generation)
    }
}

/// Typed handle to a container entity (the root or a node).
///
/// The wrapper is an ergonomic layer, not a proof: tag agreement is
/// re-checked at every dereference, and a mismatch surfaces as a typed
/// error rather than undefined behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct ContainerHandle(EntityHandle);

impl ContainerHandle {
    /// Wrap a raw handle believed to address a container.
    pub fn from_raw(raw: EntityHandle) -> Self {
        Self(raw)
    }

    /// The underlying raw handle.
    pub fn raw(&self) -> EntityHandle {
        self.0
    }
}

impl fmt::Display for ContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContainerHandle(idx={}, gen={})", self.0.index, self.0.generation)
    }
}

/// Typed handle to a record entity (a leaf).
///
/// Same contract as [`ContainerHandle`]: the tag is verified on access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct RecordHandle(EntityHandle);

impl RecordHandle {
    /// Wrap a raw handle believed to address a record.
    pub fn from_raw(raw: EntityHandle) -> Self {
        Self(raw)
    }

    /// The underlying raw handle.
    pub fn raw(&self) -> EntityHandle {
        self.0
    }
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordHandle(idx={}, gen={})", self.0.index, self.0.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trip() {
        let h = EntityHandle::new(7, 42);
        assert_eq!(h.index(), 7);
        assert_eq!(h.generation(), 42);
    }

    #[test]
    fn typed_wrappers_preserve_raw() {
        let raw = EntityHandle::new(3, 1);
        assert_eq!(ContainerHandle::from_raw(raw).raw(), raw);
        assert_eq!(RecordHandle::from_raw(raw).raw(), raw);
    }

    #[test]
    fn handles_are_plain_values() {
        let a = EntityHandle::new(0, 0);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, EntityHandle::new(0, 1));
        assert_ne!(a, EntityHandle::new(1, 0));
    }
}
