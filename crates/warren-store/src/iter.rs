//! Iterators over store structure.

use warren_arena::{ContainerHandle, RecordHandle};

use crate::store::Store;

/// Iterator over one container's record chain, in append order.
///
/// Yields record handles from the chain head to the tail. The iterator holds
/// a shared borrow of the store, so the chain cannot change underneath it.
pub struct ChainIter<'a> {
    store: &'a Store,
    cursor: Option<RecordHandle>,
}

impl<'a> ChainIter<'a> {
    pub(crate) fn new(store: &'a Store, head: Option<RecordHandle>) -> Self {
        Self {
            store,
            cursor: head,
        }
    }
}

impl Iterator for ChainIter<'_> {
    type Item = RecordHandle;

    fn next(&mut self) -> Option<RecordHandle> {
        let current = self.cursor?;
        // Chain links only ever point at live records; a failed lookup ends
        // the iteration rather than panicking.
        self.cursor = self.store.record_next(current).ok().flatten();
        Some(current)
    }
}

/// Iterator over all live containers in creation order, root first.
///
/// Backed by the store's insertion-ordered registry, so containers orphaned
/// by a child-slot overwrite still appear until explicitly reclaimed.
pub struct Containers<'a> {
    inner: indexmap::set::Iter<'a, ContainerHandle>,
}

impl<'a> Containers<'a> {
    pub(crate) fn new(inner: indexmap::set::Iter<'a, ContainerHandle>) -> Self {
        Self { inner }
    }
}

impl Iterator for Containers<'_> {
    type Item = ContainerHandle;

    fn next(&mut self) -> Option<ContainerHandle> {
        self.inner.next().copied()
    }
}

impl ExactSizeIterator for Containers<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
