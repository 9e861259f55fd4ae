//! The store context: root lifecycle, container creation, leaf chains,
//! and subtree teardown.
//!
//! A [`Store`] replaces the original design's process-global root with an
//! explicit context object: it owns the entity arena, the root handle, an
//! insertion-ordered registry of live containers, and cumulative metrics.
//! Every operation takes the store plus handles; nothing is ambient.

use indexmap::IndexSet;
use smallvec::{smallvec, SmallVec};

use warren_arena::{
    ArenaConfig, BackRef, ContainerHandle, Entity, EntityArena, LeafEntity, NodeEntity,
    RecordHandle, RootEntity,
};
use warren_core::Tag;

use crate::error::StoreError;
use crate::iter::{ChainIter, Containers};
use crate::metrics::{Reclaimed, StoreMetrics};

/// Configuration for a store.
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreConfig {
    /// Entity arena configuration.
    pub arena: ArenaConfig,
}

/// An in-memory hierarchical key-value store.
///
/// Containers form a single-branch hierarchy: each container owns at most
/// one direct child container plus an append-ordered chain of key-value
/// records. All entities live in one arena and are addressed by
/// generation-scoped handles.
///
/// # Single-child overwrite
///
/// [`create_container`](Store::create_container) writes the parent's single
/// child slot unconditionally. Creating a second child under the same parent
/// orphans the first: it stays live in the arena (and enumerable via
/// [`containers`](Store::containers)) but is no longer reachable from its
/// former parent. This lossy overwrite is the modeled behavior, not a bug;
/// orphans are reclaimed explicitly via
/// [`remove_subtree`](Store::remove_subtree).
pub struct Store {
    arena: EntityArena,
    root: ContainerHandle,
    /// Live containers in creation order, root first. Kept in lockstep with
    /// the arena by `create_container` and the teardown paths.
    registry: IndexSet<ContainerHandle>,
    metrics: StoreMetrics,
}

impl Store {
    /// Create a store with the default configuration.
    ///
    /// Initializes the root container: empty child slot, empty chain, empty
    /// path label.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
            .expect("default capacity admits the root entity")
    }

    /// Create a store with the given configuration.
    ///
    /// Fails with `CapacityExceeded` only if the configured arena capacity
    /// cannot hold even the root entity.
    pub fn with_config(config: StoreConfig) -> Result<Self, StoreError> {
        let mut arena = EntityArena::with_config(config.arena);
        let root = ContainerHandle::from_raw(arena.insert(Entity::Root(RootEntity::empty()))?);
        let mut registry = IndexSet::new();
        registry.insert(root);
        Ok(Self {
            arena,
            root,
            registry,
            metrics: StoreMetrics::default(),
        })
    }

    /// Handle of the root container. Valid for the store's whole lifetime.
    pub fn root(&self) -> ContainerHandle {
        self.root
    }

    // ------------------------------------------------------------------
    // Node allocator
    // ------------------------------------------------------------------

    /// Create a container beneath `parent` with the given path label.
    ///
    /// The label is truncated silently at 255 bytes. The new container is
    /// fully initialized (parent linked, child slot and chain head empty)
    /// before the parent's child slot is overwritten, so a failed allocation
    /// leaves the structure untouched.
    ///
    /// The overwrite is unconditional: a pre-existing child is orphaned, not
    /// freed (see the type-level docs).
    pub fn create_container(
        &mut self,
        parent: ContainerHandle,
        path: &str,
    ) -> Result<ContainerHandle, StoreError> {
        // Validate the parent before allocating anything.
        let (previous_child, _) = self.container_links(parent)?;

        let raw = self
            .arena
            .insert(Entity::Node(NodeEntity::new(parent, path)))?;
        let handle = ContainerHandle::from_raw(raw);

        self.set_child(parent, Some(handle))?;
        self.registry.insert(handle);

        self.metrics.containers_created += 1;
        if previous_child.is_some() {
            self.metrics.children_orphaned += 1;
        }
        Ok(handle)
    }

    // ------------------------------------------------------------------
    // Leaf chain manager
    // ------------------------------------------------------------------

    /// Locate the tail of a container's record chain.
    ///
    /// Returns `None` for an empty chain. Linear in the chain length; there
    /// is deliberately no tail shortcut, so repeated appends to one container
    /// are collectively quadratic.
    pub fn find_chain_tail(
        &self,
        container: ContainerHandle,
    ) -> Result<Option<RecordHandle>, StoreError> {
        Ok(self.chain_tail_counted(container)?.0)
    }

    /// Append a key-value record to a container's chain.
    ///
    /// The key is truncated silently at 127 bytes; the value is copied into
    /// an exactly-sized, zero-initialized owned buffer. The first record in
    /// a chain back-references its owning container; every later record
    /// back-references its predecessor.
    ///
    /// Returns the handle of the newly created record.
    pub fn append_record(
        &mut self,
        container: ContainerHandle,
        key: &str,
        value: &[u8],
    ) -> Result<RecordHandle, StoreError> {
        let (tail, hops) = self.chain_tail_counted(container)?;
        let back = match tail {
            Some(previous) => BackRef::Record(previous),
            None => BackRef::Container(container),
        };

        let raw = self
            .arena
            .insert(Entity::Leaf(LeafEntity::new(back, key, value)))?;
        let handle = RecordHandle::from_raw(raw);

        // Link only after the allocation succeeded: no partial state.
        match tail {
            Some(previous) => self.leaf_mut(previous)?.next = Some(handle),
            None => self.set_chain_head(container, Some(handle))?,
        }

        self.metrics.records_appended += 1;
        self.metrics.value_bytes_stored += value.len() as u64;
        self.metrics.chain_scan_hops += hops;
        Ok(handle)
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Release a container, its record chain, and its descendants.
    ///
    /// Depth-first: each container's chain is freed before descending along
    /// its child slot. The parent's child slot is cleared only if it still
    /// points at the target — an orphaned container has no incoming link.
    /// Handles into the removed subtree go stale.
    ///
    /// After the initial validation every step is an infallible in-memory
    /// operation, so teardown is atomic: it cannot stop half-way.
    ///
    /// The root is not removable; use [`clear`](Store::clear) instead.
    pub fn remove_subtree(&mut self, container: ContainerHandle) -> Result<Reclaimed, StoreError> {
        let parent = match self.arena.get(container.raw())? {
            Entity::Node(node) => node.parent,
            Entity::Root(_) => return Err(StoreError::RootNotRemovable),
            Entity::Leaf(_) => return Err(StoreError::NotAContainer { found: Tag::Leaf }),
        };

        // An orphan's former parent may point elsewhere or be gone entirely;
        // unlink only when the live parent still references the target.
        if let Ok((child, _)) = self.container_links(parent) {
            if child == Some(container) {
                self.set_child(parent, None)?;
            }
        }

        let reclaimed = self.free_descent(container)?;
        self.metrics.entities_reclaimed += reclaimed.total();
        Ok(reclaimed)
    }

    /// Release every container and record except the root, including orphans,
    /// restoring the empty root state.
    ///
    /// The root handle stays valid.
    pub fn clear(&mut self) -> Result<Reclaimed, StoreError> {
        let mut reclaimed = self.free_chain(self.root)?;
        loop {
            let next = self
                .registry
                .iter()
                .copied()
                .find(|&c| c != self.root);
            let Some(container) = next else { break };

            // Unlink from a live parent if still referenced, then free.
            let parent = match self.arena.get(container.raw())? {
                Entity::Node(node) => Some(node.parent),
                _ => None,
            };
            if let Some(parent) = parent {
                if let Ok((child, _)) = self.container_links(parent) {
                    if child == Some(container) {
                        self.set_child(parent, None)?;
                    }
                }
            }
            reclaimed.absorb(self.free_descent(container)?);
        }
        self.metrics.entities_reclaimed += reclaimed.total();
        Ok(reclaimed)
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// The container's path label; the empty string for the root.
    pub fn path(&self, container: ContainerHandle) -> Result<&str, StoreError> {
        match self.arena.get(container.raw())? {
            Entity::Root(_) => Ok(""),
            Entity::Node(node) => Ok(node.path.as_str()),
            Entity::Leaf(_) => Err(StoreError::NotAContainer { found: Tag::Leaf }),
        }
    }

    /// The container's parent; `None` for the root.
    pub fn parent(&self, container: ContainerHandle) -> Result<Option<ContainerHandle>, StoreError> {
        match self.arena.get(container.raw())? {
            Entity::Root(_) => Ok(None),
            Entity::Node(node) => Ok(Some(node.parent)),
            Entity::Leaf(_) => Err(StoreError::NotAContainer { found: Tag::Leaf }),
        }
    }

    /// The container's single child slot.
    pub fn child(&self, container: ContainerHandle) -> Result<Option<ContainerHandle>, StoreError> {
        Ok(self.container_links(container)?.0)
    }

    /// Head of the container's record chain.
    pub fn chain_head(
        &self,
        container: ContainerHandle,
    ) -> Result<Option<RecordHandle>, StoreError> {
        Ok(self.container_links(container)?.1)
    }

    /// Number of records in the container's chain.
    pub fn chain_len(&self, container: ContainerHandle) -> Result<usize, StoreError> {
        let (_, hops) = self.chain_tail_counted(container)?;
        Ok(hops as usize)
    }

    /// Iterate the container's record chain in append order.
    pub fn records(&self, container: ContainerHandle) -> Result<ChainIter<'_>, StoreError> {
        let (_, head) = self.container_links(container)?;
        Ok(ChainIter::new(self, head))
    }

    /// Iterate all live containers in creation order, root first.
    ///
    /// Includes containers orphaned by child-slot overwrites.
    pub fn containers(&self) -> Containers<'_> {
        Containers::new(self.registry.iter())
    }

    /// The record's key.
    pub fn record_key(&self, record: RecordHandle) -> Result<&str, StoreError> {
        Ok(self.leaf(record)?.key.as_str())
    }

    /// The record's value bytes.
    pub fn record_value(&self, record: RecordHandle) -> Result<&[u8], StoreError> {
        Ok(&self.leaf(record)?.value)
    }

    /// The record's next sibling, `None` at the tail.
    pub fn record_next(&self, record: RecordHandle) -> Result<Option<RecordHandle>, StoreError> {
        Ok(self.leaf(record)?.next)
    }

    /// The record's back-reference: owning container if first in chain,
    /// predecessor record otherwise.
    pub fn record_back(&self, record: RecordHandle) -> Result<BackRef, StoreError> {
        Ok(self.leaf(record)?.back)
    }

    /// Ancestor containers of `container`, nearest first, ending at the root.
    ///
    /// Empty for the root itself. Fails with `Stale` if the parent chain is
    /// broken (an orphan whose former parent was removed).
    pub fn ancestors(
        &self,
        container: ContainerHandle,
    ) -> Result<SmallVec<[ContainerHandle; 8]>, StoreError> {
        let mut path: SmallVec<[ContainerHandle; 8]> = smallvec![];
        let mut cursor = self.parent(container)?;
        while let Some(parent) = cursor {
            path.push(parent);
            cursor = self.parent(parent)?;
        }
        Ok(path)
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self, container: ContainerHandle) -> Result<usize, StoreError> {
        Ok(self.ancestors(container)?.len())
    }

    /// Whether the handle resolves to a live container.
    pub fn contains_container(&self, container: ContainerHandle) -> bool {
        matches!(
            self.arena.get(container.raw()),
            Ok(Entity::Root(_) | Entity::Node(_))
        )
    }

    /// Whether the handle resolves to a live record.
    pub fn contains_record(&self, record: RecordHandle) -> bool {
        matches!(self.arena.get(record.raw()), Ok(Entity::Leaf(_)))
    }

    /// Number of live containers, root included.
    pub fn container_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of live records.
    pub fn record_count(&self) -> usize {
        self.arena.live_count() as usize - self.registry.len()
    }

    /// Number of live entities of any tag.
    pub fn entity_count(&self) -> usize {
        self.arena.live_count() as usize
    }

    /// Cumulative store metrics.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    /// Child slot and chain head of a container, validated by tag.
    fn container_links(
        &self,
        container: ContainerHandle,
    ) -> Result<(Option<ContainerHandle>, Option<RecordHandle>), StoreError> {
        match self.arena.get(container.raw())? {
            Entity::Root(root) => Ok((root.child, root.chain_head)),
            Entity::Node(node) => Ok((node.child, node.chain_head)),
            Entity::Leaf(_) => Err(StoreError::NotAContainer { found: Tag::Leaf }),
        }
    }

    /// Tail of the chain plus the number of records visited to find it.
    fn chain_tail_counted(
        &self,
        container: ContainerHandle,
    ) -> Result<(Option<RecordHandle>, u64), StoreError> {
        let (_, head) = self.container_links(container)?;
        let Some(mut cursor) = head else {
            return Ok((None, 0));
        };
        let mut hops = 1u64;
        loop {
            match self.leaf(cursor)?.next {
                Some(next) => {
                    cursor = next;
                    hops += 1;
                }
                None => return Ok((Some(cursor), hops)),
            }
        }
    }

    fn leaf(&self, record: RecordHandle) -> Result<&LeafEntity, StoreError> {
        match self.arena.get(record.raw())? {
            Entity::Leaf(leaf) => Ok(leaf),
            other => Err(StoreError::NotARecord { found: other.tag() }),
        }
    }

    fn leaf_mut(&mut self, record: RecordHandle) -> Result<&mut LeafEntity, StoreError> {
        match self.arena.get_mut(record.raw())? {
            Entity::Leaf(leaf) => Ok(leaf),
            other => Err(StoreError::NotARecord { found: other.tag() }),
        }
    }

    fn set_child(
        &mut self,
        container: ContainerHandle,
        child: Option<ContainerHandle>,
    ) -> Result<(), StoreError> {
        match self.arena.get_mut(container.raw())? {
            Entity::Root(root) => root.child = child,
            Entity::Node(node) => node.child = child,
            Entity::Leaf(_) => return Err(StoreError::NotAContainer { found: Tag::Leaf }),
        }
        Ok(())
    }

    fn set_chain_head(
        &mut self,
        container: ContainerHandle,
        head: Option<RecordHandle>,
    ) -> Result<(), StoreError> {
        match self.arena.get_mut(container.raw())? {
            Entity::Root(root) => root.chain_head = head,
            Entity::Node(node) => node.chain_head = head,
            Entity::Leaf(_) => return Err(StoreError::NotAContainer { found: Tag::Leaf }),
        }
        Ok(())
    }

    /// Free a container's entire record chain and clear its chain head.
    fn free_chain(&mut self, container: ContainerHandle) -> Result<Reclaimed, StoreError> {
        let (_, head) = self.container_links(container)?;
        let mut reclaimed = Reclaimed::default();
        let mut cursor = head;
        while let Some(record) = cursor {
            let leaf = match self.arena.remove(record.raw())? {
                Entity::Leaf(leaf) => leaf,
                other => return Err(StoreError::NotARecord { found: other.tag() }),
            };
            cursor = leaf.next;
            reclaimed.records += 1;
        }
        self.set_chain_head(container, None)?;
        Ok(reclaimed)
    }

    /// Depth-first release of a container and everything below it.
    fn free_descent(&mut self, start: ContainerHandle) -> Result<Reclaimed, StoreError> {
        let mut reclaimed = Reclaimed::default();
        let mut stack: SmallVec<[ContainerHandle; 8]> = smallvec![start];
        while let Some(container) = stack.pop() {
            reclaimed.absorb(self.free_chain(container)?);
            let (child, _) = self.container_links(container)?;
            if let Some(child) = child {
                stack.push(child);
            }
            self.arena.remove(container.raw())?;
            self.registry.shift_remove(&container);
            reclaimed.containers += 1;
        }
        Ok(reclaimed)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
