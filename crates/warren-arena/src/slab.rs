//! The entity slab: slot vector, free list, generation bumping.
//!
//! [`EntityArena`] owns every container and record in a store. Slots are
//! reused through a free list; each free bumps the slot's generation so
//! handles into the old allocation go stale. A vacant slot holds no entity
//! at all — the defined "empty" state that replaces zero-filled raw memory.

use crate::config::ArenaConfig;
use crate::entity::Entity;
use crate::error::ArenaError;
use crate::handle::EntityHandle;

/// One arena slot: a generation counter plus the entity, if live.
#[derive(Clone, Debug)]
struct Slot {
    /// Bumped on every free. Handles carry the generation at insert time.
    generation: u32,
    /// `None` is the vacant state.
    entity: Option<Entity>,
}

/// Slab allocator for tagged entities.
///
/// Insertion either reuses a vacant slot from the free list or appends a new
/// slot, up to the configured capacity. Every accessor validates the handle's
/// generation against the slot, so use-after-free is an error, not a read of
/// reused memory.
pub struct EntityArena {
    /// All slots, live and vacant.
    slots: Vec<Slot>,
    /// Indices of vacant slots available for reuse.
    free: Vec<u32>,
    /// Number of live entities.
    live: u32,
    config: ArenaConfig,
}

impl EntityArena {
    /// Create an empty arena with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty arena with the given configuration.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            config,
        }
    }

    /// Insert a fully constructed entity, returning its handle.
    ///
    /// The entity arrives tagged and populated; the arena never exposes a
    /// partially initialized slot. Fails with `CapacityExceeded` at the
    /// configured limit, leaving the arena unchanged.
    pub fn insert(&mut self, entity: Entity) -> Result<EntityHandle, ArenaError> {
        if self.live >= self.config.max_entities {
            return Err(ArenaError::CapacityExceeded {
                live: self.live,
                capacity: self.config.max_entities,
            });
        }

        let index = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.entity.is_none(), "free list held a live slot");
            slot.entity = Some(entity);
            index
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entity: Some(entity),
            });
            index
        };

        self.live += 1;
        Ok(EntityHandle::new(index, self.slots[index as usize].generation))
    }

    /// Resolve a handle to a shared entity reference.
    pub fn get(&self, handle: EntityHandle) -> Result<&Entity, ArenaError> {
        self.slot(handle)?
            .entity
            .as_ref()
            .ok_or_else(|| stale(handle))
    }

    /// Resolve a handle to a mutable entity reference.
    pub fn get_mut(&mut self, handle: EntityHandle) -> Result<&mut Entity, ArenaError> {
        self.slot_mut(handle)?
            .entity
            .as_mut()
            .ok_or_else(|| stale(handle))
    }

    /// Free the entity behind a handle, returning it.
    ///
    /// The slot resets to vacant, its generation is bumped (staling every
    /// outstanding handle to the old allocation), and the index joins the
    /// free list for reuse.
    pub fn remove(&mut self, handle: EntityHandle) -> Result<Entity, ArenaError> {
        let slot = self.slot_mut(handle)?;
        let entity = slot.entity.take().ok_or_else(|| stale(handle))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.live -= 1;
        Ok(entity)
    }

    /// Whether a handle currently resolves to a live entity.
    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.slot(handle)
            .map(|s| s.entity.is_some())
            .unwrap_or(false)
    }

    /// Number of live entities.
    pub fn live_count(&self) -> u32 {
        self.live
    }

    /// Configured entity capacity.
    pub fn capacity(&self) -> u32 {
        self.config.max_entities
    }

    /// Total slots (live + vacant).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots available for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    fn slot(&self, handle: EntityHandle) -> Result<&Slot, ArenaError> {
        match self.slots.get(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => Ok(slot),
            _ => Err(stale(handle)),
        }
    }

    fn slot_mut(&mut self, handle: EntityHandle) -> Result<&mut Slot, ArenaError> {
        match self.slots.get_mut(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => Ok(slot),
            _ => Err(stale(handle)),
        }
    }
}

impl Default for EntityArena {
    fn default() -> Self {
        Self::new()
    }
}

fn stale(handle: EntityHandle) -> ArenaError {
    ArenaError::StaleHandle {
        index: handle.index,
        handle_generation: handle.generation,
    }
}
