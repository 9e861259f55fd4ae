//! Arena configuration parameters.

/// Configuration for the entity arena.
///
/// Controls the capacity limit. All values are immutable after creation.
#[derive(Clone, Copy, Debug)]
pub struct ArenaConfig {
    /// Maximum number of live entities (containers plus records).
    ///
    /// Insertions beyond this limit fail with `CapacityExceeded`; nothing
    /// is evicted. Default: [`ArenaConfig::DEFAULT_MAX_ENTITIES`].
    pub max_entities: u32,
}

impl ArenaConfig {
    /// Default entity capacity: 1M entities.
    pub const DEFAULT_MAX_ENTITIES: u32 = 1 << 20;

    /// Create a config with the given entity capacity.
    pub fn new(max_entities: u32) -> Self {
        Self { max_entities }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ENTITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(ArenaConfig::default().max_entities, 1 << 20);
    }

    #[test]
    fn explicit_capacity_preserved() {
        assert_eq!(ArenaConfig::new(64).max_entities, 64);
    }
}
