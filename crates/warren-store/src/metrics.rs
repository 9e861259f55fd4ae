//! Cumulative store metrics.
//!
//! [`StoreMetrics`] captures counters for telemetry and for making the
//! store's documented quirks observable: every child-slot overwrite orphans
//! a container, and every append pays a linear tail scan.

/// Cumulative counters maintained by the store.
///
/// All counters are monotone over the store's lifetime; none reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreMetrics {
    /// Containers created via `create_container` (the root is not counted).
    pub containers_created: u64,
    /// Records appended via `append_record`.
    pub records_appended: u64,
    /// Entities freed by `remove_subtree` / `clear`.
    pub entities_reclaimed: u64,
    /// Cumulative bytes of record values stored.
    pub value_bytes_stored: u64,
    /// Records visited while locating chain tails during appends.
    ///
    /// Grows quadratically under repeated appends to one container — the
    /// accepted cost of the linear tail scan.
    pub chain_scan_hops: u64,
    /// Containers orphaned by a child-slot overwrite in `create_container`.
    pub children_orphaned: u64,
}

/// Entities freed by a single teardown operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reclaimed {
    /// Containers freed.
    pub containers: u64,
    /// Records freed.
    pub records: u64,
}

impl Reclaimed {
    /// Total entities freed.
    pub fn total(&self) -> u64 {
        self.containers + self.records
    }

    /// Fold another teardown's counts into this one.
    pub fn absorb(&mut self, other: Reclaimed) {
        self.containers += other.containers;
        self.records += other.records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StoreMetrics::default();
        assert_eq!(m.containers_created, 0);
        assert_eq!(m.records_appended, 0);
        assert_eq!(m.chain_scan_hops, 0);
    }

    #[test]
    fn reclaimed_totals_and_absorbs() {
        let mut a = Reclaimed {
            containers: 2,
            records: 5,
        };
        a.absorb(Reclaimed {
            containers: 1,
            records: 3,
        });
        assert_eq!(a.containers, 3);
        assert_eq!(a.records, 8);
        assert_eq!(a.total(), 11);
    }
}
