//! Teardown behavior: depth-first release, orphan reclamation, slot reuse.

use warren_store::{Store, StoreError};

/// Build root -> a -> b -> c with some records on each level.
fn deep_store() -> (Store, [warren_arena::ContainerHandle; 3]) {
    let mut store = Store::new();
    let root = store.root();
    let a = store.create_container(root, "a").unwrap();
    let b = store.create_container(a, "b").unwrap();
    let c = store.create_container(b, "c").unwrap();
    store.append_record(a, "ka", b"1").unwrap();
    store.append_record(b, "kb1", b"22").unwrap();
    store.append_record(b, "kb2", b"333").unwrap();
    store.append_record(c, "kc", b"4444").unwrap();
    (store, [a, b, c])
}

#[test]
fn removing_a_mid_container_takes_the_whole_descent() {
    let (mut store, [a, b, c]) = deep_store();

    let reclaimed = store.remove_subtree(b).unwrap();
    assert_eq!(reclaimed.containers, 2, "b and c");
    assert_eq!(reclaimed.records, 3, "b's two records plus c's one");

    // `a` survives with its chain, its child slot cleared.
    assert!(store.contains_container(a));
    assert_eq!(store.child(a).unwrap(), None);
    assert_eq!(store.chain_len(a).unwrap(), 1);

    assert!(!store.contains_container(b));
    assert!(!store.contains_container(c));
}

#[test]
fn reclaimed_slots_are_reused_without_resurrecting_old_handles() {
    let (mut store, [_, b, _]) = deep_store();
    let before = store.entity_count();

    store.remove_subtree(b).unwrap();

    // New allocations land in the freed slots; the old handles stay dead.
    let fresh = store.create_container(store.root(), "fresh").unwrap();
    assert!(store.contains_container(fresh));
    assert!(matches!(store.path(b), Err(StoreError::Stale { .. })));
    assert!(store.entity_count() < before);
}

#[test]
fn orphans_survive_parent_removal_and_stay_reclaimable() {
    let mut store = Store::new();
    let root = store.root();
    let holder = store.create_container(root, "holder").unwrap();
    let orphan = store.create_container(holder, "orphan").unwrap();
    store.append_record(orphan, "k", b"v").unwrap();
    // Overwrite the slot: `orphan` is no longer reachable from `holder`.
    let usurper = store.create_container(holder, "usurper").unwrap();

    // Removing `holder` takes `usurper` down but not the orphan, which has
    // no incoming link from the removed subtree.
    store.remove_subtree(holder).unwrap();
    assert!(!store.contains_container(usurper));
    assert!(store.contains_container(orphan));

    // The orphan's parent chain is broken now.
    assert!(matches!(
        store.ancestors(orphan),
        Err(StoreError::Stale { .. })
    ));

    // Explicit reclamation still works.
    let reclaimed = store.remove_subtree(orphan).unwrap();
    assert_eq!(reclaimed.containers, 1);
    assert_eq!(reclaimed.records, 1);
    assert_eq!(store.container_count(), 1);
}

#[test]
fn clear_then_rebuild() {
    let (mut store, _) = deep_store();
    store.clear().unwrap();

    assert_eq!(store.entity_count(), 1, "only the root survives");

    // The store remains fully usable after a clear.
    let a = store.create_container(store.root(), "again").unwrap();
    let r = store.append_record(a, "k", b"v").unwrap();
    assert_eq!(store.record_key(r).unwrap(), "k");
    assert_eq!(store.child(store.root()).unwrap(), Some(a));
}

#[test]
fn clear_on_an_empty_store_is_a_no_op() {
    let mut store = Store::new();
    let reclaimed = store.clear().unwrap();
    assert_eq!(reclaimed.total(), 0);
    assert!(store.contains_container(store.root()));
}
