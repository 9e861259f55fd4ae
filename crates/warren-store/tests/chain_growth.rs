//! End-to-end scenario and chain-growth behavior across the public API.

use warren_arena::BackRef;
use warren_store::{Store, StoreError};

#[test]
fn end_to_end_root_container_records() {
    // Initialize: root with empty links and an empty path label.
    let mut store = Store::new();
    let root = store.root();
    assert_eq!(store.path(root).unwrap(), "");
    assert_eq!(store.child(root).unwrap(), None);
    assert_eq!(store.chain_head(root).unwrap(), None);

    // Grow the hierarchy by one container with the root's (empty) label.
    let a = store.create_container(root, "").unwrap();
    assert_eq!(store.parent(a).unwrap(), Some(root));
    assert_eq!(store.child(root).unwrap(), Some(a));

    // First record becomes the chain head.
    let v1 = [1u8, 2, 3];
    let l1 = store.append_record(a, "k1", &v1).unwrap();
    assert_eq!(store.chain_head(a).unwrap(), Some(l1));

    // Second record links behind the first; the head does not move.
    let v2 = [4u8, 5, 6, 7];
    let l2 = store.append_record(a, "k2", &v2).unwrap();
    assert_eq!(store.record_next(l1).unwrap(), Some(l2));
    assert_eq!(store.chain_head(a).unwrap(), Some(l1));

    // Contents round-trip.
    assert_eq!(store.record_key(l1).unwrap(), "k1");
    assert_eq!(store.record_value(l1).unwrap(), &v1);
    assert_eq!(store.record_key(l2).unwrap(), "k2");
    assert_eq!(store.record_value(l2).unwrap(), &v2);
}

#[test]
fn long_chain_keeps_append_order() {
    let mut store = Store::new();
    let container = store.create_container(store.root(), "bulk").unwrap();

    let handles: Vec<_> = (0..200)
        .map(|i| {
            store
                .append_record(container, &format!("key-{i}"), &[i as u8])
                .unwrap()
        })
        .collect();

    let walked: Vec<_> = store.records(container).unwrap().collect();
    assert_eq!(walked, handles);
    assert_eq!(store.chain_len(container).unwrap(), 200);
    assert_eq!(store.find_chain_tail(container).unwrap(), handles.last().copied());

    // The first record points back at the container, all others at their
    // predecessor.
    assert_eq!(
        store.record_back(handles[0]).unwrap(),
        BackRef::Container(container)
    );
    for pair in handles.windows(2) {
        assert_eq!(store.record_back(pair[1]).unwrap(), BackRef::Record(pair[0]));
    }
}

#[test]
fn tail_scan_cost_grows_quadratically() {
    let mut store = Store::new();
    let container = store.create_container(store.root(), "hot").unwrap();

    for i in 0..10 {
        store.append_record(container, &format!("k{i}"), b"v").unwrap();
    }
    // Appends visit 0 + 1 + ... + 9 records while locating the tail.
    assert_eq!(store.metrics().chain_scan_hops, 45);
}

#[test]
fn chains_on_different_containers_are_independent() {
    let mut store = Store::new();
    let root = store.root();
    let a = store.create_container(root, "a").unwrap();
    let b = store.create_container(a, "b").unwrap();

    let ra = store.append_record(a, "on-a", b"1").unwrap();
    let rb = store.append_record(b, "on-b", b"2").unwrap();

    assert_eq!(store.chain_head(a).unwrap(), Some(ra));
    assert_eq!(store.chain_head(b).unwrap(), Some(rb));
    assert_eq!(store.record_next(ra).unwrap(), None);
    assert_eq!(store.record_next(rb).unwrap(), None);
}

#[test]
fn empty_value_records_are_allowed() {
    let mut store = Store::new();
    let root = store.root();
    let r = store.append_record(root, "empty", b"").unwrap();
    assert_eq!(store.record_value(r).unwrap(), b"");
}

#[test]
fn operations_on_removed_containers_fail_stale() {
    let mut store = Store::new();
    let a = store.create_container(store.root(), "a").unwrap();
    store.remove_subtree(a).unwrap();

    assert!(matches!(
        store.append_record(a, "k", b"v"),
        Err(StoreError::Stale { .. })
    ));
    assert!(matches!(
        store.create_container(a, "child"),
        Err(StoreError::Stale { .. })
    ));
    assert!(matches!(
        store.find_chain_tail(a),
        Err(StoreError::Stale { .. })
    ));
}
