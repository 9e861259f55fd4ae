//! Shared fixtures for warren benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use warren_arena::ContainerHandle;
use warren_store::Store;

/// Build a store with one container holding an `n`-record chain.
pub fn store_with_chain(n: usize) -> (Store, ContainerHandle) {
    let mut store = Store::new();
    let container = store
        .create_container(store.root(), "bench")
        .expect("fresh store has capacity");
    for i in 0..n {
        store
            .append_record(container, &format!("key-{i}"), &[0u8; 16])
            .expect("fresh store has capacity");
    }
    (store, container)
}

/// Build a store with a single-branch descent of `depth` containers.
pub fn store_with_descent(depth: usize) -> (Store, ContainerHandle) {
    let mut store = Store::new();
    let mut parent = store.root();
    for i in 0..depth {
        parent = store
            .create_container(parent, &format!("level-{i}"))
            .expect("fresh store has capacity");
    }
    (store, parent)
}
