//! Snapshot publication under concurrent readers

use std::sync::Arc;
use std::thread;

use markerutils_store::{MarkerStore, StoreConfig};

use crate::{document, write_source};

#[test]
fn readers_see_whole_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markers.yml");
    write_source(&path, &document(&[("a1", "A"), ("a2", "A"), ("a3", "A")]), 1_000);
    let store = Arc::new(MarkerStore::new(StoreConfig::new(&path)));
    store.refresh_if_stale().unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = store.current();
                    let labels: Vec<&str> =
                        snapshot.markers().iter().map(|m| m.label.as_str()).collect();
                    // Every snapshot comes from exactly one revision.
                    assert!(
                        labels.iter().all(|l| *l == "A") || labels.iter().all(|l| *l == "B"),
                        "mixed snapshot: {labels:?}"
                    );
                    assert_eq!(labels.len(), 3);
                }
            })
        })
        .collect();

    for revision in 0..20 {
        let label = if revision % 2 == 0 { "B" } else { "A" };
        let markers = [("a1", label), ("a2", label), ("a3", label)];
        write_source(&path, &document(&markers), 2_000 + revision);
        store.refresh_if_stale().unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn concurrent_refreshes_parse_each_revision_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markers.yml");
    write_source(&path, &document(&[("spawn", "Spawn Point")]), 1_000);
    let store = Arc::new(MarkerStore::new(StoreConfig::new(&path)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.refresh_if_stale().unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.load_count(), 1);
    assert_eq!(store.current().generation(), 1);
}

#[test]
fn held_snapshot_is_not_mutated_by_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markers.yml");
    write_source(&path, &document(&[("spawn", "Spawn Point")]), 1_000);
    let store = MarkerStore::new(StoreConfig::new(&path));
    store.refresh_if_stale().unwrap();

    let held = store.current();
    write_source(&path, &document(&[("shop", "Shop")]), 2_000);
    store.refresh_if_stale().unwrap();

    assert!(held.markers().contains("spawn"));
    assert!(!held.markers().contains("shop"));
    assert!(store.current().generation() > held.generation());
}
