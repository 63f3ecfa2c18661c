//! Concurrent access tests
//!
//! Many writers and readers sharing one store must never observe duplicate
//! ids or a corrupted listing.
//! Run with: cargo test --test concurrent_access_tests

use item_api::{InMemoryItemRepository, Item, ItemId, ItemRepository};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_inserts_assign_unique_gap_free_ids() {
    let repo = Arc::new(InMemoryItemRepository::new());
    let num_threads = 8;
    let inserts_per_thread = 250;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut ids = Vec::with_capacity(inserts_per_thread);
                for i in 0..inserts_per_thread {
                    let item = repo.insert(Item::new(format!("t{thread_id}-{i}"), ""));
                    ids.push(item.id);
                }
                ids
            })
        })
        .collect();

    let mut all_ids = Vec::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        // Each thread sees its own ids strictly increasing.
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        all_ids.extend(ids);
    }

    let total = num_threads * inserts_per_thread;
    let unique: HashSet<ItemId> = all_ids.iter().copied().collect();
    assert_eq!(unique.len(), total);
    assert_eq!(repo.len(), total);

    let listed: Vec<ItemId> = repo.list_all().iter().map(|item| item.id).collect();
    let expected: Vec<ItemId> = (1..=total as ItemId).collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_concurrent_mixed_operations_keep_store_consistent() {
    let repo = Arc::new(InMemoryItemRepository::new());
    for i in 0..100 {
        repo.insert(Item::new(format!("seed-{i}"), ""));
    }

    let mut handles = vec![];

    // Deleters remove the even seed ids.
    for offset in 0..2 {
        let repo = Arc::clone(&repo);
        handles.push(thread::spawn(move || {
            for id in (2 + offset * 2..=100).step_by(4) {
                repo.delete(id);
            }
        }));
    }

    // Updaters touch the odd seed ids.
    {
        let repo = Arc::clone(&repo);
        handles.push(thread::spawn(move || {
            for id in (1..=99).step_by(2) {
                repo.update(Item::new("updated", "").completed(true).with_id(id));
            }
        }));
    }

    // Readers check that every listing is sorted by id and duplicate-free.
    for _ in 0..4 {
        let repo = Arc::clone(&repo);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let ids: Vec<ItemId> = repo.list_all().iter().map(|item| item.id).collect();
                assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let items = repo.list_all();
    assert_eq!(items.len(), 50);
    assert!(items.iter().all(|item| item.id % 2 == 1));
    assert!(items.iter().all(|item| item.is_complete && item.name == "updated"));
    assert_eq!(repo.insert(Item::new("after", "")).id, 101);
}
