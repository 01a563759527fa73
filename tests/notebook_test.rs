//! Notebook store integration tests.
//!
//! These run against disk-backed storage to cover the persisted-blob
//! behavior: fresh stores reading what another instance wrote, corrupt
//! blobs, and the serialization of back-to-back mutations.

use std::fs;
use std::sync::Arc;
use std::thread;

use ladle::notebook::{CustomRecipe, NotebookStore, STORAGE_KEY};
use ladle::storage::{FsStorage, Storage};
use tempfile::TempDir;

fn store_at(temp: &TempDir) -> NotebookStore<FsStorage> {
    NotebookStore::new(FsStorage::new(temp.path()))
}

#[test]
fn empty_repository_loads_empty() {
    let temp = TempDir::new().unwrap();
    assert!(store_at(&temp).load().is_empty());
}

#[test]
fn fresh_instance_sees_added_recipe_last() {
    let temp = TempDir::new().unwrap();

    let store = store_at(&temp);
    store.add(CustomRecipe::new("First")).unwrap();
    store.add(CustomRecipe::new("Latest")).unwrap();

    // A fresh store over the same storage reads the same persisted key.
    let fresh = store_at(&temp);
    let recipes = fresh.load();
    assert_eq!(recipes.last().unwrap().title, "Latest");
}

#[test]
fn remove_preserves_relative_order() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    for title in ["A", "B", "C", "D"] {
        store.add(CustomRecipe::new(title)).unwrap();
    }

    let after = store.remove(1).unwrap();
    let titles: Vec<&str> = after.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["A", "C", "D"]);
    assert_eq!(after.len(), 3);
}

#[test]
fn add_update_remove_sequence() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    store.add(CustomRecipe::new("A")).unwrap();
    store.add(CustomRecipe::new("B")).unwrap();
    store.update(0, CustomRecipe::new("A2")).unwrap();
    let after = store.remove(1).unwrap();

    assert_eq!(after.len(), 1);
    assert_eq!(after[0].title, "A2");

    // And the persisted blob agrees.
    assert_eq!(store_at(&temp).load(), after);
}

#[test]
fn back_to_back_mutations_apply_in_order() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    store.add(CustomRecipe::new("P")).unwrap();
    store.add(CustomRecipe::new("Q")).unwrap();

    store.remove(0).unwrap();
    let after = store.add(CustomRecipe::new("X")).unwrap();

    let titles: Vec<&str> = after.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Q", "X"]);
}

#[test]
fn concurrent_adds_lose_nothing() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(store_at(&temp));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.add(CustomRecipe::new(format!("Recipe {}", i))).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every add's read-modify-persist ran under the store lock, so no
    // rewrite clobbered another.
    assert_eq!(store.load().len(), 8);
}

#[test]
fn corrupt_blob_falls_back_to_empty() {
    let temp = TempDir::new().unwrap();
    let storage = FsStorage::new(temp.path());
    storage.write(STORAGE_KEY, "{definitely not json").unwrap();

    let store = NotebookStore::new(storage);
    assert!(store.load().is_empty());
}

#[test]
fn mutation_after_corruption_restores_valid_blob() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(format!("{}.json", STORAGE_KEY)), "12345garbage").unwrap();

    let store = store_at(&temp);
    store.add(CustomRecipe::new("Rebuilt")).unwrap();

    let recipes = store_at(&temp).load();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Rebuilt");
}

#[test]
fn timestamps_survive_the_blob() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    store.add(CustomRecipe::new("Stamped")).unwrap();
    let loaded = store_at(&temp).load();
    assert!(loaded[0].created_at.is_some());
    assert!(loaded[0].updated_at.is_none());
}
