//! Tests for the store adapters

use std::fs;
use std::time::{Duration, Instant};

use gossup::adapters::{Delayed, FileStore, MemoryStore};
use gossup::core::ports::{KeyValueStore, Keyspace, StoreError};
use gossup::core::services::{EngagementStore, PostBoard};
use tempfile::TempDir;

use crate::common::{at, post};

// =============================================================================
// FILE STORE
// =============================================================================

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("store.json"));
    assert_eq!(store.get("anything").unwrap(), None);
    store.remove("anything").unwrap();
    assert!(!store.path().exists());
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/state/store.json");
    FileStore::new(&path)
        .set_many(&[("a".to_string(), "1".to_string()), ("b".to_string(), "[\"x\"]".to_string())])
        .unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(reopened.get("b").unwrap().as_deref(), Some("[\"x\"]"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_file_store_remove_and_overwrite() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("store.json"));
    store.set("k", "old").unwrap();
    store.set("k", "new").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_file_store_empty_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "  \n").unwrap();
    assert_eq!(FileStore::new(&path).get("k").unwrap(), None);
}

#[test]
fn test_file_store_corrupt_file_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();
    let err = FileStore::new(&path).get("k").unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn test_reactions_persist_across_file_store_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let user = gossup::core::models::UserProfile::new("u1", "Owl");
    let mut p = post("p1", 5, 0, 0, 0);

    {
        let store = FileStore::new(&path);
        EngagementStore::new(&store, Keyspace::default())
            .like(Some(&user), &mut p)
            .unwrap();
    }

    let store = FileStore::new(&path);
    let state = EngagementStore::new(&store, Keyspace::default())
        .load(Some(&user), "p1")
        .unwrap();
    assert!(state.liked());
}

#[test]
fn test_seed_saved_to_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("store.json"));
    let board = PostBoard::new(&store, Keyspace::default());
    let now = at(2024, 3, 1);
    let posts = board.all(now).unwrap();
    board.save_all(&posts).unwrap();
    assert_eq!(board.all(at(2030, 1, 1)).unwrap(), posts);
}

// =============================================================================
// MEMORY STORE AND LATENCY
// =============================================================================

#[test]
fn test_memory_store_batch() {
    let store = MemoryStore::new();
    store
        .set_many(&[("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())])
        .unwrap();
    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn test_delayed_store_waits_and_passes_through() {
    let store = Delayed::new(MemoryStore::new(), Duration::from_millis(20));
    let start = Instant::now();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    assert!(start.elapsed() >= Duration::from_millis(40));
    assert_eq!(store.inner().len().unwrap(), 1);
}
